//! Command implementations

pub mod draw;
pub mod simple;
pub mod simulate;

pub use draw::{DrawResult, DrawnCard, draw_words};
pub use simple::{SimpleCommand, run_simple};
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
