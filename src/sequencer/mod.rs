//! Shuffled draw sequencing
//!
//! Produces an endless stream of catalog indices where every index appears
//! exactly once per cycle, with each cycle independently shuffled.

mod permutation;
mod queue;

pub use permutation::shuffled_indices;
pub use queue::{SeamPolicy, SequencerConfig, SequencerError, ShuffleSequencer};
