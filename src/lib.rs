//! Vocab Shuffle
//!
//! Random vocabulary flashcards. Words are drawn in shuffled order so every
//! word in the list appears exactly once before any word repeats.
//!
//! # Quick Start
//!
//! ```rust
//! use vocab_shuffle::sequencer::ShuffleSequencer;
//! use vocab_shuffle::wordlists::{BUILTIN, load_catalog};
//!
//! let catalog = load_catalog(BUILTIN).unwrap();
//! let mut sequencer = ShuffleSequencer::seeded(catalog.len(), 42).unwrap();
//!
//! let record = &catalog[sequencer.draw()];
//! println!("{}", record.copy_text());
//! ```

// Core domain types
pub mod core;

// Shuffled draw sequencing
pub mod sequencer;

// Word lists
pub mod wordlists;

// Clipboard output
pub mod clipboard;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
