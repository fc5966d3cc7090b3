//! Shuffled draw queue
//!
//! Hands out catalog indices so that every index appears exactly once per
//! cycle, reshuffling when a cycle is exhausted.

use super::permutation::shuffled_indices;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Errors raised when constructing a sequencer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequencerError {
    /// A sequencer needs at least one index to hand out.
    #[error("Sequencer size must be at least 1, got {size}")]
    InvalidSize { size: usize },
}

/// What happens at the boundary between two cycles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeamPolicy {
    /// Cycles are fully independent; the first draw of a cycle may equal the
    /// last draw of the previous one.
    #[default]
    Allow,
    /// The first draw of a new cycle never equals the previous draw (when the
    /// sequencer has at least two indices).
    AvoidRepeat,
}

/// Construction options for a sequencer backed by `StdRng`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequencerConfig {
    /// Seed for reproducible sequences; `None` seeds from the OS
    pub seed: Option<u64>,
    pub policy: SeamPolicy,
}

impl SequencerConfig {
    #[must_use]
    pub const fn new(seed: Option<u64>, policy: SeamPolicy) -> Self {
        Self { seed, policy }
    }
}

/// Non-repeating random index sequencer
///
/// Owns a permutation of `0..size` and a cursor into it. Each `draw` returns
/// the next index of the current permutation; once all `size` indices have
/// been returned, the next draw starts a freshly shuffled cycle.
///
/// Invariants: the permutation always holds each index in `0..size` exactly
/// once, and `0 <= cursor <= size`.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use vocab_shuffle::sequencer::ShuffleSequencer;
///
/// let mut sequencer = ShuffleSequencer::new(3, StdRng::seed_from_u64(1)).unwrap();
/// let mut cycle: Vec<usize> = (0..3).map(|_| sequencer.draw()).collect();
/// cycle.sort_unstable();
/// assert_eq!(cycle, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct ShuffleSequencer<R = StdRng> {
    order: Vec<usize>,
    cursor: usize,
    last_drawn: Option<usize>,
    cycles_completed: u64,
    policy: SeamPolicy,
    rng: R,
}

impl ShuffleSequencer<StdRng> {
    /// Sequencer with a reproducible `StdRng` seeded from `seed`
    ///
    /// # Errors
    /// Returns `SequencerError::InvalidSize` if `size` is 0.
    pub fn seeded(size: usize, seed: u64) -> Result<Self, SequencerError> {
        Self::new(size, StdRng::seed_from_u64(seed))
    }

    /// Sequencer with a `StdRng` seeded from operating system entropy
    ///
    /// # Errors
    /// Returns `SequencerError::InvalidSize` if `size` is 0.
    pub fn from_os_rng(size: usize) -> Result<Self, SequencerError> {
        Self::new(size, StdRng::from_os_rng())
    }

    /// Sequencer built from command-line style options
    ///
    /// # Errors
    /// Returns `SequencerError::InvalidSize` if `size` is 0.
    pub fn from_config(size: usize, config: SequencerConfig) -> Result<Self, SequencerError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_policy(size, rng, config.policy)
    }
}

impl<R: Rng> ShuffleSequencer<R> {
    /// Create a sequencer over `0..size` with the default seam policy
    ///
    /// # Errors
    /// Returns `SequencerError::InvalidSize` if `size` is 0.
    pub fn new(size: usize, rng: R) -> Result<Self, SequencerError> {
        Self::with_policy(size, rng, SeamPolicy::Allow)
    }

    /// Create a sequencer over `0..size` with an explicit seam policy
    ///
    /// # Errors
    /// Returns `SequencerError::InvalidSize` if `size` is 0.
    pub fn with_policy(size: usize, mut rng: R, policy: SeamPolicy) -> Result<Self, SequencerError> {
        if size == 0 {
            return Err(SequencerError::InvalidSize { size });
        }

        let order = shuffled_indices(size, &mut rng);

        Ok(Self {
            order,
            cursor: 0,
            last_drawn: None,
            cycles_completed: 0,
            policy,
            rng,
        })
    }

    /// Return the next index, reshuffling first if the cycle is exhausted
    ///
    /// Never fails: the result is always in `0..size`.
    pub fn draw(&mut self) -> usize {
        if self.cursor >= self.order.len() {
            self.reshuffle();
        }

        let index = self.order[self.cursor];
        self.cursor += 1;
        self.last_drawn = Some(index);
        index
    }

    /// Discard the rest of the current cycle and start a fresh one
    pub fn reset(&mut self) {
        self.reshuffle();
    }

    fn reshuffle(&mut self) {
        // Shuffling any arrangement uniformly gives a uniform permutation
        self.order.shuffle(&mut self.rng);

        if self.policy == SeamPolicy::AvoidRepeat
            && self.order.len() > 1
            && self.last_drawn == Some(self.order[0])
        {
            let swap_with = self.rng.random_range(1..self.order.len());
            self.order.swap(0, swap_with);
        }

        self.cursor = 0;
        self.cycles_completed += 1;
    }
}

impl<R> ShuffleSequencer<R> {
    /// Number of distinct indices handed out per cycle
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.order.len()
    }

    /// Indices left before the current cycle is exhausted
    #[inline]
    #[must_use]
    pub fn remaining_in_cycle(&self) -> usize {
        self.order.len() - self.cursor
    }

    /// Indices already drawn in the current cycle
    #[inline]
    #[must_use]
    pub fn drawn_in_cycle(&self) -> usize {
        self.cursor
    }

    /// Number of reshuffles so far (by exhaustion or `reset`)
    #[inline]
    #[must_use]
    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    #[inline]
    #[must_use]
    pub fn policy(&self) -> SeamPolicy {
        self.policy
    }

    /// The most recently drawn index, if any
    #[inline]
    #[must_use]
    pub fn last_drawn(&self) -> Option<usize> {
        self.last_drawn
    }
}

/// Infinite stream of draws
impl<R: Rng> Iterator for ShuffleSequencer<R> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.draw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
