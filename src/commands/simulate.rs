//! Simulate command
//!
//! Audits the sequencer: checks per-cycle coverage over many cycles, counts
//! repeats across cycle seams, and measures how first draws spread across
//! independent sequencers.

use crate::sequencer::{SeamPolicy, SequencerConfig, SequencerError, ShuffleSequencer};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Full cycles to draw from a single sequencer
    pub cycles: usize,
    /// Independent sequencers whose first draw is recorded
    pub trials: usize,
    /// Base seed; trial `i` uses `seed + i + 1`. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub policy: SeamPolicy,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(cycles: usize, trials: usize) -> Self {
        Self {
            cycles,
            trials,
            seed: None,
            policy: SeamPolicy::Allow,
            show_progress: false,
        }
    }
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub size: usize,
    pub policy: SeamPolicy,
    pub cycles_checked: usize,
    /// Cycles that did not contain every index exactly once
    pub incomplete_cycles: usize,
    /// Cycle boundaries where the first draw repeated the previous draw
    pub seam_repeats: usize,
    pub trials: usize,
    /// How often each index came out first across independent sequencers
    pub first_draw_counts: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub draws_per_second: f64,
}

impl SimulationResult {
    /// Number of distinct first-draw values across trials
    #[must_use]
    pub fn distinct_first_values(&self) -> usize {
        self.first_draw_counts.len()
    }

    /// `true` when every checked cycle covered all indices
    #[must_use]
    pub fn coverage_ok(&self) -> bool {
        self.incomplete_cycles == 0
    }
}

/// Run the sequencer audit for a catalog of `size` words
///
/// # Errors
///
/// Returns `SequencerError::InvalidSize` if `size` is 0.
pub fn run_simulation(
    size: usize,
    config: &SimulationConfig,
) -> Result<SimulationResult, SequencerError> {
    let mut sequencer =
        ShuffleSequencer::from_config(size, SequencerConfig::new(config.seed, config.policy))?;

    let pb = if config.show_progress {
        ProgressBar::new((config.cycles + config.trials) as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut incomplete_cycles = 0;
    let mut seam_repeats = 0;
    let mut previous: Option<usize> = None;
    let mut seen: FxHashSet<usize> = FxHashSet::default();

    pb.set_message("checking cycles");
    for _ in 0..config.cycles {
        seen.clear();
        for position in 0..size {
            let index = sequencer.draw();
            if position == 0 && previous == Some(index) {
                seam_repeats += 1;
            }
            seen.insert(index);
            previous = Some(index);
        }
        if seen.len() != size {
            incomplete_cycles += 1;
        }
        pb.inc(1);
    }

    pb.set_message("sampling first draws");
    let base_seed = config.seed;
    let firsts: Vec<usize> = (0..config.trials)
        .into_par_iter()
        .map(|trial| {
            let seed = base_seed.map(|s| s.wrapping_add(trial as u64 + 1));
            let first = ShuffleSequencer::from_config(size, SequencerConfig::new(seed, config.policy))
                .map(|mut s| s.draw());
            pb.inc(1);
            first
        })
        .collect::<Result<_, SequencerError>>()?;

    let mut first_draw_counts: FxHashMap<usize, usize> = FxHashMap::default();
    for index in firsts {
        *first_draw_counts.entry(index).or_insert(0) += 1;
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_draws = config.cycles * size + config.trials;
    log::info!(
        "Simulated {total_draws} draws over {size} words in {:.3}s",
        duration.as_secs_f64()
    );

    Ok(SimulationResult {
        size,
        policy: config.policy,
        cycles_checked: config.cycles,
        incomplete_cycles,
        seam_repeats,
        trials: config.trials,
        first_draw_counts,
        duration,
        draws_per_second: total_draws as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
