//! Formatting utilities for terminal output

use crate::core::WordRecord;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress through the current shuffle cycle as a bar
#[must_use]
pub fn cycle_bar(drawn: usize, total: usize, width: usize) -> String {
    create_progress_bar(drawn as f64, total as f64, width)
}

/// Part-of-speech badge, e.g. `[adj.]`
#[must_use]
pub fn badge(record: &WordRecord) -> Option<String> {
    record.part_of_speech().map(|tag| format!("[{tag}]"))
}

/// Example sentence line, e.g. `e.g., The storm abated.`
#[must_use]
pub fn example_line(record: &WordRecord) -> Option<String> {
    record.example().map(|example| format!("e.g., {example}"))
}
