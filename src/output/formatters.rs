//! Formatting utilities for terminal output

use crate::core::Pattern;

/// Pattern with a space between cells, easier to read for long words
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    pattern
        .to_string()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters joined with `separator`
#[must_use]
pub fn letter_list(letters: &[char], separator: &str) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

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
