//! Formatting utilities for terminal output

use crate::core::{FeedbackEntry, Verdict};
use colored::Colorize;

/// Render feedback as the guessed letters on coloured tiles
#[must_use]
pub fn render_feedback(feedback: &[FeedbackEntry]) -> String {
    feedback
        .iter()
        .map(|entry| {
            let tile = format!(" {} ", entry.guess.to_ascii_uppercase());
            match entry.verdict {
                Verdict::Correct => tile.black().on_green().to_string(),
                Verdict::Present => tile.black().on_yellow().to_string(),
                Verdict::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Comma-separated sorted letters, or `-` when there are none
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
