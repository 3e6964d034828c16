//! Formatting utilities for terminal output

use crate::core::{Code, Color, ColorSet, Feedback, Mark};
use crate::solver::Slot;
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// A color's code letter in its own terminal color
#[must_use]
pub fn colorize_color(color: Color) -> ColoredString {
    let letter = color.code().to_string();
    match color {
        Color::Green => letter.green(),
        Color::Blue => letter.blue(),
        Color::Red => letter.red(),
        Color::Yellow => letter.yellow(),
        Color::Purple => letter.purple(),
        Color::Cyan => letter.cyan(),
    }
    .bold()
}

/// Format a code as space-separated colored letters
#[must_use]
pub fn colorize_code(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&c| colorize_color(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format feedback as colored symbols
#[must_use]
pub fn colorize_feedback(feedback: &Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| {
            let symbol = mark.symbol().to_string();
            match mark {
                Mark::Exact => symbol.green(),
                Mark::Present => symbol.yellow(),
                Mark::Absent => symbol.bright_black(),
            }
            .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a candidate pool, e.g. `{G,Y,C}` in color
#[must_use]
pub fn colorize_pool(pool: ColorSet) -> String {
    let inner = pool
        .iter()
        .map(|c| colorize_color(c).to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{inner}}}")
}

/// Format one position of the belief state
#[must_use]
pub fn format_slot(slot: Slot) -> String {
    match slot {
        Slot::Resolved(color) => format!("= {}", colorize_color(color)),
        Slot::Unresolved(pool) => colorize_pool(pool),
    }
}

/// Create a bar string
#[must_use]
pub fn ratio_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar used by long-running evaluations
#[must_use]
pub fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}
