//! Terminal output helpers

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a negative result (not an error)
    pub fn miss(message: &str) {
        println!("{} {}", "✗".red(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    /// Print an info message (stderr, so results stay pipeable)
    pub fn info(message: &str) {
        eprintln!("{} {}", "ℹ".blue(), message);
    }
}

/// Format a normalized score for display
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
