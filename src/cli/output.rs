//! Output formatting for the CLI.
//!
//! Everything here writes to stderr: stdout is reserved for the
//! rendered index stream. Colored output respects the NO_COLOR
//! convention via the `colored` crate.

use crate::core::types::IndexStats;

/// Color scheme for CLI messages
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }
}

/// Format duration into human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        let ms = secs * 1000.0;
        format!("{ms:.0}ms")
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print the end-of-run summary
pub fn print_summary(stats: &IndexStats) {
    eprintln!(
        "{} {} words from {} lines across {} pages in {}",
        colors::success("Indexed"),
        colors::number(&stats.words.to_string()),
        colors::number(&stats.lines_read.to_string()),
        colors::number(&stats.pages.to_string()),
        colors::number(&format_duration(stats.duration_ms as f64 / 1000.0))
    );
}
