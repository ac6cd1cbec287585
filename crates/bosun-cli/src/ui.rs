//! Terminal UI utilities: status messages and color handling.
//!
//! Status messages go to stderr so plan JSON on stdout stays pipeable.

use owo_colors::OwoColorize;
use std::time::Duration;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Format a duration for status output.
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1_000 {
        format!("{millis}ms")
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, falls back to terminal
/// capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// Should be called early in the application lifecycle. `owo-colors`
/// respects `NO_COLOR` and terminal capabilities on its own; this hook
/// exists for explicit initialization and future extensibility.
pub fn init_colors() {
    let _ = should_use_color();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages_do_not_panic() {
        success("Success message");
        info("Info message");
        warning("Warning message");
        error("Error message");
    }

    #[test]
    fn durations_format_in_both_ranges() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(1_500)), "1.50s");
    }

    // One test, not two: these variables are process-global and parallel
    // tests would race on them.
    #[test]
    fn color_env_variables_are_honored() {
        std::env::set_var("NO_COLOR", "1");
        std::env::remove_var("FORCE_COLOR");
        assert!(!should_use_color());

        std::env::remove_var("NO_COLOR");
        std::env::set_var("FORCE_COLOR", "1");
        assert!(should_use_color());
        std::env::remove_var("FORCE_COLOR");
    }

    #[test]
    fn init_colors_does_not_panic() {
        init_colors();
    }
}
