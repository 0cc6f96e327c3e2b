//! Diagnostics formatting and printing.
//!
//! All diagnostics go to stderr so that stdout stays clean for generated
//! code in stdout mode. The `colored` crate honors `NO_COLOR` for plain
//! output in tests and pipelines.

use colored::Colorize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a fatal error with its context chain.
pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".bold().red(), error);
}

/// Print a non-fatal warning.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

/// Print the final success summary (file mode only).
pub fn print_success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message.green());
}

/// Print a progress note when verbose output is enabled.
pub fn print_verbose(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{}", message.dimmed());
    }
}
