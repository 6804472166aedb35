//! Centralized error messages for CLI output.

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Error to stderr (red). Never suppressed, not even by quiet mode.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Usage error: message plus a pointer at the help flag.
pub fn usage_error(msg: &str) {
    error(msg);
    eprintln!("Run with --help for usage.");
}
