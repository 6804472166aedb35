//! Terminal plumbing: raw mode guard, ANSI helpers, box drawing.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::RawModeGuard;
