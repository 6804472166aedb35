//! Batch (non-interactive) front-end.

mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use std::process;

/// Run batch mode from raw process arguments.
pub fn run(args: Vec<String>) {
    match Context::new(&args) {
        Ok(context) => context.run(),
        Err(e) => {
            prompts::usage_error(&e.to_string());
            process::exit(2);
        }
    }
}
