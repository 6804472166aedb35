//! Batch mode driver: validate flags, print the banner, stream passwords.

use std::io::{self, Write};
use std::process;

use zeroize::Zeroize;

use super::parse::{ParseError, parse};
use super::{CliFlags, prompts};
use crate::pass::{self, Charset, SecureBufWriter, charset};
use crate::tui::print_help;

/// Batch invocation context built from command-line arguments.
pub struct Context {
    flags: CliFlags,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        Ok(Self {
            flags: parse(args)?,
        })
    }

    pub fn run(&self) {
        if self.flags.help {
            print_help();
            return;
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return;
        }

        if let Err(e) = self.flags.validate() {
            prompts::usage_error(&e.to_string());
            process::exit(2);
        }

        let length = self.flags.length.unwrap_or(0);
        let amount = self.flags.amount.unwrap_or(1);
        let max_duplicates = self.flags.max_duplicates.unwrap_or(0);
        let charset = charset::build(&self.flags.charset_spec());

        // Sources were selected but the blacklist swallowed them all.
        if charset.is_empty() && length > 0 {
            prompts::usage_error("the blacklist removes every selected character");
            process::exit(2);
        }

        if !self.flags.quiet {
            print_banner(&charset, length, amount, max_duplicates);
        }

        let stdout = io::stdout();
        let mut out = SecureBufWriter::new(stdout.lock());

        for _ in 0..amount {
            // Fresh working copy per password; exhaustion is deterministic
            // in (charset size, cap, length), so the first failure aborts
            // the batch rather than failing identically `amount` times.
            match pass::generate(&charset, length, max_duplicates) {
                Ok(mut password) => {
                    password.push('\n');
                    let _ = out.write_all(password.as_bytes());
                    password.zeroize();
                }
                Err(e) => {
                    drop(out);
                    prompts::error(&e.to_string());
                    process::exit(1);
                }
            }
        }
    }
}

fn print_banner(charset: &Charset, length: usize, amount: usize, max_duplicates: usize) {
    println!("***** Password Generator *****");
    println!();
    println!("Using this character set (excluding the arrows):");
    println!("\u{2192}{}\u{2190}", charset);
    if max_duplicates > 0 {
        println!(
            "There may be at most {} occurrences of the same character per password.",
            max_duplicates
        );
    } else {
        println!("There are no duplicate character limits.");
    }
    println!();
    println!(
        "Generating {} password{} of length {}:",
        amount,
        if amount == 1 { "" } else { "s" },
        length
    );
    println!();
}
