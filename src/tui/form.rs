//! Interactive form: collect options, generate one password per action.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::exits;
use crate::pass::{self, CharsetSpec, charset};
use crate::terminal::clear;

use super::input::{numeric_input, text_input};
use super::text::{enter_prompt, print_form, print_help};

/// Mutable form fields. The core never sees this struct: generation
/// snapshots it into an immutable `CharsetSpec` the moment it fires.
pub struct FormState {
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub punctuation: bool,
    pub space: bool,
    pub additional: String,
    pub blacklist: String,
    pub max_duplicates: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            length: 12,
            upper: true,
            lower: true,
            digits: true,
            punctuation: true,
            space: false,
            additional: String::new(),
            blacklist: String::new(),
            max_duplicates: 0,
        }
    }
}

impl FormState {
    fn charset_spec(&self) -> CharsetSpec {
        CharsetSpec {
            upper: self.upper,
            lower: self.lower,
            digits: self.digits,
            punctuation: self.punctuation,
            space: self.space,
            additional: self.additional.clone(),
            blacklist: self.blacklist.clone(),
        }
    }
}

/// One-shot message shown under the form on the next redraw.
pub enum Feedback {
    None,
    Info(String),
    Error(String),
}

pub fn run_form() {
    exits::reset_terminal();
    clear();

    let mut state = FormState::default();
    let mut password = String::new();
    let mut feedback = Feedback::None;

    loop {
        print_form(&state, &password, &feedback);
        feedback = Feedback::None;

        let input = match text_input(enter_prompt(), "") {
            Some(s) => s,
            None => break, // Esc on the selection prompt leaves the form
        };

        match input.trim() {
            "" => {
                feedback = match generate_into(&state, &mut password) {
                    Ok(pool) => {
                        Feedback::Info(format!("Generated from a set of {pool} characters."))
                    }
                    Err(msg) => Feedback::Error(msg),
                }
            }
            "1" => {
                if let Some(length) = numeric_input("Enter password length", state.length) {
                    state.length = length;
                }
            }
            "2" => state.upper = !state.upper,
            "3" => state.lower = !state.lower,
            "4" => state.digits = !state.digits,
            "5" => state.punctuation = !state.punctuation,
            "6" => state.space = !state.space,
            "7" => {
                if let Some(chars) = text_input("Additional characters", &state.additional) {
                    state.additional = chars;
                }
            }
            "8" => {
                if let Some(chars) = text_input("Blacklist characters", &state.blacklist) {
                    state.blacklist = chars;
                }
            }
            "9" => {
                if let Some(limit) =
                    numeric_input("Duplicate limit (0 = no limit)", state.max_duplicates)
                {
                    state.max_duplicates = limit;
                }
            }
            "c" => feedback = copy_to_clipboard(&password),
            "r" => {
                state = FormState::default();
                password.zeroize();
            }
            "h" => {
                clear();
                print_help();
                let _ = text_input("Press Enter to return", "");
            }
            "q" => break,
            _ => feedback = Feedback::Error("Invalid selection.".into()),
        }
    }

    password.zeroize();
    clear();
}

/// Build the charset from a snapshot of the form and replace the displayed
/// password, returning the charset size. Errors come back as user-facing
/// messages; the form never crashes on bad input.
fn generate_into(state: &FormState, password: &mut String) -> Result<usize, String> {
    let spec = state.charset_spec();
    if !spec.has_sources() {
        return Err("Enable at least one character class or add custom characters.".into());
    }

    let charset = charset::build(&spec);
    if charset.is_empty() && state.length > 0 {
        return Err("The blacklist removes every selected character.".into());
    }

    match pass::generate(&charset, state.length, state.max_duplicates) {
        Ok(generated) => {
            password.zeroize();
            *password = generated;
            Ok(charset.len())
        }
        Err(e) => Err(e.to_string()),
    }
}

fn copy_to_clipboard(password: &str) -> Feedback {
    if password.is_empty() {
        return Feedback::Error("Nothing to copy yet.".into());
    }
    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(password.to_string()) {
            Ok(()) => Feedback::Info("Copied to clipboard.".into()),
            Err(e) => Feedback::Error(format!("Clipboard error: {e}")),
        },
        Err(e) => Feedback::Error(format!("Clipboard unavailable: {e}")),
    }
}
