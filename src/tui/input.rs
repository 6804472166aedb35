//! Raw-mode line editors for form fields.
//!
//! Cursor state is tracked in characters, not bytes, so multibyte input
//! can never split a code point.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

#[derive(Clone, Copy)]
enum Filter {
    Any,
    Digits,
}

impl Filter {
    fn accepts(self, c: char) -> bool {
        match self {
            Filter::Any => !c.is_control(),
            Filter::Digits => c.is_ascii_digit(),
        }
    }
}

/// Free-text field editor. Returns `None` when the user cancels.
pub fn text_input(prompt: &str, initial: &str) -> Option<String> {
    edit_line(prompt, initial, Filter::Any)
}

/// Digit-only field editor. An emptied field reads as 0; a value too large
/// for `usize` cancels like Esc would.
pub fn numeric_input(prompt: &str, initial: usize) -> Option<usize> {
    let seed = if initial > 0 {
        initial.to_string()
    } else {
        String::new()
    };
    let digits = edit_line(prompt, &seed, Filter::Digits)?;
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}

fn edit_line(prompt: &str, initial: &str, filter: Filter) -> Option<String> {
    let mut chars: Vec<char> = initial.chars().collect();
    let mut cursor = chars.len(); // chars left of the cursor
    let mut widest = chars.len();

    // Guard restores cooked mode on every exit path, including panics.
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial.to_string()),
    };

    redraw(prompt, &chars, cursor, &mut widest);

    let cancelled = loop {
        let Ok(event) = read() else {
            break false;
        };
        let Event::Key(key) = event else {
            continue;
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // process::exit skips destructors; restore the terminal first.
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => break true,
            KeyCode::Esc => break true,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                chars.clear();
                cursor = 0;
            }
            KeyCode::Enter => break false,
            KeyCode::Backspace => {
                if cursor > 0 {
                    cursor -= 1;
                    chars.remove(cursor);
                }
            }
            KeyCode::Delete => {
                if cursor < chars.len() {
                    chars.remove(cursor);
                }
            }
            KeyCode::Left => cursor = cursor.saturating_sub(1),
            KeyCode::Right => {
                if cursor < chars.len() {
                    cursor += 1;
                }
            }
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = chars.len(),
            KeyCode::Char(c) if filter.accepts(c) => {
                chars.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        redraw(prompt, &chars, cursor, &mut widest);
    };

    drop(_guard);
    println!();

    if cancelled {
        None
    } else {
        Some(chars.into_iter().collect())
    }
}

fn redraw(prompt: &str, chars: &[char], cursor: usize, widest: &mut usize) {
    *widest = (*widest).max(chars.len());
    let line: String = chars.iter().collect();
    print!("\r{}: {}", prompt, " ".repeat(*widest + 1));
    print!("\r{}: {}", prompt, line);
    // 1-based column: prompt, colon, space, then `cursor` chars.
    print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
    flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_filter() {
        assert!(Filter::Digits.accepts('7'));
        assert!(!Filter::Digits.accepts('a'));
        assert!(!Filter::Digits.accepts('\t'));
    }

    #[test]
    fn text_filter_rejects_control_chars() {
        assert!(Filter::Any.accepts('ä'));
        assert!(Filter::Any.accepts(' '));
        assert!(!Filter::Any.accepts('\x07'));
    }
}
