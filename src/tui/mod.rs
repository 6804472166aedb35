//! Interactive form front-end.

mod form;
mod input;
mod text;

pub use text::print_help;

/// Run the interactive form.
pub fn run() {
    form::run_form();
}
