//! Static text: form rendering and the help screen.

use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, clear, flush,
    print_error, print_notice, print_rule,
};

use super::form::{Feedback, FormState};

pub fn enter_prompt() -> &'static str {
    "Select a field (or press Enter to generate)"
}

pub fn print_form(state: &FormState, password: &str, feedback: &Feedback) {
    clear();
    box_top("Password Generator");
    box_line_center("Esc/Ctrl+Q: cancel input | Ctrl+U: clear input");
    box_line("");

    box_line(&format!("{UNDERLINE}General{RESET}:"));
    box_line(&format!("  1) Length: {}", state.length));

    box_line("");
    box_line(&format!("{UNDERLINE}Character classes{RESET}:"));
    box_line(&format!("  2) Uppercase A-Z: {}", state.upper));
    box_line(&format!("  3) Lowercase a-z: {}", state.lower));
    box_line(&format!("  4) Digits 0-9: {}", state.digits));
    box_line(&format!("  5) Punctuation: {}", state.punctuation));
    box_line(&format!("  6) Space: {}", state.space));

    box_line("");
    box_line(&format!("{UNDERLINE}Custom characters{RESET}:"));
    box_line(&format!("  7) Additional: {}", state.additional));
    box_line(&format!("  8) Blacklist: {}", state.blacklist));

    box_line("");
    box_line(&format!("{UNDERLINE}Constraints{RESET}:"));
    box_line(&format!(
        "  9) Duplicate limit (0 = no limit): {}",
        state.max_duplicates
    ));

    box_line("");
    print_rule();
    if password.is_empty() {
        box_line("Password:");
    } else {
        box_line(&format!("Password: {}", password));
    }
    print_rule();
    box_line_center("Enter) generate | c) copy | r) reset | h) help | q) quit");
    box_bottom();

    // Feedback row (or a blank line so the box height stays put).
    match feedback {
        Feedback::None => println!(),
        Feedback::Info(msg) => print_notice(msg),
        Feedback::Error(msg) => print_error(msg),
    }
    flush();
}

pub fn print_help() {
    box_top("Passforge");
    box_line_center("Charset-driven password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a terminal");
    box_line("     form to pick the character set and generate passwords.");
    box_line("  2) Batch: Pass a length and flags (e.g. 16 -u -l -d) to");
    box_line("     print passwords straight to stdout.");
    box_line("");
    box_line("USAGE:");
    box_line("  passforge <LENGTH> [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Generation:");
    box_opt("  -n, --amount <N>", "How many passwords to generate (default: 1)");
    box_opt(
        "  -m, --max-duplicate-chars",
        "Limit how often the same character may occur; 0 = unlimited",
    );
    box_line("");
    box_line(" Character set:");
    box_opt("  -u, --uppercase", "Include uppercase letters A-Z");
    box_opt("  -l, --lowercase", "Include lowercase letters a-z");
    box_opt("  -d, --digits", "Include digits 0-9");
    box_opt("  -p, --punctuation", "Include ASCII punctuation");
    box_opt("  -s, --space", "Include the space character");
    box_opt("  -a, --additional <CHARS>", "Extra characters to include");
    box_opt(
        "  -b, --blacklist <CHARS>",
        "Characters to exclude; wins over every include",
    );
    box_line("");
    box_line(" Output:");
    box_opt("  -q, --quiet", "Print only the passwords, one per line");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passforge                      Interactive form");
    box_line("  passforge 16 -u -l -d          One 16-character password");
    box_line("  passforge 20 -n 3 -u -l -d -p  Three, all classes");
    box_line("  passforge 12 -u -d -b O0Il1    Skip look-alike characters");
    box_line("  passforge 10 -a abcdef123 -m 1 Custom set, no repeats");
    box_line("");
    box_bottom();
    println!();
}
