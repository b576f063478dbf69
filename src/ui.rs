/// User-facing diagnostics
///
/// Everything here goes to stderr so it never mixes with the report on stdout.

use std::io::{IsTerminal, Write};

/// Print colored bold text to stderr, plain when stderr is not a terminal
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if !std::io::stderr().is_terminal() {
            return false;
        }
        if let Some(ref mut t) = term::stderr() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
            return true;
        }
        false
    }
}

/// Print an error message with a colored "benchstat" prefix
pub fn print_error(msg: &str) {
    print_color("benchstat", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
}

/// Print the usage line and flag help for a usage error
pub fn print_usage(msg: &str, help: &str) {
    print_error(msg);
    eprintln!("{}", help);
}
