use colored::{ColoredString, Colorize};
use std::fmt;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
    Plain,
}

/// Turns styling off for the rest of the process, e.g. for scripted runs or `plain_output`.
pub fn configure(plain: bool) {
    if plain {
        colored::control::set_override(false);
    }
}

fn build_label(kind: MessageKind) -> Option<(&'static str, &'static str)> {
    match kind {
        MessageKind::Info => Some(("INFO", "[i]")),
        MessageKind::Success => Some(("SUCCESS", "[✓]")),
        MessageKind::Warning => Some(("WARNING", "[!]")),
        MessageKind::Error => Some(("ERROR", "[x]")),
        MessageKind::Section | MessageKind::Plain => None,
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();

    let formatted = match (kind, build_label(kind)) {
        (MessageKind::Section, _) => format!("--- {} ---", text.trim()),
        (_, Some((label, icon))) => format!("{label}: {icon} {text}"),
        (_, None) => text,
    };

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info | MessageKind::Plain => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}\n", formatted),
        MessageKind::Error => eprintln!("{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn plain(message: impl fmt::Display) {
    print(MessageKind::Plain, message);
}

/// Colors a signed amount: green when positive, red when negative.
pub fn signed(value: f64, text: String) -> ColoredString {
    if value > 0.0 {
        text.green()
    } else if value < 0.0 {
        text.bright_red()
    } else {
        text.normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_sections() {
        colored::control::set_override(false);
        assert_eq!(apply_style(MessageKind::Error, "boom"), "ERROR: [x] boom");
        assert_eq!(
            apply_style(MessageKind::Section, " Overall Summary "),
            "--- Overall Summary ---"
        );
        assert_eq!(apply_style(MessageKind::Plain, "as is"), "as is");
    }
}
