//! Terminal colouring.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

/// Whether ANSI colour is emitted for a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    pub const fn plain() -> Self {
        Self { color: false }
    }

    pub const fn colored() -> Self {
        Self { color: true }
    }

    pub fn for_stdout() -> Self {
        Self::detect(std::io::stdout().is_terminal())
    }

    pub fn for_stderr() -> Self {
        Self::detect(std::io::stderr().is_terminal())
    }

    /// Colour only on a terminal and only when `NO_COLOR` is unset or empty.
    fn detect(is_terminal: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            color: is_terminal && !no_color,
        }
    }

    pub fn title(self, text: &str) -> String {
        self.paint(text, |t| t.bold().cyan().to_string())
    }

    pub fn heading(self, text: &str) -> String {
        self.paint(text, |t| t.bold().to_string())
    }

    pub fn name(self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    pub fn dim(self, text: &str) -> String {
        self.paint(text, |t| t.dimmed().to_string())
    }

    pub fn success(self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    pub fn failure(self, text: &str) -> String {
        self.paint(text, |t| t.red().to_string())
    }

    fn paint(self, text: &str, colorize: impl FnOnce(&str) -> String) -> String {
        if self.color {
            colorize(text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_leaves_text_untouched() {
        let style = Style::plain();
        assert_eq!(style.failure("Error: x"), "Error: x");
        assert_eq!(style.title("bmobot"), "bmobot");
    }

    #[test]
    fn colored_style_wraps_in_escape_codes() {
        let style = Style::colored();
        let painted = style.success("Valid");
        assert!(painted.contains("Valid"));
        assert!(painted.starts_with("\u{1b}["));
        assert!(painted.ends_with("\u{1b}[0m") || painted.ends_with("\u{1b}[39m"));
    }
}
