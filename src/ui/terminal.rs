//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, Theme, UserInterface};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI, colored when stdout is a TTY and `NO_COLOR`
    /// is unset.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self::with_theme(theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
        }
    }

    fn line(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn success(&mut self, msg: &str) {
        let text = self.theme.format_success(msg);
        self.line(&text);
    }

    fn warning(&mut self, msg: &str) {
        let text = self.theme.format_warning(msg);
        self.line(&text);
    }

    fn error(&mut self, msg: &str) {
        let text = self.theme.format_error(msg);
        self.line(&text);
    }

    fn info(&mut self, msg: &str) {
        let text = self.theme.format_info(msg);
        self.line(&text);
    }

    fn show_header(&mut self, title: &str) {
        let text = self.theme.format_header(title);
        self.line(&format!("\n{}", text));
    }

    fn show_subheading(&mut self, title: &str) {
        let text = self.theme.format_subheading(title);
        self.line(&format!("\n{}", text));
    }

    fn show_banner(&mut self, title: &str) {
        let text = self.theme.format_banner(title);
        self.line(&format!("{}\n", text));
    }

    fn show_verdict(&mut self, msg: &str, passed: bool) {
        let text = self.theme.format_verdict(msg, passed);
        self.line(&format!("\n{}", text));
    }
}
