//! Visual theme and styling.
//!
//! Every formatting helper is a pure function of the theme and its
//! arguments; nothing here writes to the terminal.

use console::Style;

use super::icons::StatusKind;

/// ghcheck's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success markers (green).
    pub success: Style,
    /// Style for warning markers (yellow).
    pub warning: Style,
    /// Style for error markers (red).
    pub error: Style,
    /// Style for informational headings (cyan).
    pub info: Style,
    /// Style for section headers (cyan bold).
    pub header: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            info: Style::new().cyan(),
            header: Style::new().cyan().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success line (green check + text).
    pub fn format_success(&self, msg: &str) -> String {
        StatusKind::Success.format(self, msg)
    }

    /// Format a warning line (yellow triangle + text).
    pub fn format_warning(&self, msg: &str) -> String {
        StatusKind::Warning.format(self, msg)
    }

    /// Format an error line (red cross + text).
    pub fn format_error(&self, msg: &str) -> String {
        StatusKind::Failed.format(self, msg)
    }

    /// Format an indented informational line.
    pub fn format_info(&self, msg: &str) -> String {
        format!("  {}", msg)
    }

    /// Format a section header: the title, then an `=` underline of the same
    /// width on the next line.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{}\n{}",
            self.header.apply_to(title),
            "=".repeat(title.chars().count())
        )
    }

    /// Format a short colored heading such as "Additional Resources:".
    pub fn format_subheading(&self, title: &str) -> String {
        self.info.apply_to(title).to_string()
    }

    /// Format the closing verdict sentence, green when everything passed.
    pub fn format_verdict(&self, msg: &str, passed: bool) -> String {
        let style = if passed { &self.success } else { &self.warning };
        style.apply_to(msg).to_string()
    }

    /// Format the boxed program banner.
    pub fn format_banner(&self, title: &str) -> String {
        let width = title.chars().count() + 4;
        let bar = "═".repeat(width);
        let lines = [
            format!("╔{}╗", bar),
            format!("║  {}  ║", title),
            format!("╚{}╝", bar),
        ];
        lines
            .iter()
            .map(|line| self.header.apply_to(line).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
