//! Status markers for console lines.

use super::theme::Theme;

/// Marker kinds used at the start of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Probe passed.
    Success,
    /// Probe failed.
    Failed,
    /// Non-fatal problem or recommendation.
    Warning,
}

impl StatusKind {
    /// Unicode icon for the marker.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &Theme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}
