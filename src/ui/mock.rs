//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use ghcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("Git user.email is not configured");
//! ui.info("Configure it with: git config --global user.email \"your.email@example.com\"");
//!
//! assert!(ui.has_error("user.email"));
//! assert_eq!(ui.infos().len(), 1);
//! ```

/// Mock UI implementation for testing.
///
/// Every call is stored in a per-kind list and in an ordered transcript.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    infos: Vec<String>,
    headers: Vec<String>,
    subheadings: Vec<String>,
    banners: Vec<String>,
    verdicts: Vec<(String, bool)>,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success lines.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning lines.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error lines.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured info lines.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get all captured section headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured subheadings.
    pub fn subheadings(&self) -> &[String] {
        &self.subheadings
    }

    /// Get all captured banners.
    pub fn banners(&self) -> &[String] {
        &self.banners
    }

    /// Get all captured verdicts as (message, passed).
    pub fn verdicts(&self) -> &[(String, bool)] {
        &self.verdicts
    }

    /// Every call in order, prefixed with its kind (e.g. `"error: ..."`).
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check if a plain message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success line containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a warning line containing `msg` was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if an error line containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if an info line containing `msg` was shown.
    pub fn has_info(&self, msg: &str) -> bool {
        self.infos.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured output.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn record(&mut self, kind: &str, msg: &str) {
        self.transcript.push(format!("{}: {}", kind, msg));
    }
}

impl super::UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.record("message", msg);
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.record("success", msg);
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.record("warning", msg);
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.record("error", msg);
    }

    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
        self.record("info", msg);
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.record("header", title);
    }

    fn show_subheading(&mut self, title: &str) {
        self.subheadings.push(title.to_string());
        self.record("subheading", title);
    }

    fn show_banner(&mut self, title: &str) {
        self.banners.push(title.to_string());
        self.record("banner", title);
    }

    fn show_verdict(&mut self, msg: &str, passed: bool) {
        self.verdicts.push((msg.to_string(), passed));
        self.record("verdict", msg);
    }
}
