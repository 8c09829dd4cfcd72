//! Remediation hints and documentation links.
//!
//! Every user-facing fix suggestion lives here so the checks stay focused on
//! probing.

/// Where to download Git.
pub fn install_git() -> &'static str {
    "Install Git from: https://git-scm.com/downloads"
}

/// How to set a missing identity key (`user.name`, `user.email`).
pub fn configure_identity(key: &str) -> String {
    let example = match key {
        "user.email" => "your.email@example.com",
        _ => "Your Name",
    };
    format!("Configure it with: git config --global {} \"{}\"", key, example)
}

/// How to add a GitHub remote.
pub fn add_remote() -> &'static str {
    "Add a GitHub remote with: git remote add origin <github-repo-url>"
}

/// Ways to authenticate with GitHub, one line each.
pub fn configure_authentication() -> &'static [&'static str] {
    &[
        "Configure GitHub authentication:",
        "  - Use GitHub CLI: gh auth login",
        "  - Or use Git Credential Manager",
        "  - Or configure SSH keys: https://docs.github.com/en/authentication",
    ]
}

/// How to put the `code` command on PATH.
pub fn install_editor_cli() -> &'static [&'static str] {
    &[
        "Make sure VS Code is installed and \"code\" command is in PATH",
        "In VS Code: Cmd/Ctrl+Shift+P -> \"Shell Command: Install 'code' command in PATH\"",
    ]
}

/// Marketplace page for an extension.
pub fn marketplace(extension: &str) -> String {
    format!(
        "Install from: https://marketplace.visualstudio.com/items?itemName={}",
        extension
    )
}

/// Documentation links printed after the summary, as (label, url).
pub fn resources() -> &'static [(&'static str, &'static str)] {
    &[
        ("GitHub Docs", "https://docs.github.com/en/get-started"),
        (
            "VS Code with GitHub",
            "https://code.visualstudio.com/docs/sourcecontrol/github",
        ),
        (
            "GitHub Copilot Setup",
            "https://docs.github.com/en/copilot/getting-started-with-github-copilot",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_hint_for_name() {
        assert_eq!(
            configure_identity("user.name"),
            "Configure it with: git config --global user.name \"Your Name\""
        );
    }

    #[test]
    fn identity_hint_for_email() {
        assert!(configure_identity("user.email").contains("your.email@example.com"));
    }

    #[test]
    fn add_remote_hint_has_literal_command() {
        assert!(add_remote().contains("git remote add origin"));
    }

    #[test]
    fn authentication_hint_lists_options() {
        let lines = configure_authentication();
        assert!(lines.iter().any(|l| l.contains("gh auth login")));
        assert!(lines.iter().any(|l| l.contains("SSH keys")));
    }

    #[test]
    fn marketplace_link_embeds_extension() {
        assert!(marketplace("GitHub.copilot").ends_with("itemName=GitHub.copilot"));
    }

    #[test]
    fn resources_are_https_links() {
        assert_eq!(resources().len(), 3);
        assert!(resources().iter().all(|(_, url)| url.starts_with("https://")));
    }
}
