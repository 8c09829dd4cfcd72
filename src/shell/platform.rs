//! Platform-specific shell selection.

/// Detect the shell used to interpret command strings.
///
/// Always a plain POSIX `sh` on Unix. The user's login shell is avoided so
/// that profile scripts cannot print into the captured output.
pub fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

/// Get the flag to pass a command string to the shell.
pub fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn unix_uses_plain_sh() {
        assert_eq!(detect_shell(), "/bin/sh");
        assert_eq!(shell_flag(), "-c");
    }

    #[cfg(windows)]
    #[test]
    fn windows_uses_cmd() {
        assert!(detect_shell().to_lowercase().contains("cmd"));
        assert_eq!(shell_flag(), "/C");
    }
}
