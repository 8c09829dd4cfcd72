//! Dev container configuration.
//!
//! - [`jsonc`] strips comments from JSON-with-comments text
//! - [`devcontainer`] locates and parses `.devcontainer/devcontainer.json`
//!
//! # Example
//!
//! ```
//! use ghcheck::config::load_devcontainer;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! assert!(load_devcontainer(temp.path()).unwrap().is_none());
//!
//! let dir = temp.path().join(".devcontainer");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("devcontainer.json"),
//!     "// base image\n{\"customizations\":{\"vscode\":{\"extensions\":[\"GitHub.copilot\"]}}}",
//! )
//! .unwrap();
//!
//! let config = load_devcontainer(temp.path()).unwrap().unwrap();
//! assert!(config.has_extension("GitHub.copilot"));
//! ```

pub mod devcontainer;
pub mod jsonc;

pub use devcontainer::{devcontainer_path, load_devcontainer, DevContainerConfig};
