//! Dev container configuration loading.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::jsonc::strip_comments;
use crate::error::{GhcheckError, Result};

/// The parts of `devcontainer.json` ghcheck looks at.
///
/// Unknown keys are ignored and every level of the extension path is
/// optional. A level with an unexpected type reads as absent rather than
/// failing the whole file; only invalid JSON is an error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DevContainerConfig {
    #[serde(default, deserialize_with = "lenient")]
    pub customizations: Option<Customizations>,
}

/// Tool-specific customizations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Customizations {
    #[serde(default, deserialize_with = "lenient")]
    pub vscode: Option<VsCodeCustomizations>,
}

/// VS Code customizations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VsCodeCustomizations {
    /// Extension identifiers installed into the container. Non-string
    /// entries are skipped.
    #[serde(default, deserialize_with = "string_entries")]
    pub extensions: Option<Vec<String>>,
}

/// Deserialize `T`, or `None` if the value has another shape.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Keep the string items of an array; anything but an array is `None`.
fn string_entries<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_array().map(|items| {
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect()
    }))
}

impl DevContainerConfig {
    /// Parse configuration text, stripping comments first.
    ///
    /// `path` is only used for the error message.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let json = strip_comments(content);
        let value: Value =
            serde_json::from_str(&json).map_err(|e| GhcheckError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    /// The configured extension list, if the file declares one.
    pub fn extensions(&self) -> Option<&[String]> {
        self.customizations
            .as_ref()?
            .vscode
            .as_ref()?
            .extensions
            .as_deref()
    }

    /// Whether the extension list contains `id` (exact match).
    pub fn has_extension(&self, id: &str) -> bool {
        self.extensions()
            .is_some_and(|exts| exts.iter().any(|e| e == id))
    }
}

/// Location of the dev container configuration for a working directory.
pub fn devcontainer_path(root: &Path) -> PathBuf {
    root.join(".devcontainer").join("devcontainer.json")
}

/// Load the dev container configuration under `root`.
///
/// Returns `Ok(None)` when the file does not exist. An unreadable file is
/// an IO error; malformed content is a [`GhcheckError::ConfigParseError`].
pub fn load_devcontainer(root: &Path) -> Result<Option<DevContainerConfig>> {
    let path = devcontainer_path(root);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no dev container configuration");
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let config = DevContainerConfig::parse(&content, &path)?;
    tracing::debug!(path = %path.display(), "loaded dev container configuration");
    Ok(Some(config))
}
