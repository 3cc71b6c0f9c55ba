//! Configuration file loading and saving

use crate::constants;
use crate::utils::validators;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User settings for the classroom tool
///
/// Every field has a default, so a missing or partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where `update` downloads the latest published binary from
    pub update_url: String,
    /// Installed completion script regenerated after an update; see
    /// [`Config::completion_path`] for the fallback
    pub completion_file: Option<PathBuf>,
    /// Shell the completion file is generated for
    pub completion_shell: String,
    /// Permission granted to invited students
    pub permission: String,
    /// Maximum number of repositories fetched when listing
    pub list_limit: usize,
    /// Template used by create-assignment when none is given
    pub default_template: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            update_url: constants::update::DEFAULT_UPDATE_URL.to_string(),
            completion_file: None,
            completion_shell: constants::config::DEFAULT_COMPLETION_SHELL.to_string(),
            permission: constants::github::DEFAULT_PERMISSION.to_string(),
            list_limit: constants::github::DEFAULT_LIST_LIMIT,
            default_template: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        };

        validators::validate_config(&config).map_err(validators::validation_errors_to_anyhow)?;

        Ok(config)
    }

    /// Load the explicit path if given, otherwise the default location
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load_config(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Completion script `update` regenerates when it exists
    ///
    /// The configured file, else `$HOME/.local/share/bash-completion/completions/classroom`.
    pub fn completion_path(&self) -> Option<PathBuf> {
        self.completion_file.clone().or_else(|| {
            std::env::var_os("HOME").map(|home| {
                PathBuf::from(home).join(constants::config::DEFAULT_COMPLETION_FILE)
            })
        })
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, format!("---\n{}", yaml))?;
        Ok(())
    }
}

/// `$CLASSROOM_CONFIG`, else `$HOME/.config/classroom/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(constants::config::CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }

    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(constants::config::DEFAULT_CONFIG_FILE))
}
