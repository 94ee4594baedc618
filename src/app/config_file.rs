//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/yoink/config.toml`. The file is only
//! read; yoink never writes it.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::core::{Capability, DispatchAction, SearchConfig};
use crate::search::BuildOptions;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Search defaults
    pub general: GeneralConfig,
    /// fzf layout
    pub layout: LayoutConfig,
}

/// Search defaults. Unset fields fall back to the front end's own defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Action for plain Enter
    pub default_action: Option<DispatchAction>,
    /// Search hidden files
    pub include_hidden: Option<bool>,
    /// Case-sensitive content search instead of smart case
    pub case_sensitive: Option<bool>,
}

/// fzf layout settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// fzf `--height`
    pub height: String,
    /// fzf `--preview-window` (content mode appends the scroll offset)
    pub preview_window: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let defaults = BuildOptions::default();
        Self {
            height: defaults.height,
            preview_window: defaults.preview_window,
        }
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/yoink)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("yoink"))
    }

    /// Get the config file path (~/.config/yoink/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        Self::config_path()
            .filter(|path| path.exists())
            .and_then(|path| match Self::load_from(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load configuration from a specific path (for testing)
    pub fn load_from(path: &PathBuf) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }

    /// Starting configuration for a front end
    pub fn initial_config(&self, capability: Capability) -> SearchConfig {
        let (hidden, action) = match capability {
            Capability::LiveToggles => (false, DispatchAction::ChangeDirectory),
            Capability::SingleShot => (true, DispatchAction::EditVim),
        };
        SearchConfig {
            include_hidden: self.general.include_hidden.unwrap_or(hidden),
            case_sensitive: self.general.case_sensitive.unwrap_or(false),
            default_action: self.general.default_action.unwrap_or(action),
            ..SearchConfig::default()
        }
    }

    /// Builder options with the resolved previewer binary
    pub fn build_options(&self, previewer: impl Into<String>) -> BuildOptions {
        BuildOptions {
            previewer: previewer.into(),
            preview_window: self.layout.preview_window.clone(),
            height: self.layout.height.clone(),
        }
    }
}
