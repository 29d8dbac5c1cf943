//! User-configurable settings stored in ~/.config/dialog-kit/config.toml

use super::{APP_DIR_NAME, TEXT_DOMAIN};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub paths: PathsSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsSettings {
    /// Folder the path chooser opens in
    pub data_dir_path: PathBuf,
}

impl Default for PathsSettings {
    fn default() -> Self {
        Self {
            data_dir_path: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("~/.local/share"))
                .join(APP_DIR_NAME),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Gettext domain used for dialog messages
    pub text_domain: String,
    /// Load dialog definitions from this file instead of the bundled resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialogs_file: Option<PathBuf>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            text_domain: TEXT_DOMAIN.to_string(),
            dialogs_file: None,
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(APP_DIR_NAME)
        .join("config.toml")
}

impl Settings {
    /// Load settings from the default location, falling back to defaults for
    /// missing keys or when the file does not exist yet.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(e) => {
                warn!("Could not read settings from {} ({e}), using defaults", path.display());
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Settings parse error in {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_path())
    }

    /// Atomically write settings: temp file first, then rename over the target.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)?;

        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, &content)?;
        std::fs::rename(&tmp_path, path)?;

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
