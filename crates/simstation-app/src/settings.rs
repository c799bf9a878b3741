//! User settings loaded from the platform config directory

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use simstation_core::prelude::*;

/// Settings from `~/.config/sim-station/config.toml` (platform
/// equivalent). Everything is optional; a missing or unreadable file
/// falls back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default tracing filter used when `SIMSTATION_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sim-station").join("config.toml"))
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(text) = std::fs::read_to_string(path) else {
            return Self::default();
        };

        toml::from_str(&text).unwrap_or_else(|e| {
            warn!("Ignoring malformed settings at {}: {e}", path.display());
            Self::default()
        })
    }
}
