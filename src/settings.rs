//! Engine settings.
//!
//! Settings are plain serde structs. Every field has a default, so a settings
//! file only needs the values it wants to change.

use crate::constants::{MAX_SCROLL_SPEED, SCROLL_EDGE_SIZE, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How a ctrl/cmd drag treats items that were selected before it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdditivePolicy {
    /// Items selected at drag start stay selected; the rectangle only adds.
    #[default]
    PreserveBaseline,
    /// The rectangle decides every item on each reconciliation, so earlier
    /// selections outside it are dropped once the pointer moves.
    RectangleAuthoritative,
}

/// Edge auto-scroll tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScrollSettings {
    pub enabled: bool,
    /// Height of the top and bottom trigger bands in pixels
    pub edge_size: f32,
    /// Speed at the very edge of the viewport, in pixels per frame
    pub max_speed: f32,
}

impl Default for AutoScrollSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            edge_size: SCROLL_EDGE_SIZE,
            max_speed: MAX_SCROLL_SPEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub auto_scroll: AutoScrollSettings,
    pub additive_policy: AdditivePolicy,
    /// Apply the card click policy (plain click selects one, ctrl/cmd toggles)
    pub select_on_item_click: bool,
    /// Only the primary pointer button starts a drag
    pub primary_button_only: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            auto_scroll: AutoScrollSettings::default(),
            additive_policy: AdditivePolicy::default(),
            select_on_item_click: true,
            primary_button_only: true,
        }
    }
}

impl EngineSettings {
    /// Parse settings from a JSON string and validate them.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load settings from the default location, falling back to defaults
    /// when the file is missing or broken.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        let scroll = &self.auto_scroll;
        if !scroll.edge_size.is_finite() || scroll.edge_size <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "auto_scroll.edge_size must be positive, got {}",
                scroll.edge_size
            )));
        }
        if !scroll.max_speed.is_finite() || scroll.max_speed < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "auto_scroll.max_speed must be non-negative, got {}",
                scroll.max_speed
            )));
        }
        Ok(())
    }
}

/// `<config dir>/rubberband/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
