//! Persisted application configuration

use serde::{Deserialize, Serialize};

use crate::app::LayoutMode;
use crate::theme::UiTheme;

/// Storage key for the serialized config
const CONFIG_KEY: &str = "vx_config";

/// Settings persisted across sessions through eframe storage
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: UiTheme,
    pub layout: LayoutMode,
    /// Play a click sound when switching panels
    pub click_sound: bool,
    /// Show the rotation bar on the right edge in compact mode
    pub rotation_bar: bool,
}

impl AppConfig {
    /// Load the config from storage, falling back to defaults
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        let Some(json) = storage.and_then(|s| s.get_string(CONFIG_KEY)) else {
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("discarding invalid config: {err}");
                Self::default()
            }
        }
    }

    /// Persist the config
    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(self) {
            Ok(json) => storage.set_string(CONFIG_KEY, json),
            Err(err) => tracing::error!("failed to serialize config: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let config = AppConfig {
            theme: UiTheme::Light,
            layout: LayoutMode::Compact,
            click_sound: true,
            rotation_bar: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let loaded: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let loaded: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded, AppConfig::default());
    }
}
