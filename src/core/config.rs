//! Configuration and settings module.
//!
//! This module handles persistent settings including color customization,
//! saving/loading configuration to disk, and default values. Only UI
//! preferences are persisted; workout records themselves live in memory for
//! the duration of the session.

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings filename for persistence.
const SETTINGS_FILENAME: &str = "config.json";

/// Maximum number of decimal places for distance display.
const MAX_KM_DECIMALS: u8 = 3;

/// Color settings for the application UI.
///
/// All colors can be customized by editing the config file and are persisted
/// to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSettings {
    /// Success status color
    pub status_success: [u8; 3],
    /// Error status color
    pub status_error: [u8; 3],
    /// Highlight color for the table row currently loaded in the edit form
    pub editing_highlight: [u8; 3],
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            status_success: [76, 175, 80],   // Green
            status_error: [244, 67, 54],     // Red
            editing_highlight: [66, 90, 120], // Muted blue
        }
    }
}

impl ColorSettings {
    /// Convert a color array to egui Color32.
    #[inline]
    pub fn to_color32(color: [u8; 3]) -> Color32 {
        Color32::from_rgb(color[0], color[1], color[2])
    }

    /// Get success status color as Color32.
    pub fn status_success_color(&self) -> Color32 {
        Self::to_color32(self.status_success)
    }

    /// Get error status color as Color32.
    pub fn status_error_color(&self) -> Color32 {
        Self::to_color32(self.status_error)
    }

    /// Get the edit-highlight color as Color32.
    pub fn editing_highlight_color(&self) -> Color32 {
        Self::to_color32(self.editing_highlight)
    }
}

/// Application settings including color customization and user preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Color customization settings.
    #[serde(default)]
    pub colors: ColorSettings,

    /// Decimal places used when displaying distances (0 to 3).
    #[serde(default = "default_km_decimals")]
    pub km_decimals: u8,

    /// Window size to restore on startup (width, height).
    #[serde(default)]
    pub window_size: Option<(f32, f32)>,
}

/// Default number of decimal places for distance display.
fn default_km_decimals() -> u8 {
    1
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            colors: ColorSettings::default(),
            km_decimals: default_km_decimals(),
            window_size: None,
        }
    }
}

impl AppSettings {
    /// Get the settings file path in the user's config directory.
    fn get_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("workout-log");
            path.push(SETTINGS_FILENAME);
            path
        })
    }

    /// Load settings from disk, returning defaults if loading fails.
    pub fn load() -> Self {
        Self::get_settings_path()
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to disk.
    ///
    /// Returns an error if saving fails.
    pub fn save(&self) -> Result<(), String> {
        let path = Self::get_settings_path()
            .ok_or_else(|| "Could not determine config directory".to_string())?;

        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        Ok(())
    }

    /// Get the distance display precision, clamped to the supported range.
    pub fn get_km_decimals(&self) -> usize {
        self.km_decimals.min(MAX_KM_DECIMALS) as usize
    }

    /// Set the window size.
    pub fn set_window_size(&mut self, width: f32, height: f32) {
        self.window_size = Some((width, height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_settings_default() {
        let settings = ColorSettings::default();
        assert_eq!(settings.status_success, [76, 175, 80]);
        assert_eq!(settings.status_error, [244, 67, 54]);
    }

    #[test]
    fn test_color32_conversion() {
        let color = [255, 128, 64];
        let color32 = ColorSettings::to_color32(color);
        assert_eq!(color32, Color32::from_rgb(255, 128, 64));
    }

    #[test]
    fn test_color_settings_methods() {
        let settings = ColorSettings::default();

        assert_eq!(
            settings.status_success_color(),
            Color32::from_rgb(76, 175, 80)
        );
        assert_eq!(settings.status_error_color(), Color32::from_rgb(244, 67, 54));
    }

    #[test]
    fn test_app_settings_default() {
        let settings = AppSettings::default();
        assert_eq!(settings.colors, ColorSettings::default());
        assert_eq!(settings.km_decimals, 1);
        assert!(settings.window_size.is_none());
    }

    #[test]
    fn test_settings_serialization() {
        let mut settings = AppSettings::default();
        settings.km_decimals = 2;
        settings.window_size = Some((1024.0, 768.0));

        let json = serde_json::to_string(&settings).unwrap();
        let restored: AppSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(settings.colors, restored.colors);
        assert_eq!(restored.km_decimals, 2);
        assert_eq!(restored.window_size, Some((1024.0, 768.0)));
    }

    #[test]
    fn test_km_decimals_clamping() {
        let mut settings = AppSettings::default();

        settings.km_decimals = 2;
        assert_eq!(settings.get_km_decimals(), 2);

        settings.km_decimals = 200;
        assert_eq!(settings.get_km_decimals(), 3);
    }

    #[test]
    fn test_window_size() {
        let mut settings = AppSettings::default();
        assert!(settings.window_size.is_none());

        settings.set_window_size(1280.0, 720.0);
        assert_eq!(settings.window_size, Some((1280.0, 720.0)));
    }

    #[test]
    fn test_backward_compatible_deserialization() {
        // Old config files (without newer fields) can still be loaded
        let old_json = r#"{"colors":{"status_success":[76,175,80],"status_error":[244,67,54],"editing_highlight":[66,90,120]}}"#;

        let settings: AppSettings = serde_json::from_str(old_json).unwrap();

        assert_eq!(settings.km_decimals, 1);
        assert!(settings.window_size.is_none());
    }
}
