// User settings: audio volumes, display mode, keyboard guide
//
// Settings are owned by an explicitly constructed `SettingsService` that is
// passed to whatever needs it. Edits preview immediately and are only
// persisted on save; backing out restores the last saved values.

mod screen;
mod service;
mod store;

pub use screen::SettingsScreen;
pub use service::{AudioMixer, DisplayMode, DisplaySink, MixerGroup, MixerLevels, SettingsService};
pub use store::{JsonFileStore, MemoryStore, SettingsStore};

use serde::{Deserialize, Serialize};

/// Settings errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No user config directory available")]
    NoConfigDir,
}

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound effect volume, 0..=1
    pub sfx_volume: f32,
    /// Music volume, 0..=1
    pub music_volume: f32,
    pub fullscreen: bool,
    /// Show the keyboard guide panel when the settings screen opens
    pub keyboard_panel: bool,
    /// Window size used when not fullscreen
    pub windowed_width: u32,
    pub windowed_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx_volume: 0.75,
            music_volume: 0.75,
            fullscreen: true,
            keyboard_panel: false,
            windowed_width: 1280,
            windowed_height: 720,
        }
    }
}

impl Settings {
    /// Clamp values read from disk into their valid ranges
    pub fn sanitized(mut self) -> Self {
        self.sfx_volume = sanitize_volume(self.sfx_volume);
        self.music_volume = sanitize_volume(self.music_volume);
        self.windowed_width = self.windowed_width.max(1);
        self.windowed_height = self.windowed_height.max(1);
        self
    }

    /// Display mode these settings ask for
    pub fn display_mode(&self) -> DisplayMode {
        if self.fullscreen {
            DisplayMode::Fullscreen
        } else {
            DisplayMode::Windowed {
                width: self.windowed_width,
                height: self.windowed_height,
            }
        }
    }
}

fn sanitize_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.sfx_volume, 0.75);
        assert_eq!(settings.music_volume, 0.75);
        assert!(settings.fullscreen);
        assert!(!settings.keyboard_panel);
        assert_eq!((settings.windowed_width, settings.windowed_height), (1280, 720));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "music_volume": 0.2 }"#).unwrap();
        assert_eq!(settings.music_volume, 0.2);
        assert_eq!(settings.sfx_volume, 0.75);
        assert!(settings.fullscreen);
    }

    #[test]
    fn test_sanitized() {
        let settings = Settings {
            sfx_volume: 4.0,
            music_volume: f32::NAN,
            windowed_width: 0,
            ..Settings::default()
        }
        .sanitized();

        assert_eq!(settings.sfx_volume, 1.0);
        assert_eq!(settings.music_volume, 0.0);
        assert_eq!(settings.windowed_width, 1);
    }

    #[test]
    fn test_display_mode() {
        let mut settings = Settings::default();
        assert_eq!(settings.display_mode(), DisplayMode::Fullscreen);

        settings.fullscreen = false;
        assert_eq!(
            settings.display_mode(),
            DisplayMode::Windowed {
                width: 1280,
                height: 720
            }
        );
    }

    #[test]
    fn test_error_display() {
        let err = SettingsError::NoConfigDir;
        assert_eq!(err.to_string(), "No user config directory available");
    }
}
