// Configuration management
//
// Handles emulator configuration and settings persistence.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// Default configuration file path, next to the binary.
const CONFIG_FILE: &str = "config.toml";

/// Emulator configuration
///
/// Stores the user-configurable settings the host loop needs: window
/// scale/vsync/fps cap and audio output parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Window scale (1-8)
    #[serde(default = "default_window_scale")]
    pub window_scale: u32,

    /// Enable VSync
    #[serde(default = "default_vsync")]
    pub vsync: bool,

    /// Target FPS cap (usually 60 for NTSC)
    #[serde(default = "default_fps_cap")]
    pub fps_cap: u32,

    /// Audio output sample rate in Hz (44100 or 48000)
    #[serde(default = "default_audio_sample_rate")]
    pub audio_sample_rate: u32,

    /// Enable audio output
    #[serde(default = "default_audio_enabled")]
    pub audio_enabled: bool,

    /// Use the APU's 4-step frame sequence (true) instead of the 5-step
    /// mode (false) on power-on/reset.
    #[serde(default = "default_four_step_frame_counter")]
    pub four_step_frame_counter: bool,
}

fn default_window_scale() -> u32 {
    3
}
fn default_vsync() -> bool {
    true
}
fn default_fps_cap() -> u32 {
    60
}
fn default_audio_sample_rate() -> u32 {
    48000
}
fn default_audio_enabled() -> bool {
    true
}
fn default_four_step_frame_counter() -> bool {
    true
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            window_scale: default_window_scale(),
            vsync: default_vsync(),
            fps_cap: default_fps_cap(),
            audio_sample_rate: default_audio_sample_rate(),
            audio_enabled: default_audio_enabled(),
            four_step_frame_counter: true,
        }
    }
}

impl EmulatorConfig {
    /// Load configuration from file or create default
    ///
    /// If the configuration file doesn't exist, creates a default
    /// configuration and saves it to the file.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            let _ = config.save();
            config
        })
    }

    /// Load configuration from file
    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_ntsc_expectations() {
        let config = EmulatorConfig::default();
        assert_eq!(config.window_scale, 3);
        assert_eq!(config.fps_cap, 60);
        assert_eq!(config.audio_sample_rate, 48000);
        assert!(config.audio_enabled);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = EmulatorConfig::default();
        let toml_str = toml::to_string(&config).expect("serialize");
        let deserialized: EmulatorConfig = toml::from_str(&toml_str).expect("deserialize");

        assert_eq!(config.window_scale, deserialized.window_scale);
        assert_eq!(config.audio_sample_rate, deserialized.audio_sample_rate);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: EmulatorConfig = toml::from_str("window_scale = 4").expect("deserialize");
        assert_eq!(config.window_scale, 4);
        assert_eq!(config.fps_cap, 60);
        assert!(config.audio_enabled);
    }
}
