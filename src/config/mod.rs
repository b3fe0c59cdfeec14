// SPDX-License-Identifier: MPL-2.0
//! Player construction configuration and persisted playback preferences.
//!
//! [`PlayerConfig`] is the immutable construction object a host builds a
//! player surface from; every configuration method returns a modified copy
//! so configurations can be declared fluently:
//!
//! ```
//! use iced_reel::config::PlayerConfig;
//! use iced_reel::domain::ResizeMode;
//!
//! let config = PlayerConfig::new("https://example.com/intro.mp4")
//!     .start_at(12.5)
//!     .muted(true)
//!     .resize_mode(ResizeMode::AspectFill)
//!     .show_controls(false);
//!
//! assert!(config.muted);
//! assert_eq!(config.start_at_secs, 12.5);
//! ```
//!
//! [`PlayerPreferences`] are the user-held playback settings (mute, loop,
//! resize mode) persisted to a `player.toml` under the platform config dir.

use crate::domain::{MediaUrl, ResizeMode};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PREFERENCES_FILE: &str = "player.toml";
const APP_NAME: &str = "iced_reel";

/// Periodic clock callback cadence expected from player backends, in Hz.
pub const TIME_TICK_HZ: f64 = 4.0;

/// Snapping tolerance for binding-issued seeks, in seconds.
/// Zero on both sides: exact-position seeks, no player-chosen keyframe snap.
pub const SEEK_TOLERANCE_SECS: f64 = 0.0;

/// Volume applied when unmuted. Mute is modeled as the muted flag plus a
/// zeroed volume, matching players that treat them as distinct attributes.
pub const UNMUTED_VOLUME: f32 = 1.0;

/// Default seek offset for the controls' back/forward buttons, in seconds.
pub const DEFAULT_SEEK_STEP_SECS: f64 = 10.0;

/// Construction parameters for a playback surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Media source to load.
    pub url: MediaUrl,
    /// Initial seek offset; 0.0 starts from the beginning.
    #[serde(default)]
    pub start_at_secs: f64,
    /// Whether playback starts as soon as the media is ready.
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Whether audio starts muted.
    #[serde(default)]
    pub muted: bool,
    /// Whether playback restarts from the beginning at end of media.
    #[serde(default)]
    pub looping: bool,
    /// How the video fits the host view.
    #[serde(default)]
    pub resize_mode: ResizeMode,
    /// Whether the controls overlay is shown.
    #[serde(default = "default_true")]
    pub show_controls: bool,
    /// Whether the picture-in-picture capability flag is set on the player.
    #[serde(default)]
    pub allows_picture_in_picture: bool,
}

fn default_true() -> bool {
    true
}

impl PlayerConfig {
    /// Creates a configuration for the given media source with defaults:
    /// start at 0, autoplay on, unmuted, no loop, aspect-fit, controls shown.
    pub fn new(url: impl Into<MediaUrl>) -> Self {
        Self {
            url: url.into(),
            start_at_secs: 0.0,
            autoplay: true,
            muted: false,
            looping: false,
            resize_mode: ResizeMode::default(),
            show_controls: true,
            allows_picture_in_picture: false,
        }
    }

    /// Returns a copy starting playback at the given offset in seconds.
    #[must_use]
    pub fn start_at(mut self, secs: f64) -> Self {
        self.start_at_secs = secs;
        self
    }

    /// Returns a copy with autoplay enabled or disabled.
    #[must_use]
    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Returns a copy with the initial mute state.
    #[must_use]
    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// Returns a copy with looping enabled or disabled.
    #[must_use]
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Returns a copy with the given resize mode.
    #[must_use]
    pub fn resize_mode(mut self, mode: ResizeMode) -> Self {
        self.resize_mode = mode;
        self
    }

    /// Returns a copy with the controls overlay shown or hidden.
    #[must_use]
    pub fn show_controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    /// Returns a copy with the picture-in-picture capability flag set.
    #[must_use]
    pub fn allows_picture_in_picture(mut self, allowed: bool) -> Self {
        self.allows_picture_in_picture = allowed;
        self
    }
}

/// User playback preferences persisted between sessions.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerPreferences {
    pub muted: Option<bool>,
    #[serde(default)]
    pub loop_enabled: Option<bool>,
    #[serde(default)]
    pub resize_mode: Option<ResizeMode>,
}

impl Default for PlayerPreferences {
    fn default() -> Self {
        Self {
            muted: Some(false),
            loop_enabled: Some(false),
            resize_mode: Some(ResizeMode::default()),
        }
    }
}

fn get_default_preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(PREFERENCES_FILE);
        path
    })
}

pub fn load() -> Result<PlayerPreferences> {
    if let Some(path) = get_default_preferences_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(PlayerPreferences::default())
}

pub fn save(preferences: &PlayerPreferences) -> Result<()> {
    if let Some(path) = get_default_preferences_path() {
        return save_to_path(preferences, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<PlayerPreferences> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(preferences: &PlayerPreferences, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(preferences)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn new_config_has_documented_defaults() {
        let config = PlayerConfig::new("clip.mp4");
        assert_eq!(config.url, MediaUrl::new("clip.mp4"));
        assert_eq!(config.start_at_secs, 0.0);
        assert!(config.autoplay);
        assert!(!config.muted);
        assert!(!config.looping);
        assert_eq!(config.resize_mode, ResizeMode::AspectFit);
        assert!(config.show_controls);
        assert!(!config.allows_picture_in_picture);
    }

    #[test]
    fn builder_methods_return_modified_copies() {
        let base = PlayerConfig::new("clip.mp4");
        let configured = base
            .clone()
            .start_at(30.0)
            .autoplay(false)
            .muted(true)
            .looping(true)
            .resize_mode(ResizeMode::Stretch)
            .show_controls(false)
            .allows_picture_in_picture(true);

        // Original untouched.
        assert_eq!(base, PlayerConfig::new("clip.mp4"));

        assert_eq!(configured.start_at_secs, 30.0);
        assert!(!configured.autoplay);
        assert!(configured.muted);
        assert!(configured.looping);
        assert_eq!(configured.resize_mode, ResizeMode::Stretch);
        assert!(!configured.show_controls);
        assert!(configured.allows_picture_in_picture);
    }

    #[test]
    fn config_toml_round_trip() {
        let config = PlayerConfig::new("https://example.com/a.mp4")
            .start_at(7.25)
            .muted(true);
        let text = toml::to_string(&config).expect("failed to serialize config");
        let parsed: PlayerConfig = toml::from_str(&text).expect("failed to parse config");
        assert_eq!(parsed, config);
    }

    #[test]
    fn save_and_load_round_trip_preserves_preferences() {
        let preferences = PlayerPreferences {
            muted: Some(true),
            loop_enabled: Some(true),
            resize_mode: Some(ResizeMode::AspectFill),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join("player.toml");

        save_to_path(&preferences, &path).expect("failed to save preferences");
        let loaded = load_from_path(&path).expect("failed to load preferences");

        assert_eq!(loaded, preferences);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("player.toml");
        fs::write(&path, "this is [not valid toml").expect("failed to write file");

        let loaded = load_from_path(&path).expect("failed to load preferences");
        assert_eq!(loaded, PlayerPreferences::default());
    }
}
