// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Player(PlayerError),
}

/// Specific error types for playback issues reported by the media player.
/// The binding stores these in its `load_error` observable so hosts can
/// render a meaningful failure state instead of a blank video area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// The URL scheme or container is not something the player can open.
    UnsupportedUrl(String),

    /// The media exists but could not be read (missing file, permission
    /// denied, unreachable host).
    MediaUnreadable(String),

    /// Generic load failure with the player's raw message.
    LoadFailed(String),
}

impl PlayerError {
    /// Attempts to categorize a raw adapter error message.
    /// Adapters report failures as free-form strings; this keeps the
    /// taxonomy useful without depending on any particular player backend.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("scheme")
            || msg_lower.contains("unsupported")
            || msg_lower.contains("unrecognized format")
        {
            return PlayerError::UnsupportedUrl(msg.to_string());
        }

        if msg_lower.contains("no such file")
            || msg_lower.contains("not found")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("unreachable")
            || msg_lower.contains("timed out")
        {
            return PlayerError::MediaUnreadable(msg.to_string());
        }

        PlayerError::LoadFailed(msg.to_string())
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::UnsupportedUrl(msg) => write!(f, "Unsupported media URL: {}", msg),
            PlayerError::MediaUnreadable(msg) => write!(f, "Media unreadable: {}", msg),
            PlayerError::LoadFailed(msg) => write!(f, "Load failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Player(e) => write!(f, "Player Error: {}", e),
        }
    }
}

impl From<PlayerError> for Error {
    fn from(err: PlayerError) -> Self {
        Error::Player(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
