// SPDX-License-Identifier: MPL-2.0
//! Media identity and frame types.
//!
//! These types carry pure data without any presentation dependencies.
//! The presentation layer converts [`VideoFrame`] into framework-specific
//! handles (e.g., `iced::widget::image::Handle`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifies a piece of media: a local file path or a remote HTTP(S) URL.
///
/// The crate never parses or validates the container behind the URL; that is
/// entirely the media player's business. This newtype only distinguishes
/// local from remote sources for display and logging purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaUrl(String);

impl MediaUrl {
    /// Creates a new media URL from any string-like value.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this URL points at a remote HTTP(S) resource.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    /// Returns true if this URL points at a local file or bundle resource.
    #[must_use]
    pub fn is_local(&self) -> bool {
        !self.is_remote()
    }
}

impl fmt::Display for MediaUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MediaUrl {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for MediaUrl {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

/// A decoded video frame snapshot (RGBA, 4 bytes per pixel).
///
/// Frames are shared via `Arc` so cloning a snapshot for display never
/// copies pixel data.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl VideoFrame {
    /// Creates a new frame from dimensions and shared RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Arc<Vec<u8>>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes,
        }
    }

    /// Creates a new frame from dimensions and owned RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        Self::new(width, height, Arc::new(rgba_bytes))
    }

    /// Returns the frame width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the frame height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a reference to the RGBA pixel data.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns the shared reference to the RGBA pixel data.
    #[must_use]
    pub fn rgba_bytes_arc(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.rgba_bytes)
    }
}

impl PartialEq for VideoFrame {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for VideoFrame {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_url_classifies_remote_sources() {
        assert!(MediaUrl::new("https://example.com/clip.mp4").is_remote());
        assert!(MediaUrl::new("http://example.com/clip.mp4").is_remote());
        assert!(!MediaUrl::new("https://example.com/clip.mp4").is_local());
    }

    #[test]
    fn media_url_classifies_local_sources() {
        assert!(MediaUrl::new("/home/user/clip.mp4").is_local());
        assert!(MediaUrl::new("assets/intro.mov").is_local());
        assert!(!MediaUrl::new("assets/intro.mov").is_remote());
    }

    #[test]
    fn media_url_display_round_trips() {
        let url = MediaUrl::from("https://example.com/a.mp4");
        assert_eq!(format!("{}", url), "https://example.com/a.mp4");
        assert_eq!(url.as_str(), "https://example.com/a.mp4");
    }

    #[test]
    fn video_frame_reports_dimensions() {
        let frame = VideoFrame::from_rgba(4, 2, vec![0u8; 4 * 2 * 4]);
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.rgba_bytes().len(), 32);
    }

    #[test]
    #[should_panic(expected = "RGBA data length mismatch")]
    fn video_frame_rejects_mismatched_data() {
        let _ = VideoFrame::from_rgba(4, 4, vec![0u8; 3]);
    }

    #[test]
    fn video_frame_clone_shares_pixels() {
        let frame = VideoFrame::from_rgba(2, 2, vec![255u8; 16]);
        let clone = frame.clone();
        assert!(Arc::ptr_eq(&frame.rgba_bytes_arc(), &clone.rgba_bytes_arc()));
        assert_eq!(frame, clone);
    }
}
