// SPDX-License-Identifier: MPL-2.0
//! Presentation-free core types shared by the binding, the player port, and
//! the UI glue.

pub mod media;
pub mod playback;

pub use media::{MediaUrl, VideoFrame};
pub use playback::{Lifecycle, ResizeMode};
