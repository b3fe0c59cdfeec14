// SPDX-License-Identifier: MPL-2.0
//! Media player port definition.
//!
//! This module defines the [`MediaPlayer`] trait: the contract between the
//! synchronization core and the opaque platform playback object. Backends
//! (mpv, GStreamer, a web media element, the in-crate simulator) implement
//! this trait; the core never sees anything beyond it.
//!
//! # Design Notes
//!
//! - The player is **stateful** — it holds the loaded media, its clock, and
//!   its display attributes.
//! - Methods are not `async` and are fire-and-forget — failures surface as
//!   [`PlayerEvent::LoadFailed`](crate::player::events::PlayerEvent) through
//!   the sink handed over at `load` time, never as return values.
//! - Attribute observation is an explicit subscription: the sink passed to
//!   `load` is the one and only registration point. After the binding has
//!   detached (epoch bump), the player may keep sending into a stale sink;
//!   those events are dropped on the receiving side.

use crate::domain::{MediaUrl, ResizeMode, VideoFrame};
use crate::player::events::EventSink;

/// Port for the platform media player.
///
/// # Thread Safety
///
/// Implementations must be `Send` so a host can move the player between
/// contexts; they are **not** required to be `Sync`. All trait methods are
/// invoked from the host's main context. Event *emission* may happen from
/// any thread the backend owns, via the [`EventSink`].
///
/// # Lifecycle
///
/// 1. `load(url, sink)` — open a source and attach event delivery
/// 2. `play()` / `pause()` / `seek()` — transport commands
/// 3. attribute setters — cheap and idempotent, applied every update cycle
/// 4. `load` again — the previous source is discarded; the previous sink
///    must no longer deliver into current state (the binding enforces this
///    with epochs even if the backend keeps sending)
pub trait MediaPlayer: Send {
    /// Opens a media source and attaches the event sink for this load.
    ///
    /// Replaces whatever was loaded before. On failure the player must emit
    /// `LoadFailed` through `sink` and report the URL via `current_url` so
    /// the core does not re-issue the same load every cycle.
    fn load(&mut self, url: &MediaUrl, sink: EventSink);

    /// Starts or resumes playback (rate becomes positive).
    fn play(&mut self);

    /// Pauses playback (rate becomes 0).
    fn pause(&mut self);

    /// Seeks to `target_secs` with the given snapping tolerances in seconds.
    ///
    /// A tolerance of 0.0 on both sides requests an exact-position seek.
    fn seek(&mut self, target_secs: f64, tolerance_before_secs: f64, tolerance_after_secs: f64);

    /// The URL of the currently loaded (or loading, or failed) source.
    fn current_url(&self) -> Option<&MediaUrl>;

    /// Current playback position in seconds.
    fn current_time_secs(&self) -> f64;

    /// Media duration in seconds; 0.0 while unknown.
    fn duration_secs(&self) -> f64;

    /// Playback rate: 0.0 = paused, > 0.0 = playing.
    fn rate(&self) -> f64;

    /// Whether audio is muted.
    fn is_muted(&self) -> bool;

    /// Sets the mute state. Idempotent.
    fn set_muted(&mut self, muted: bool);

    /// Audio volume in `[0.0, 1.0]`.
    fn volume(&self) -> f32;

    /// Sets the audio volume. Idempotent.
    fn set_volume(&mut self, volume: f32);

    /// Sets how video is fitted into the host view. Idempotent.
    fn set_resize_mode(&mut self, mode: ResizeMode);

    /// Shows or hides the player's native control chrome. Idempotent.
    fn set_controls_visible(&mut self, visible: bool);

    /// Enables or disables the picture-in-picture capability flag.
    /// The player decides what, if anything, to do with it. Idempotent.
    fn set_allows_picture_in_picture(&mut self, allowed: bool);

    /// Latest decoded frame for display, if the backend exposes one.
    ///
    /// Purely presentational; backends that render into their own surface
    /// may always return `None`.
    fn current_frame(&self) -> Option<VideoFrame>;
}
