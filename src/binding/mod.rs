// SPDX-License-Identifier: MPL-2.0
//! Playback binding: the synchronization core.
//!
//! [`PlaybackBinding`] holds the canonical set of bound playback properties
//! for one displayed video and reconciles them against a [`MediaPlayer`]
//! once per host update cycle. Externally-set intents (play, mute, one-shot
//! seek offsets) flow *down* into player commands; player-driven changes
//! (clock ticks, native mute toggles, end of media, load failures) flow
//! back *up* into the bound properties through the event channel.
//!
//! Threading contract: `reconcile`, `pump_events`, and every setter run on
//! the host's main context, never concurrently for the same instance.
//! Player events may originate on a decoder thread; they are marshaled
//! through [`EventChannel`] and only touch bound state during
//! `pump_events`. There are no locks — correctness rests on that
//! confinement plus epoch-stamped event delivery.

pub mod trigger;

pub use trigger::{ExecutedSeek, SeekTriggers, TriggerKind};

use crate::application::port::MediaPlayer;
use crate::config::{self, PlayerConfig};
use crate::domain::{Lifecycle, MediaUrl, ResizeMode};
use crate::error::PlayerError;
use crate::player::events::{EventChannel, PlayerEvent};

/// Two-way-bound playback state for a single video surface.
///
/// One instance per displayed video, owned by the host view and living as
/// long as it does. The binding never owns the player: the host lends
/// `&mut dyn MediaPlayer` into each call, which is what lets the binding
/// survive player recreation when the source URL changes.
#[derive(Debug)]
pub struct PlaybackBinding {
    source_url: MediaUrl,
    is_playing: bool,
    is_muted: bool,
    loop_enabled: bool,
    resize_mode: ResizeMode,
    show_controls: bool,
    allows_picture_in_picture: bool,

    triggers: SeekTriggers,

    last_observed_position_secs: f64,
    lifecycle: Lifecycle,
    load_error: Option<PlayerError>,

    /// Mute value most recently written to the player by this binding.
    /// `MuteChanged` events equal to this are echoes of our own write and
    /// must not be propagated back into `is_muted`.
    last_applied_mute: Option<bool>,

    events: EventChannel,
}

impl PlaybackBinding {
    /// Creates a binding from a construction configuration.
    ///
    /// Nothing is loaded yet; the first [`reconcile`] issues the load.
    ///
    /// [`reconcile`]: PlaybackBinding::reconcile
    #[must_use]
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            source_url: config.url.clone(),
            is_playing: config.autoplay,
            is_muted: config.muted,
            loop_enabled: config.looping,
            resize_mode: config.resize_mode,
            show_controls: config.show_controls,
            allows_picture_in_picture: config.allows_picture_in_picture,
            triggers: SeekTriggers::with_start_at(config.start_at_secs),
            last_observed_position_secs: 0.0,
            lifecycle: Lifecycle::Unloaded,
            load_error: None,
            last_applied_mute: None,
            events: EventChannel::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // BOUND PROPERTIES
    // ═══════════════════════════════════════════════════════════════════

    /// The current media source.
    #[must_use]
    pub fn source_url(&self) -> &MediaUrl {
        &self.source_url
    }

    /// Replaces the media source. The next reconcile pass detaches from the
    /// old player state and issues a fresh load; any pending one-shot seek
    /// stays pending and applies to the *new* source.
    pub fn set_source_url(&mut self, url: MediaUrl) {
        self.source_url = url;
    }

    /// Desired/observed play state.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Requests playback to start or stop on the next reconcile pass.
    pub fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Desired/observed mute state.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.is_muted = muted;
    }

    /// Whether playback restarts from the beginning at end of media.
    #[must_use]
    pub fn loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    pub fn set_loop_enabled(&mut self, enabled: bool) {
        self.loop_enabled = enabled;
    }

    #[must_use]
    pub fn resize_mode(&self) -> ResizeMode {
        self.resize_mode
    }

    pub fn set_resize_mode(&mut self, mode: ResizeMode) {
        self.resize_mode = mode;
    }

    #[must_use]
    pub fn show_controls(&self) -> bool {
        self.show_controls
    }

    pub fn set_show_controls(&mut self, show: bool) {
        self.show_controls = show;
    }

    #[must_use]
    pub fn allows_picture_in_picture(&self) -> bool {
        self.allows_picture_in_picture
    }

    pub fn set_allows_picture_in_picture(&mut self, allowed: bool) {
        self.allows_picture_in_picture = allowed;
    }

    /// Pending absolute seek offset; 0.0 when none.
    #[must_use]
    pub fn start_at_secs(&self) -> f64 {
        self.triggers.start_at_secs()
    }

    /// Requests an absolute seek on the next reconcile pass.
    pub fn request_start_at(&mut self, secs: f64) {
        self.triggers.set_start_at(secs);
    }

    /// Pending backward seek offset; 0.0 when none.
    #[must_use]
    pub fn seek_back_secs(&self) -> f64 {
        self.triggers.seek_back_secs()
    }

    /// Requests a backward seek by `secs` on the next reconcile pass.
    pub fn request_seek_back(&mut self, secs: f64) {
        self.triggers.set_seek_back(secs);
    }

    /// Pending forward seek offset; 0.0 when none.
    #[must_use]
    pub fn seek_forward_secs(&self) -> f64 {
        self.triggers.seek_forward_secs()
    }

    /// Requests a forward seek by `secs` on the next reconcile pass.
    pub fn request_seek_forward(&mut self, secs: f64) {
        self.triggers.set_seek_forward(secs);
    }

    // ═══════════════════════════════════════════════════════════════════
    // OUTPUT-ONLY PROPERTIES
    // ═══════════════════════════════════════════════════════════════════

    /// Last position reported by the player clock, in seconds.
    ///
    /// Hosts read this for resume-playback persistence; the binding never
    /// writes it except from player events.
    #[must_use]
    pub fn last_observed_position_secs(&self) -> f64 {
        self.last_observed_position_secs
    }

    /// Coarse lifecycle of the bound player instance.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// The last load failure, if the binding is in the `Failed` state.
    #[must_use]
    pub fn load_error(&self) -> Option<&PlayerError> {
        self.load_error.as_ref()
    }

    /// Number of events dropped because they arrived from a detached
    /// player attachment. Diagnostic only.
    #[must_use]
    pub fn stale_events_dropped(&self) -> u64 {
        self.events.stale_dropped()
    }

    // ═══════════════════════════════════════════════════════════════════
    // RECONCILIATION
    // ═══════════════════════════════════════════════════════════════════

    /// Reconciles the bound properties against the player.
    ///
    /// Invoked once per host update cycle, possibly many times per second.
    /// The pass is idempotent: with no property changes since the previous
    /// pass, no transport command (load/play/pause/seek) is issued again —
    /// only the cheap static attribute writes repeat.
    ///
    /// Order within a pass:
    /// 1. source change → detach, load, return (commands wait a pass so a
    ///    not-yet-ready player is never raced)
    /// 2. static attributes
    /// 3. mute/volume
    /// 4. one-shot seek selection (back > forward > start-at)
    /// 5. play/pause, with the at-end restart special case
    /// 6. reset of the consumed trigger, last
    pub fn reconcile(&mut self, adapter: &mut dyn MediaPlayer) {
        if adapter.current_url() != Some(&self.source_url) {
            let epoch = self.events.detach();
            self.load_error = None;
            self.last_applied_mute = None;
            self.lifecycle = Lifecycle::Loading;
            log::debug!("loading {} (attachment epoch {})", self.source_url, epoch);
            adapter.load(&self.source_url, self.events.sink());
            return;
        }

        // A failed load leaves nothing worth commanding; wait for a new URL.
        if self.lifecycle.is_failed() {
            return;
        }

        adapter.set_controls_visible(self.show_controls);
        adapter.set_allows_picture_in_picture(self.allows_picture_in_picture);
        adapter.set_resize_mode(self.resize_mode);

        adapter.set_muted(self.is_muted);
        adapter.set_volume(if self.is_muted {
            0.0
        } else {
            config::UNMUTED_VOLUME
        });
        self.last_applied_mute = Some(self.is_muted);

        let position = adapter.current_time_secs();
        let duration = adapter.duration_secs();

        if self.lifecycle.is_loading() && duration > 0.0 {
            self.lifecycle = Lifecycle::Ready;
        }

        let executed = self.triggers.select(position, duration);
        let pending_target = executed.and_then(|e| e.target_secs);

        if let Some(target) = pending_target {
            log::debug!("seeking to {target:.3}s (from {position:.3}s)");
            adapter.seek(
                target,
                config::SEEK_TOLERANCE_SECS,
                config::SEEK_TOLERANCE_SECS,
            );
        } else if self.is_playing && duration > 0.0 && position >= duration {
            // Play requested while sitting at the end: restart from the top.
            adapter.seek(
                0.0,
                config::SEEK_TOLERANCE_SECS,
                config::SEEK_TOLERANCE_SECS,
            );
        }

        if self.is_playing {
            if adapter.rate() <= 0.0 {
                adapter.play();
            }
        } else if adapter.rate() > 0.0 {
            adapter.pause();
        }

        // The consumed trigger resets only after its seek was issued, on
        // this same context, so no reader can observe a cleared trigger
        // whose seek has not happened yet.
        if let Some(executed) = executed {
            self.triggers.consume(executed.kind);
        }
    }

    /// Drains marshaled player events into the bound properties.
    ///
    /// Main context only. Events from detached attachments (older epochs)
    /// are dropped inside the channel and never reach the binding state.
    pub fn pump_events(&mut self, adapter: &mut dyn MediaPlayer) {
        for event in self.events.drain() {
            self.on_player_event(event, adapter);
        }
    }

    /// Applies a single player-driven event to the bound properties.
    pub fn on_player_event(&mut self, event: PlayerEvent, adapter: &mut dyn MediaPlayer) {
        match event {
            PlayerEvent::TimeTick {
                position_secs,
                rate,
            } => {
                self.last_observed_position_secs = position_secs;
                // Reconciles externally-driven transport changes, e.g. the
                // user pressing pause in the player's native chrome.
                self.is_playing = rate > 0.0;
                if self.lifecycle.is_loading() {
                    self.lifecycle = Lifecycle::Ready;
                }
            }
            PlayerEvent::MuteChanged(muted) => {
                if self.last_applied_mute != Some(muted) {
                    self.is_muted = muted;
                    self.last_applied_mute = Some(muted);
                }
            }
            PlayerEvent::VolumeChanged(volume) => {
                log::trace!("player volume changed to {volume:.2}");
            }
            PlayerEvent::ReachedEnd => {
                if self.loop_enabled {
                    adapter.seek(
                        0.0,
                        config::SEEK_TOLERANCE_SECS,
                        config::SEEK_TOLERANCE_SECS,
                    );
                    adapter.play();
                    self.is_playing = true;
                } else {
                    self.is_playing = false;
                    self.triggers.set_start_at(0.0);
                }
            }
            PlayerEvent::LoadFailed(message) => {
                log::warn!("load failed for {}: {message}", self.source_url);
                self.lifecycle = Lifecycle::Failed;
                self.load_error = Some(PlayerError::from_message(&message));
                self.is_playing = false;
            }
        }
    }
}
