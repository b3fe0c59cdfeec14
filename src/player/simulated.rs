// SPDX-License-Identifier: MPL-2.0
//! Simulated media player with a virtual clock.
//!
//! [`SimulatedPlayer`] implements the [`MediaPlayer`] port without decoding
//! anything: media durations come from a catalog, time advances only when a
//! test (or headless host) calls [`advance`], and events are emitted through
//! the sink exactly the way a real backend would emit them from its decoder
//! thread. Every command received is recorded in a [`CommandLog`] so tests
//! can assert exact command sequences.
//!
//! [`advance`]: SimulatedPlayer::advance

use crate::application::port::MediaPlayer;
use crate::config;
use crate::domain::{MediaUrl, ResizeMode, VideoFrame};
use crate::player::events::{EventSink, PlayerEvent};
use std::collections::HashMap;

/// Duration used for catalog misses.
pub const DEFAULT_MEDIA_DURATION_SECS: f64 = 120.0;

/// A command received through the [`MediaPlayer`] port.
///
/// Static display attributes (resize mode, controls visibility, PiP flag)
/// are deliberately not recorded: they are applied unconditionally every
/// update cycle and carry no sequencing information.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Load(MediaUrl),
    Play,
    Pause,
    Seek(f64),
    SetMuted(bool),
    SetVolume(f32),
}

impl Command {
    /// Returns true for transport commands (load/play/pause/seek), the ones
    /// whose repetition would indicate a non-idempotent reconcile pass.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Command::Load(_) | Command::Play | Command::Pause | Command::Seek(_)
        )
    }
}

/// Ordered record of every command a [`SimulatedPlayer`] received.
#[derive(Debug, Default)]
pub struct CommandLog {
    commands: Vec<Command>,
}

impl CommandLog {
    fn record(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// All recorded commands, in order.
    #[must_use]
    pub fn all(&self) -> &[Command] {
        &self.commands
    }

    /// Only the transport commands, in order.
    #[must_use]
    pub fn transport(&self) -> Vec<Command> {
        self.commands
            .iter()
            .filter(|c| c.is_transport())
            .cloned()
            .collect()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// Virtual-clock implementation of the [`MediaPlayer`] port.
pub struct SimulatedPlayer {
    catalog: HashMap<MediaUrl, f64>,
    failures: HashMap<MediaUrl, String>,

    current_url: Option<MediaUrl>,
    duration_secs: f64,
    position_secs: f64,
    rate: f64,
    muted: bool,
    volume: f32,
    resize_mode: ResizeMode,
    controls_visible: bool,
    allows_pip: bool,
    frame: Option<VideoFrame>,

    sink: Option<EventSink>,
    tick_interval_secs: f64,
    tick_accum_secs: f64,

    commands: CommandLog,
}

impl SimulatedPlayer {
    /// Creates a player with an empty catalog. Unknown URLs load with
    /// [`DEFAULT_MEDIA_DURATION_SECS`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: HashMap::new(),
            failures: HashMap::new(),
            current_url: None,
            duration_secs: 0.0,
            position_secs: 0.0,
            rate: 0.0,
            muted: false,
            volume: config::UNMUTED_VOLUME,
            resize_mode: ResizeMode::default(),
            controls_visible: true,
            allows_pip: false,
            frame: None,
            sink: None,
            tick_interval_secs: 1.0 / config::TIME_TICK_HZ,
            tick_accum_secs: 0.0,
            commands: CommandLog::default(),
        }
    }

    /// Registers a known media source with the given duration.
    #[must_use]
    pub fn with_media(mut self, url: impl Into<MediaUrl>, duration_secs: f64) -> Self {
        self.catalog.insert(url.into(), duration_secs);
        self
    }

    /// Registers a source whose load fails with the given message.
    #[must_use]
    pub fn with_failure(mut self, url: impl Into<MediaUrl>, message: impl Into<String>) -> Self {
        self.failures.insert(url.into(), message.into());
        self
    }

    /// Advances the virtual clock by `dt_secs`.
    ///
    /// While the rate is positive this moves the position, emits periodic
    /// time ticks at the configured cadence, and — when the position hits
    /// the duration — clamps, stops, and emits `ReachedEnd`. A paused
    /// player emits nothing, like a real playback clock.
    pub fn advance(&mut self, dt_secs: f64) {
        if self.rate <= 0.0 || self.current_url.is_none() {
            return;
        }

        self.position_secs += dt_secs * self.rate;
        self.tick_accum_secs += dt_secs;

        let reached_end = self.duration_secs > 0.0 && self.position_secs >= self.duration_secs;
        if reached_end {
            self.position_secs = self.duration_secs;
        }

        while self.tick_accum_secs >= self.tick_interval_secs {
            self.tick_accum_secs -= self.tick_interval_secs;
            self.emit(PlayerEvent::TimeTick {
                position_secs: self.position_secs,
                rate: self.rate,
            });
        }

        if reached_end {
            self.rate = 0.0;
            self.emit(PlayerEvent::TimeTick {
                position_secs: self.position_secs,
                rate: 0.0,
            });
            self.emit(PlayerEvent::ReachedEnd);
        }
    }

    /// Pauses playback as if the user hit the player's own native chrome,
    /// bypassing the binding entirely. Emits the observing time tick.
    pub fn pause_externally(&mut self) {
        self.rate = 0.0;
        self.emit(PlayerEvent::TimeTick {
            position_secs: self.position_secs,
            rate: 0.0,
        });
    }

    /// Mutes/unmutes as if from the player's native chrome; observed through
    /// the event sink but not recorded as a binding command.
    pub fn set_muted_externally(&mut self, muted: bool) {
        if self.muted != muted {
            self.muted = muted;
            self.emit(PlayerEvent::MuteChanged(muted));
        }
    }

    /// The command log for assertions.
    #[must_use]
    pub fn commands(&self) -> &CommandLog {
        &self.commands
    }

    /// Clears the command log.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Resize mode last applied through the port.
    #[must_use]
    pub fn resize_mode(&self) -> ResizeMode {
        self.resize_mode
    }

    /// Controls visibility last applied through the port.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Picture-in-picture capability flag last applied through the port.
    #[must_use]
    pub fn allows_picture_in_picture(&self) -> bool {
        self.allows_pip
    }

    fn emit(&self, event: PlayerEvent) {
        if let Some(sink) = &self.sink {
            sink.send(event);
        }
    }
}

impl Default for SimulatedPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaPlayer for SimulatedPlayer {
    fn load(&mut self, url: &MediaUrl, sink: EventSink) {
        self.commands.record(Command::Load(url.clone()));
        self.current_url = Some(url.clone());
        self.position_secs = 0.0;
        self.rate = 0.0;
        self.tick_accum_secs = 0.0;
        self.sink = Some(sink);

        if let Some(message) = self.failures.get(url) {
            log::debug!("simulated load failure for {url}: {message}");
            self.duration_secs = 0.0;
            self.frame = None;
            self.emit(PlayerEvent::LoadFailed(message.clone()));
            return;
        }

        self.duration_secs = self
            .catalog
            .get(url)
            .copied()
            .unwrap_or(DEFAULT_MEDIA_DURATION_SECS);
        // A stand-in first frame, the way a real backend surfaces a poster.
        self.frame = Some(VideoFrame::from_rgba(2, 2, vec![0u8; 16]));
    }

    fn play(&mut self) {
        self.commands.record(Command::Play);
        self.rate = 1.0;
    }

    fn pause(&mut self) {
        self.commands.record(Command::Pause);
        self.rate = 0.0;
    }

    fn seek(&mut self, target_secs: f64, _tolerance_before: f64, _tolerance_after: f64) {
        self.commands.record(Command::Seek(target_secs));
        self.position_secs = target_secs.clamp(0.0, self.duration_secs);
    }

    fn current_url(&self) -> Option<&MediaUrl> {
        self.current_url.as_ref()
    }

    fn current_time_secs(&self) -> f64 {
        self.position_secs
    }

    fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.commands.record(Command::SetMuted(muted));
        if self.muted != muted {
            self.muted = muted;
            self.emit(PlayerEvent::MuteChanged(muted));
        }
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.commands.record(Command::SetVolume(volume));
        if (self.volume - volume).abs() > f32::EPSILON {
            self.volume = volume;
            self.emit(PlayerEvent::VolumeChanged(volume));
        }
    }

    fn set_resize_mode(&mut self, mode: ResizeMode) {
        self.resize_mode = mode;
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.controls_visible = visible;
    }

    fn set_allows_picture_in_picture(&mut self, allowed: bool) {
        self.allows_pip = allowed;
    }

    fn current_frame(&self) -> Option<VideoFrame> {
        self.frame.clone()
    }
}
