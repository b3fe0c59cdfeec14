// SPDX-License-Identifier: MPL-2.0
//! Player host view.
//!
//! [`PlayerHost`] owns a media player instance together with its
//! [`PlaybackBinding`] and wires the two into the Iced update/view cycle:
//! control messages mutate bound properties, every update pumps marshaled
//! player events and reconciles, and `view` renders the player's current
//! frame under the controls overlay.
//!
//! The host carries no playback logic of its own. It exists so an
//! application can embed a video surface with two lines: construct with a
//! [`PlayerConfig`], forward messages.

use crate::application::port::MediaPlayer;
use crate::binding::PlaybackBinding;
use crate::config::PlayerConfig;
use crate::domain::ResizeMode;
use crate::ui::controls::{self, ControlsState};
use iced::widget::{column, container, image, text};
use iced::{ContentFit, Element, Length};

/// Smallest committable slider position. Zero is the absolute trigger's
/// neutral value, so a commit to the very beginning nudges to the first
/// representable instant instead.
const MIN_COMMIT_SECS: f64 = 0.001;

/// Messages handled by the host view.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A message from the controls overlay.
    Controls(controls::Message),
}

/// Iced view owning one media player and its binding.
pub struct PlayerHost<P: MediaPlayer> {
    binding: PlaybackBinding,
    adapter: P,
    seek_preview_position: Option<f64>,
}

impl<P: MediaPlayer> PlayerHost<P> {
    /// Creates a host for the given configuration and player backend.
    ///
    /// Nothing is loaded until the first [`sync`] (or [`update`]) runs.
    ///
    /// [`sync`]: PlayerHost::sync
    /// [`update`]: PlayerHost::update
    pub fn new(config: &PlayerConfig, adapter: P) -> Self {
        Self {
            binding: PlaybackBinding::new(config),
            adapter,
            seek_preview_position: None,
        }
    }

    /// Handles a message, then runs one synchronization cycle.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Controls(msg) => self.apply_controls(msg),
        }
        self.sync();
    }

    /// Runs one synchronization cycle: drains player events into the
    /// binding, then reconciles the bound properties against the player.
    ///
    /// Hosts should also call this on their own cadence (e.g. from a
    /// subscription tick) so player-driven changes surface without user
    /// interaction.
    pub fn sync(&mut self) {
        self.binding.pump_events(&mut self.adapter);
        self.binding.reconcile(&mut self.adapter);
    }

    /// Renders the video area, the load-failure state, or the controls
    /// overlay, depending on the bound state.
    pub fn view(&self) -> Element<'_, Message> {
        let video_area: Element<'_, Message> = if let Some(error) = self.binding.load_error() {
            container(text(error.to_string()))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else if let Some(frame) = self.adapter.current_frame() {
            let handle = image::Handle::from_rgba(
                frame.width(),
                frame.height(),
                frame.rgba_bytes().to_vec(),
            );
            image::Image::new(handle)
                .content_fit(content_fit(self.binding.resize_mode()))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            container(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        };

        if self.binding.show_controls() {
            column![
                video_area,
                controls::view(&self.controls_state()).map(Message::Controls)
            ]
            .into()
        } else {
            video_area
        }
    }

    /// The binding, for reading output properties (e.g. the last observed
    /// position for resume persistence).
    #[must_use]
    pub fn binding(&self) -> &PlaybackBinding {
        &self.binding
    }

    /// Mutable binding access for host-driven property writes. Call
    /// [`sync`](PlayerHost::sync) afterwards to apply them.
    pub fn binding_mut(&mut self) -> &mut PlaybackBinding {
        &mut self.binding
    }

    /// The player backend.
    #[must_use]
    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    /// Mutable backend access (e.g. for driving a simulated clock).
    pub fn adapter_mut(&mut self) -> &mut P {
        &mut self.adapter
    }

    fn apply_controls(&mut self, message: controls::Message) {
        match message {
            controls::Message::TogglePlayback => {
                let playing = self.binding.is_playing();
                self.binding.set_playing(!playing);
            }
            controls::Message::SeekBack(secs) => self.binding.request_seek_back(secs),
            controls::Message::SeekForward(secs) => self.binding.request_seek_forward(secs),
            controls::Message::SeekPreview(position) => {
                self.seek_preview_position = Some(position);
            }
            controls::Message::SeekCommit => {
                if let Some(target) = self.seek_preview_position.take() {
                    self.binding.request_start_at(target.max(MIN_COMMIT_SECS));
                }
            }
            controls::Message::ToggleMute => {
                let muted = self.binding.is_muted();
                self.binding.set_muted(!muted);
            }
            controls::Message::ToggleLoop => {
                let looping = self.binding.loop_enabled();
                self.binding.set_loop_enabled(!looping);
            }
            controls::Message::CycleResizeMode => {
                let mode = self.binding.resize_mode().cycled();
                self.binding.set_resize_mode(mode);
            }
        }
    }

    fn controls_state(&self) -> ControlsState {
        ControlsState {
            is_playing: self.binding.is_playing(),
            position_secs: self.binding.last_observed_position_secs(),
            duration_secs: self.adapter.duration_secs(),
            muted: self.binding.is_muted(),
            loop_enabled: self.binding.loop_enabled(),
            resize_mode: self.binding.resize_mode(),
            seek_preview_position: self.seek_preview_position,
        }
    }
}

fn content_fit(mode: ResizeMode) -> ContentFit {
    match mode {
        ResizeMode::AspectFit => ContentFit::Contain,
        ResizeMode::Stretch => ContentFit::Fill,
        ResizeMode::AspectFill => ContentFit::Cover,
    }
}
