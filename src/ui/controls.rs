// SPDX-License-Identifier: MPL-2.0
//! Playback controls toolbar.
//!
//! Provides play/pause, seek back/forward, a timeline scrubber with seek
//! preview, time display, mute, loop, and a resize-mode picker. The toolbar
//! is a pure widget builder over a [`ControlsState`] snapshot; it never
//! talks to the media player, only emits messages that the host maps onto
//! bound properties.

use crate::config;
use crate::domain::ResizeMode;
use iced::widget::{button, container, row, slider, text};
use iced::{Alignment, Element, Length};

/// Slider step in seconds (1ms precision).
const SLIDER_STEP_SECS: f64 = 0.001;

/// Messages emitted by the control widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Toggle play/pause state.
    TogglePlayback,

    /// Seek backward by the given number of seconds.
    SeekBack(f64),

    /// Seek forward by the given number of seconds.
    SeekForward(f64),

    /// Seek preview — slider is being dragged (visual feedback only).
    SeekPreview(f64),

    /// Commit seek — slider released, seek to the preview position.
    SeekCommit,

    /// Toggle mute state.
    ToggleMute,

    /// Toggle loop mode.
    ToggleLoop,

    /// Cycle to the next resize mode.
    CycleResizeMode,
}

/// Snapshot of the playback state the controls render from.
#[derive(Debug, Clone)]
pub struct ControlsState {
    pub is_playing: bool,
    pub position_secs: f64,
    pub duration_secs: f64,
    pub muted: bool,
    pub loop_enabled: bool,
    pub resize_mode: ResizeMode,
    /// Preview position during a slider drag; when `Some`, the slider shows
    /// this instead of the playback position.
    pub seek_preview_position: Option<f64>,
}

impl Default for ControlsState {
    fn default() -> Self {
        Self {
            is_playing: false,
            position_secs: 0.0,
            duration_secs: 0.0,
            muted: false,
            loop_enabled: false,
            resize_mode: ResizeMode::default(),
            seek_preview_position: None,
        }
    }
}

/// Renders the controls toolbar.
pub fn view<'a>(state: &ControlsState) -> Element<'a, Message> {
    let play_pause = button(text(if state.is_playing { "Pause" } else { "Play" }))
        .on_press(Message::TogglePlayback);

    let step = config::DEFAULT_SEEK_STEP_SECS;
    let seek_back = button(text(format!("-{step:.0}s"))).on_press(Message::SeekBack(step));
    let seek_forward = button(text(format!("+{step:.0}s"))).on_press(Message::SeekForward(step));

    let timeline_position = state.seek_preview_position.unwrap_or(state.position_secs);
    // An upper bound of 0 (duration not yet known) would collapse the
    // slider's range; keep it one step wide and dormant instead.
    let timeline = slider(
        0.0..=state.duration_secs.max(SLIDER_STEP_SECS),
        timeline_position,
        Message::SeekPreview,
    )
    .on_release(Message::SeekCommit)
    .width(Length::FillPortion(1))
    .step(SLIDER_STEP_SECS);

    let time_display = text(format!(
        "{} / {}",
        format_time(timeline_position),
        format_time(state.duration_secs)
    ));

    let mute = button(text(if state.muted { "Unmute" } else { "Mute" }))
        .on_press(Message::ToggleMute);

    let loop_toggle = button(text(if state.loop_enabled {
        "Loop: on"
    } else {
        "Loop: off"
    }))
    .on_press(Message::ToggleLoop);

    let resize_picker =
        button(text(state.resize_mode.label())).on_press(Message::CycleResizeMode);

    let controls = row![
        play_pause,
        seek_back,
        seek_forward,
        timeline,
        time_display,
        mute,
        loop_toggle,
        resize_picker,
    ]
    .spacing(4)
    .padding(4)
    .align_y(Alignment::Center);

    container(controls).width(Length::Fill).into()
}

/// Formats seconds as `mm:ss`, or `h:mm:ss` past the first hour.
fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "00:00");
    }

    #[test]
    fn format_time_handles_seconds() {
        assert_eq!(format_time(45.0), "00:45");
    }

    #[test]
    fn format_time_handles_minutes() {
        assert_eq!(format_time(125.0), "02:05");
    }

    #[test]
    fn format_time_handles_hours() {
        assert_eq!(format_time(3665.0), "1:01:05");
    }

    #[test]
    fn format_time_clamps_negative_values() {
        assert_eq!(format_time(-3.0), "00:00");
    }

    #[test]
    fn view_builds_for_default_state() {
        // Duration 0: the slider must stay constructible (dormant range).
        let _ = view(&ControlsState::default());
    }

    #[test]
    fn view_prefers_preview_position() {
        let state = ControlsState {
            position_secs: 10.0,
            duration_secs: 60.0,
            seek_preview_position: Some(42.0),
            ..ControlsState::default()
        };
        // Rendering is exercised by the host; here we only require that the
        // snapshot carries the preview through unchanged.
        assert_eq!(state.seek_preview_position.unwrap_or(state.position_secs), 42.0);
        let _ = view(&state);
    }
}
