// SPDX-License-Identifier: MPL-2.0
//! Player-side plumbing: event marshaling and the reference backend.
//!
//! Real platform backends live outside this crate and only need to
//! implement [`crate::application::port::MediaPlayer`]; what lives here is
//! the machinery every backend shares (the event channel) and a simulated
//! backend with a virtual clock used by tests, benches, and headless hosts.

pub mod events;
pub mod simulated;

pub use events::{EventChannel, EventSink, PlayerEvent};
pub use simulated::{Command, CommandLog, SimulatedPlayer};
