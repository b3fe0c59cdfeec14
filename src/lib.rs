// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a declarative video playback control surface for the Iced GUI framework.
//!
//! It renders a host view for an opaque platform media player and exposes a small
//! set of two-way-bound playback properties (play/pause, mute, loop, one-shot seek
//! offsets, resize mode, observed position) so application code can drive and
//! observe playback without touching the underlying player object directly.
//!
//! The heart of the crate is [`binding::PlaybackBinding`], which reconciles the
//! bound properties against a [`application::port::MediaPlayer`] implementation
//! once per host update cycle and observes player-driven changes back into the
//! bound state.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.2.0")]

pub mod application;
pub mod binding;
pub mod config;
pub mod domain;
pub mod error;
pub mod player;
pub mod ui;

#[cfg(test)]
mod test_utils;
