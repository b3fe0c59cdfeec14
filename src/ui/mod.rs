// SPDX-License-Identifier: MPL-2.0
//! Thin Iced glue over the synchronization core.
//!
//! Nothing in here holds playback logic: the controls translate clicks into
//! bound-property mutations, and the host view forwards update cycles into
//! the binding and renders whatever frame the player exposes.

pub mod controls;
pub mod host;

pub use host::PlayerHost;
