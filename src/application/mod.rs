// SPDX-License-Identifier: MPL-2.0
//! Application layer: the ports the core depends on.

pub mod port;
