// SPDX-License-Identifier: MPL-2.0
//! Playback lifecycle state machine and display attributes.

use serde::{Deserialize, Serialize};

/// Coarse lifecycle of a bound player instance.
///
/// `Ready` covers both paused and playing; the binding's `is_playing`
/// property disambiguates. A source change from any state re-enters
/// `Loading`; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// No load has been issued yet.
    #[default]
    Unloaded,
    /// A load was issued; the player has not reported readiness.
    Loading,
    /// Media is loaded and responds to transport commands.
    Ready,
    /// The last load failed; waiting for a new source URL.
    Failed,
}

impl Lifecycle {
    /// Returns true if no load has been issued yet.
    #[must_use]
    pub fn is_unloaded(self) -> bool {
        matches!(self, Self::Unloaded)
    }

    /// Returns true if a load is in flight.
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if media is loaded and controllable.
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns true if the last load failed.
    #[must_use]
    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// How the video is fitted into the host view's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeMode {
    /// Letterbox: preserve aspect ratio, fit entirely within bounds.
    #[default]
    AspectFit,
    /// Fill bounds exactly, distorting aspect ratio if needed.
    Stretch,
    /// Preserve aspect ratio, fill bounds, cropping overflow.
    AspectFill,
}

impl ResizeMode {
    /// Returns the next mode in the fit → stretch → fill cycle.
    /// Used by the controls' resize-mode picker.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            Self::AspectFit => Self::Stretch,
            Self::Stretch => Self::AspectFill,
            Self::AspectFill => Self::AspectFit,
        }
    }

    /// Short human-readable label for the controls overlay.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AspectFit => "Fit",
            Self::Stretch => "Stretch",
            Self::AspectFill => "Fill",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unloaded() {
        assert_eq!(Lifecycle::default(), Lifecycle::Unloaded);
    }

    #[test]
    fn lifecycle_predicates() {
        assert!(Lifecycle::Unloaded.is_unloaded());
        assert!(!Lifecycle::Unloaded.is_ready());

        assert!(Lifecycle::Loading.is_loading());
        assert!(!Lifecycle::Loading.is_ready());

        assert!(Lifecycle::Ready.is_ready());
        assert!(!Lifecycle::Ready.is_failed());

        assert!(Lifecycle::Failed.is_failed());
        assert!(!Lifecycle::Failed.is_loading());
    }

    #[test]
    fn resize_mode_cycles_through_all_variants() {
        let start = ResizeMode::AspectFit;
        let mut mode = start;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.cycled();
        }
        assert_eq!(mode, start);
        assert_eq!(
            seen,
            vec![
                ResizeMode::AspectFit,
                ResizeMode::Stretch,
                ResizeMode::AspectFill
            ]
        );
    }

    #[test]
    fn resize_mode_labels_are_distinct() {
        assert_ne!(ResizeMode::AspectFit.label(), ResizeMode::Stretch.label());
        assert_ne!(ResizeMode::Stretch.label(), ResizeMode::AspectFill.label());
    }
}
