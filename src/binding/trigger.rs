// SPDX-License-Identifier: MPL-2.0
//! One-shot seek triggers.
//!
//! The bound seek offsets (`seek_back_secs`, `seek_forward_secs`,
//! `start_at_secs`) are command triggers, not state: a nonzero write
//! requests exactly one seek, and the field must return to `0` once that
//! seek has been issued. Rather than relying on property side effects to
//! self-clear, the triggers live in an explicit cell set that the binding
//! consumes at most once per reconciliation pass.
//!
//! Selection priority when several triggers are pending: seek-back, then
//! seek-forward; start-at is only considered when no relative seek is
//! pending, so an initial offset can never override an explicit user seek.

/// Which trigger was selected in a reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    SeekBack,
    SeekForward,
    StartAt,
}

/// Outcome of trigger selection for one pass.
///
/// `target_secs` is `None` when the trigger was selected and consumed but
/// no seek is to be issued (the forward guard refused a near-end target).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecutedSeek {
    pub kind: TriggerKind,
    pub target_secs: Option<f64>,
}

/// The pending one-shot seek requests of a binding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeekTriggers {
    start_at_secs: f64,
    seek_back_secs: f64,
    seek_forward_secs: f64,
}

impl SeekTriggers {
    /// Creates triggers with an initial start-at offset; 0.0 means none.
    #[must_use]
    pub fn with_start_at(start_at_secs: f64) -> Self {
        Self {
            start_at_secs,
            ..Self::default()
        }
    }

    /// Pending absolute seek offset; 0.0 when none.
    #[must_use]
    pub fn start_at_secs(&self) -> f64 {
        self.start_at_secs
    }

    /// Pending backward offset; 0.0 when none.
    #[must_use]
    pub fn seek_back_secs(&self) -> f64 {
        self.seek_back_secs
    }

    /// Pending forward offset; 0.0 when none.
    #[must_use]
    pub fn seek_forward_secs(&self) -> f64 {
        self.seek_forward_secs
    }

    /// Requests an absolute seek. Writing 0.0 clears the request.
    pub fn set_start_at(&mut self, secs: f64) {
        self.start_at_secs = secs;
    }

    /// Requests a backward seek by `secs`. Writing 0.0 clears the request.
    pub fn set_seek_back(&mut self, secs: f64) {
        self.seek_back_secs = secs;
    }

    /// Requests a forward seek by `secs`. Writing 0.0 clears the request.
    pub fn set_seek_forward(&mut self, secs: f64) {
        self.seek_forward_secs = secs;
    }

    /// Returns true if any trigger is pending.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.seek_back_secs != 0.0 || self.seek_forward_secs != 0.0 || self.start_at_secs != 0.0
    }

    /// Selects the highest-priority pending trigger for this pass.
    ///
    /// Does not mutate the cells; the caller issues the seek (if any) and
    /// then calls [`consume`] with the returned kind as the final step of
    /// the pass. Lower-priority triggers stay pending for following passes.
    ///
    /// Target arithmetic, given position `p` and duration `d`:
    /// - back `b`: `max(0, p - b)`
    /// - forward `f`: `p + f`, issued only if `p + f < d - f`; otherwise the
    ///   trigger is consumed without a seek (near-end forward taps no-op
    ///   instead of clamping — intentional asymmetry with the backward case)
    /// - start-at `s`: `clamp(s, 0, d)`
    ///
    /// [`consume`]: SeekTriggers::consume
    #[must_use]
    pub fn select(&self, position_secs: f64, duration_secs: f64) -> Option<ExecutedSeek> {
        if self.seek_back_secs != 0.0 {
            let target = (position_secs - self.seek_back_secs).max(0.0);
            return Some(ExecutedSeek {
                kind: TriggerKind::SeekBack,
                target_secs: Some(target),
            });
        }

        if self.seek_forward_secs != 0.0 {
            let target = position_secs + self.seek_forward_secs;
            let target_secs = if target < duration_secs - self.seek_forward_secs {
                Some(target)
            } else {
                None
            };
            return Some(ExecutedSeek {
                kind: TriggerKind::SeekForward,
                target_secs,
            });
        }

        if self.start_at_secs != 0.0 {
            let target = self.start_at_secs.clamp(0.0, duration_secs);
            return Some(ExecutedSeek {
                kind: TriggerKind::StartAt,
                target_secs: Some(target),
            });
        }

        None
    }

    /// Resets the given trigger to its neutral value.
    pub fn consume(&mut self, kind: TriggerKind) {
        match kind {
            TriggerKind::SeekBack => self.seek_back_secs = 0.0,
            TriggerKind::SeekForward => self.seek_forward_secs = 0.0,
            TriggerKind::StartAt => self.start_at_secs = 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn empty_triggers_select_nothing() {
        let triggers = SeekTriggers::default();
        assert!(!triggers.has_pending());
        assert_eq!(triggers.select(10.0, 60.0), None);
    }

    #[test]
    fn backward_target_subtracts_from_position() {
        let mut triggers = SeekTriggers::default();
        triggers.set_seek_back(10.0);

        let executed = triggers.select(45.0, 60.0).expect("trigger pending");
        assert_eq!(executed.kind, TriggerKind::SeekBack);
        assert_abs_diff_eq!(executed.target_secs.unwrap(), 35.0);
    }

    #[test]
    fn backward_target_clamps_to_zero() {
        let mut triggers = SeekTriggers::default();
        triggers.set_seek_back(10.0);

        let executed = triggers.select(3.0, 60.0).expect("trigger pending");
        assert_abs_diff_eq!(executed.target_secs.unwrap(), 0.0);
    }

    #[test]
    fn forward_target_adds_to_position() {
        let mut triggers = SeekTriggers::default();
        triggers.set_seek_forward(10.0);

        let executed = triggers.select(20.0, 60.0).expect("trigger pending");
        assert_eq!(executed.kind, TriggerKind::SeekForward);
        assert_abs_diff_eq!(executed.target_secs.unwrap(), 30.0);
    }

    #[test]
    fn forward_guard_refuses_near_end_target_but_still_consumes() {
        let mut triggers = SeekTriggers::default();
        triggers.set_seek_forward(10.0);

        // p + f = 55, d - f = 50: refused.
        let executed = triggers.select(45.0, 60.0).expect("trigger pending");
        assert_eq!(executed.kind, TriggerKind::SeekForward);
        assert_eq!(executed.target_secs, None);

        triggers.consume(executed.kind);
        assert_eq!(triggers.seek_forward_secs(), 0.0);
    }

    #[test]
    fn forward_guard_boundary_is_exclusive() {
        let mut triggers = SeekTriggers::default();
        triggers.set_seek_forward(10.0);

        // p + f = 50 == d - f: refused (strict inequality).
        let executed = triggers.select(40.0, 60.0).expect("trigger pending");
        assert_eq!(executed.target_secs, None);
    }

    #[test]
    fn start_at_clamps_into_duration() {
        let mut triggers = SeekTriggers::with_start_at(500.0);
        let executed = triggers.select(0.0, 60.0).expect("trigger pending");
        assert_eq!(executed.kind, TriggerKind::StartAt);
        assert_abs_diff_eq!(executed.target_secs.unwrap(), 60.0);

        triggers.set_start_at(-4.0);
        let executed = triggers.select(0.0, 60.0).expect("trigger pending");
        assert_abs_diff_eq!(executed.target_secs.unwrap(), 0.0);
    }

    #[test]
    fn back_takes_priority_over_forward_and_start_at() {
        let mut triggers = SeekTriggers::with_start_at(30.0);
        triggers.set_seek_back(5.0);
        triggers.set_seek_forward(5.0);

        let executed = triggers.select(20.0, 60.0).expect("trigger pending");
        assert_eq!(executed.kind, TriggerKind::SeekBack);

        // Consuming the winner leaves the others pending.
        triggers.consume(executed.kind);
        assert_eq!(triggers.seek_back_secs(), 0.0);
        assert_eq!(triggers.seek_forward_secs(), 5.0);
        assert_eq!(triggers.start_at_secs(), 30.0);

        let executed = triggers.select(15.0, 60.0).expect("trigger pending");
        assert_eq!(executed.kind, TriggerKind::SeekForward);
        triggers.consume(executed.kind);

        let executed = triggers.select(20.0, 60.0).expect("trigger pending");
        assert_eq!(executed.kind, TriggerKind::StartAt);
        triggers.consume(executed.kind);
        assert!(!triggers.has_pending());
    }

    #[test]
    fn start_at_deferred_while_relative_seek_pending() {
        let mut triggers = SeekTriggers::with_start_at(30.0);
        triggers.set_seek_forward(5.0);

        let executed = triggers.select(10.0, 60.0).expect("trigger pending");
        assert_eq!(executed.kind, TriggerKind::SeekForward);
        assert_eq!(triggers.start_at_secs(), 30.0);
    }

    #[test]
    fn consume_is_idempotent() {
        let mut triggers = SeekTriggers::default();
        triggers.set_seek_back(10.0);
        triggers.consume(TriggerKind::SeekBack);
        triggers.consume(TriggerKind::SeekBack);
        assert_eq!(triggers.seek_back_secs(), 0.0);
    }
}
