// SPDX-License-Identifier: MPL-2.0
//! Cross-thread event delivery from the media player to the binding.
//!
//! Player backends run their clocks and attribute observation on their own
//! threads; bound properties may only be mutated on the host's main context.
//! [`EventChannel`] is the marshaling point: the adapter sends through a
//! cloneable [`EventSink`] from any thread, and the binding drains the
//! channel during its main-context update cycle.
//!
//! Every sink is stamped with the *epoch* of the attachment that created it.
//! When the binding detaches (because the source URL changed), the epoch is
//! bumped synchronously, and any event still in flight from an old sink is
//! dropped at drain time. This is what guarantees that no event from a
//! previously loaded source is ever applied to the new source's state.

use tokio::sync::mpsc;

/// Events a media player reports back to the binding.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Periodic clock callback (≈4×/second while playing).
    /// Carries the playback rate so the binding can reconcile externally
    /// driven play/pause (e.g., the platform's own control chrome).
    TimeTick { position_secs: f64, rate: f64 },

    /// The player's mute attribute changed.
    MuteChanged(bool),

    /// The player's volume attribute changed.
    VolumeChanged(f32),

    /// Playback reached the end of the media.
    ReachedEnd,

    /// The current source could not be loaded.
    LoadFailed(String),
}

/// An event together with the attachment epoch of the sink that sent it.
#[derive(Debug)]
struct Stamped {
    epoch: u64,
    event: PlayerEvent,
}

/// Sending half handed to the media player at `load` time.
///
/// Cloneable and `Send`; the player may emit from a decoder or observation
/// thread. Sending never blocks and never fails loudly: once the receiving
/// side is gone or detached, events are simply dropped.
#[derive(Clone)]
pub struct EventSink {
    epoch: u64,
    tx: mpsc::UnboundedSender<Stamped>,
}

impl EventSink {
    /// Sends an event toward the binding. Fire-and-forget.
    pub fn send(&self, event: PlayerEvent) {
        let _ = self.tx.send(Stamped {
            epoch: self.epoch,
            event,
        });
    }

    /// Returns the attachment epoch this sink was created under.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl std::fmt::Debug for EventSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSink").field("epoch", &self.epoch).finish()
    }
}

/// Receiving half owned by the binding, drained on the main context.
#[derive(Debug)]
pub struct EventChannel {
    epoch: u64,
    tx: mpsc::UnboundedSender<Stamped>,
    rx: mpsc::UnboundedReceiver<Stamped>,
    stale_dropped: u64,
}

impl EventChannel {
    /// Creates a channel with no attachments yet (epoch 0).
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            epoch: 0,
            tx,
            rx,
            stale_dropped: 0,
        }
    }

    /// Returns a sink stamped with the current attachment epoch.
    #[must_use]
    pub fn sink(&self) -> EventSink {
        EventSink {
            epoch: self.epoch,
            tx: self.tx.clone(),
        }
    }

    /// Detaches all previously handed-out sinks.
    ///
    /// Bumps the epoch synchronously; events already queued (or still to be
    /// sent) through older sinks are dropped on the next [`drain`].
    /// Returns the new epoch.
    ///
    /// [`drain`]: EventChannel::drain
    pub fn detach(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    /// Returns the current attachment epoch.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Drains all queued events, dropping any from detached epochs.
    ///
    /// Must be called from the main context only; the returned events are
    /// in send order.
    pub fn drain(&mut self) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        while let Ok(stamped) = self.rx.try_recv() {
            if stamped.epoch == self.epoch {
                events.push(stamped.event);
            } else {
                self.stale_dropped += 1;
                log::debug!(
                    "dropping stale player event from epoch {} (current {}): {:?}",
                    stamped.epoch,
                    self.epoch,
                    stamped.event
                );
            }
        }
        events
    }

    /// Total number of stale events dropped since creation.
    #[must_use]
    pub fn stale_dropped(&self) -> u64 {
        self.stale_dropped
    }
}

impl Default for EventChannel {
    fn default() -> Self {
        Self::new()
    }
}
