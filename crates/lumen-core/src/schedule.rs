// File: crates/lumen-core/src/schedule.rs
// Summary: Coalescing redraw scheduler and host-driven cancellable one-shot timers.
// Notes:
// - Everything here is deterministic state the host event loop advances;
//   there are no threads and no wall-clock reads.

use std::time::Duration;

use tracing::debug;

/// Why a redraw was requested; carried for logging only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedrawReason {
    Data,
    Config,
    Theme,
    Resize,
    Refresh,
    Hover,
    Animation,
}

/// Dirty-flag coalescing: any number of triggers between two frames collapse
/// into a single full redraw.
#[derive(Debug, Default)]
pub struct RedrawScheduler {
    dirty: bool,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a trigger. Returns `true` only on the clean-to-dirty edge, so
    /// hosts request exactly one frame per burst of triggers.
    pub fn mark(&mut self, reason: RedrawReason) -> bool {
        let first = !self.dirty;
        self.dirty = true;
        if first {
            debug!(?reason, "redraw scheduled");
        }
        first
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consume the flag at draw time.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct TimerEntry {
    id: TimerId,
    remaining: Duration,
}

/// One-shot timers advanced by the host's elapsed time. A cancelled timer is
/// dropped, never queued; `clear` cancels everything on teardown.
#[derive(Debug, Default)]
pub struct Timers {
    next: u64,
    entries: Vec<TimerEntry>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next);
        self.next += 1;
        self.entries.push(TimerEntry { id, remaining: delay });
        id
    }

    /// Returns `true` when the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Advance all timers by `elapsed`, returning the ids that fired, in
    /// scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerId> {
        let mut fired = Vec::new();
        self.entries.retain_mut(|e| {
            if e.remaining <= elapsed {
                fired.push(e.id);
                false
            } else {
                e.remaining -= elapsed;
                true
            }
        });
        fired
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
