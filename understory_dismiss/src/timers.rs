// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-ordered delayed actions, drained by the host's clock.

use smallvec::SmallVec;

/// Delayed container actions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Timer {
    /// Remove the placeholders of item `index`.
    Reveal { index: usize },
    /// Dismiss if item `index` is still selected.
    FailureDismiss { index: usize },
}

/// Small queue of `(deadline, action)` pairs.
///
/// Actions with equal deadlines fire in scheduling order.
#[derive(Clone, Debug, Default)]
pub(crate) struct TimerQueue<T> {
    entries: SmallVec<[(u64, T); 4]>,
}

impl<T: Copy + PartialEq> TimerQueue<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Schedules `action` at `deadline_ms`, replacing an identical pending one.
    pub(crate) fn schedule(&mut self, deadline_ms: u64, action: T) {
        self.entries.retain(|(_, pending)| *pending != action);
        let at = self
            .entries
            .iter()
            .position(|(deadline, _)| *deadline > deadline_ms)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, (deadline_ms, action));
    }

    /// Removes and returns the earliest action due at `now_ms`.
    pub(crate) fn pop_due(&mut self, now_ms: u64) -> Option<T> {
        match self.entries.first() {
            Some((deadline, _)) if *deadline <= now_ms => Some(self.entries.remove(0).1),
            _ => None,
        }
    }

    /// Earliest pending deadline.
    pub(crate) fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|(deadline, _)| *deadline)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
