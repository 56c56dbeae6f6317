// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer samples fed to the classifier.
//!
//! One interaction is `Down`, zero or more `Move`, then exactly one `Up` or
//! `Cancel`. Secondary pointers landing or lifting mid-interaction are
//! reported as `Move` samples whose pointer list grows or shrinks; `Up` is the
//! last pointer leaving the surface.

use kurbo::Point;
use smallvec::SmallVec;

/// Positions of every active pointer, primary first.
pub type PointerList = SmallVec<[Point; 2]>;

/// Phase of a pointer sample within one interaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The first pointer touched down.
    Down,
    /// One or more pointers moved, or the set of pointers changed.
    Move,
    /// The last pointer lifted.
    Up,
    /// The interaction was interrupted (for example, stolen by the system).
    Cancel,
}

/// A single pointer sample, timestamped in milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Phase of this sample.
    pub phase: PointerPhase,
    /// Positions of the active pointers, primary first. Never empty when
    /// built through the constructors.
    pub pointers: PointerList,
    /// Monotonic host timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerSample {
    /// Creates a single-pointer sample.
    #[must_use]
    pub fn new(phase: PointerPhase, position: Point, time_ms: u64) -> Self {
        let mut pointers = PointerList::new();
        pointers.push(position);
        Self {
            phase,
            pointers,
            time_ms,
        }
    }

    /// Creates a sample with several active pointers; the first is primary.
    #[must_use]
    pub fn with_pointers(
        phase: PointerPhase,
        pointers: impl IntoIterator<Item = Point>,
        time_ms: u64,
    ) -> Self {
        Self {
            phase,
            pointers: pointers.into_iter().collect(),
            time_ms,
        }
    }

    /// Single-pointer `Down` sample.
    #[must_use]
    pub fn down(position: Point, time_ms: u64) -> Self {
        Self::new(PointerPhase::Down, position, time_ms)
    }

    /// Single-pointer `Move` sample.
    #[must_use]
    pub fn moved(position: Point, time_ms: u64) -> Self {
        Self::new(PointerPhase::Move, position, time_ms)
    }

    /// `Up` sample for the last pointer.
    #[must_use]
    pub fn up(position: Point, time_ms: u64) -> Self {
        Self::new(PointerPhase::Up, position, time_ms)
    }

    /// `Cancel` sample.
    #[must_use]
    pub fn cancel(position: Point, time_ms: u64) -> Self {
        Self::new(PointerPhase::Cancel, position, time_ms)
    }

    /// Position of the primary pointer.
    #[must_use]
    pub fn position(&self) -> Point {
        self.pointers.first().copied().unwrap_or(Point::ZERO)
    }

    /// Number of active pointers.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` if more than one pointer is active.
    #[must_use]
    pub fn is_multi_pointer(&self) -> bool {
        self.pointers.len() > 1
    }
}
