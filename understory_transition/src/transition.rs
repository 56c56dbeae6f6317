// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single finite interpolation between two drag transforms.

use understory_drag_transform::{DragTransform, LayoutMetrics};

use crate::easing::Easing;

/// Default duration shared by enter, exit and restore.
pub const DEFAULT_DURATION_MS: u64 = 300;

/// Tolerance below which a transition's endpoints are considered equal.
pub const SETTLE_EPSILON: f64 = 1e-6;

/// Duration and easing of a transition.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionTiming {
    /// Total duration in milliseconds. Zero completes on the first tick.
    pub duration_ms: u64,
    /// Easing applied to linear progress.
    pub easing: Easing,
}

impl TransitionTiming {
    /// Creates a timing.
    #[must_use]
    pub const fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// Default enter timing: 300 ms, ease in-out.
    #[must_use]
    pub const fn enter() -> Self {
        Self::new(DEFAULT_DURATION_MS, Easing::EaseInOut)
    }

    /// Default exit timing: 300 ms, decelerate.
    #[must_use]
    pub const fn exit() -> Self {
        Self::new(DEFAULT_DURATION_MS, Easing::Decelerate)
    }

    /// Default restore timing: 300 ms, ease in-out.
    #[must_use]
    pub const fn restore() -> Self {
        Self::new(DEFAULT_DURATION_MS, Easing::EaseInOut)
    }
}

/// Which outcome a transition animates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Origin transform to identity, when the viewer opens.
    Enter,
    /// Live transform to the origin transform, when the viewer closes.
    Exit,
    /// Live transform back to identity, after a drag that did not dismiss.
    Restore,
}

/// A fixed start/end pair plus timing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    kind: TransitionKind,
    from: DragTransform,
    to: DragTransform,
    timing: TransitionTiming,
}

impl Transition {
    /// Creates an arbitrary transition.
    #[must_use]
    pub fn new(
        kind: TransitionKind,
        from: DragTransform,
        to: DragTransform,
        timing: TransitionTiming,
    ) -> Self {
        Self {
            kind,
            from,
            to,
            timing,
        }
    }

    /// Origin transform to identity.
    #[must_use]
    pub fn enter(metrics: &LayoutMetrics, timing: TransitionTiming) -> Self {
        Self::new(
            TransitionKind::Enter,
            metrics.origin_transform(),
            DragTransform::IDENTITY,
            timing,
        )
    }

    /// `from` to the origin transform.
    #[must_use]
    pub fn exit(from: DragTransform, metrics: &LayoutMetrics, timing: TransitionTiming) -> Self {
        Self::new(TransitionKind::Exit, from, metrics.origin_transform(), timing)
    }

    /// `from` to identity.
    #[must_use]
    pub fn restore(from: DragTransform, timing: TransitionTiming) -> Self {
        Self::new(TransitionKind::Restore, from, DragTransform::IDENTITY, timing)
    }

    /// The outcome this transition animates.
    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Start tuple.
    #[must_use]
    pub fn from(&self) -> DragTransform {
        self.from
    }

    /// End tuple.
    #[must_use]
    pub fn to(&self) -> DragTransform {
        self.to
    }

    /// Timing.
    #[must_use]
    pub fn timing(&self) -> TransitionTiming {
        self.timing
    }

    /// Returns `true` when the transition has nothing to animate: zero
    /// duration, or start and end already equal.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.timing.duration_ms == 0 || self.from.approx_eq(&self.to, SETTLE_EPSILON)
    }

    /// Linear progress after `elapsed_ms`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: u64) -> f64 {
        if self.is_degenerate() || elapsed_ms >= self.timing.duration_ms {
            return 1.0;
        }
        elapsed_ms as f64 / self.timing.duration_ms as f64
    }

    /// Transform after `elapsed_ms`. Exactly [`Transition::to`] once complete.
    #[must_use]
    pub fn sample(&self, elapsed_ms: u64) -> DragTransform {
        let t = self.progress(elapsed_ms);
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp(&self.to, self.timing.easing.apply(t))
    }
}
