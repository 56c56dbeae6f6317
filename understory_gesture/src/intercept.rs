// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-sample ownership decisions between the container, its content layer,
//! and an enclosing pager.
//!
//! On `Down` the container always asks ancestors not to intercept, so the
//! interaction cannot be stolen mid-drag. Each `Move` then decides who handles
//! the sample:
//!
//! 1. Content zoomed (`content_scale != 1`): the content layer pans/zooms.
//! 2. First move of the interaction, paging enabled, moving up or level, and a
//!    horizontal offset already present with no vertical offset: the pager owns
//!    the rest of the interaction.
//! 3. Several pointers: the content layer handles the pinch.
//! 4. Otherwise: the container drags.

use kurbo::Vec2;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Tolerance used when checking whether content is at its unzoomed scale.
pub const ZOOM_EPSILON: f64 = 1e-6;

/// Who handles a pointer sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// The drag container consumes the sample.
    Container,
    /// The sample is forwarded, uninterpreted, to the inner content layer.
    Child,
    /// The sample (and the rest of the interaction) goes to the paging ancestor.
    Ancestor,
}

/// Facts about a `Move` sample that ownership depends on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveFacts {
    /// `true` for the first `Move` of the interaction.
    pub first_move: bool,
    /// Vertical offset of the primary pointer from the `Down` position.
    pub dy: f64,
    /// Number of active pointers.
    pub pointer_count: usize,
    /// Current zoom of the inner content layer.
    pub content_scale: f64,
    /// Live drag translation of the container.
    pub translation: Vec2,
}

/// Returns `true` if `scale` is the content's resting scale.
#[must_use]
pub fn is_unzoomed(scale: f64) -> bool {
    (scale - 1.0).abs() < ZOOM_EPSILON
}

/// Ownership rules. See the [module docs](self).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InterceptionPolicy {
    /// Whether an enclosing pager exists (multi-item viewers).
    pub paging: bool,
}

impl InterceptionPolicy {
    /// Policy for a single-item viewer.
    #[must_use]
    pub fn single() -> Self {
        Self { paging: false }
    }

    /// Policy for a viewer hosted inside a horizontal pager.
    #[must_use]
    pub fn paging() -> Self {
        Self { paging: true }
    }

    /// On `Down`: whether to ask ancestors not to intercept this interaction.
    /// Surfaced as [`Gesture::Pressed`](crate::classifier::Gesture::Pressed).
    #[must_use]
    pub fn request_exclusive_on_down(&self) -> bool {
        true
    }

    /// Returns `true` if the first-move facts indicate a page swipe already in
    /// progress.
    #[must_use]
    pub fn is_page_swipe(&self, facts: &MoveFacts) -> bool {
        self.paging
            && facts.first_move
            && facts.dy <= 0.0
            && facts.translation.y == 0.0
            && facts.translation.x != 0.0
    }

    /// Decides who handles a `Move` sample.
    #[must_use]
    pub fn on_move(&self, facts: &MoveFacts) -> Ownership {
        if !is_unzoomed(facts.content_scale) {
            Ownership::Child
        } else if self.is_page_swipe(facts) {
            Ownership::Ancestor
        } else if facts.pointer_count > 1 {
            Ownership::Child
        } else {
            Ownership::Container
        }
    }
}
