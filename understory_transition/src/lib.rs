// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_transition --heading-base-level=0

//! Understory Transition: time-driven transitions of a drag transform.
//!
//! A drag-to-dismiss viewer animates its `(translation, scale, alpha)` tuple in
//! exactly three situations:
//!
//! - **Enter**: from the origin transform to identity when the viewer opens.
//! - **Exit**: from the live transform to the origin transform on dismissal.
//! - **Restore**: from the live transform back to identity after a drag that
//!   did not cross the dismiss threshold.
//!
//! [`Transition`] captures one of these as a fixed start/end pair plus a
//! [`TransitionTiming`] (duration and [`Easing`]). [`TransitionDriver`] runs at
//! most one at a time against a host-provided millisecond clock: each
//! [`TransitionDriver::tick`] yields a [`Frame`], the final one carrying a
//! single-shot [`Completion`]. Starting a new transition supersedes the running
//! one, whose completion is then never yielded.
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_drag_transform::{DragTransform, LayoutMetrics};
//! use understory_transition::{Transition, TransitionDriver, TransitionKind, TransitionTiming};
//!
//! let metrics = LayoutMetrics::new(
//!     Size::new(500.0, 1000.0),
//!     Rect::new(50.0, 100.0, 150.0, 200.0),
//! )
//! .unwrap();
//!
//! let mut driver = TransitionDriver::new();
//! driver.start(Transition::enter(&metrics, TransitionTiming::enter()), 0);
//!
//! let first = driver.tick(0).unwrap();
//! assert_eq!(first.transform, metrics.origin_transform());
//!
//! let last = driver.tick(300).unwrap();
//! assert_eq!(last.transform, DragTransform::IDENTITY);
//! assert_eq!(last.completion.map(|c| c.kind), Some(TransitionKind::Enter));
//! ```
//!
//! There is no internal clock or scheduler: the host calls `tick` from its
//! frame callback.
//!
//! This crate is `no_std`.

#![no_std]

mod driver;
mod easing;
mod transition;

pub use driver::{Completion, Frame, Ticket, TransitionDriver};
pub use easing::Easing;
pub use transition::{
    DEFAULT_DURATION_MS, SETTLE_EPSILON, Transition, TransitionKind, TransitionTiming,
};
