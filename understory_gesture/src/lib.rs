// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: pointer classification for drag-to-dismiss containers.
//!
//! A drag-to-dismiss container shares its pointer stream with two neighbors:
//! the content layer inside it (which wants pinch and pan when zoomed) and an
//! optional horizontal pager around it. This crate decides, sample by sample,
//! who owns the stream and what the container should do with it.
//!
//! - [`pointer`]: timestamped samples with every active pointer position.
//! - [`drag`]: anchor, per-sample delta and first-move tracking.
//! - [`tap`]: read-only tap, double-tap and long-press recognition.
//! - [`intercept`]: ownership rules between container, child and ancestor.
//! - [`classifier`]: the per-interaction state machine combining the above.
//!
//! ## Design
//!
//! Like the rest of Understory, these are small state machines that accept
//! pre-computed inputs and return decisions. Nothing here knows about the
//! transform math, animation, or rendering; the container feeds the live
//! translation and content zoom in through
//! [`classifier::GestureContext`] and applies the returned
//! [`classifier::Gesture`].
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_gesture::classifier::{Gesture, GestureClassifier, GestureContext, Release};
//! use understory_gesture::intercept::InterceptionPolicy;
//! use understory_gesture::pointer::PointerSample;
//!
//! let mut classifier = GestureClassifier::new(InterceptionPolicy::paging());
//! let ctx = GestureContext::default();
//!
//! classifier.handle(&PointerSample::down(Point::new(50.0, 50.0), 0), ctx);
//! let up = classifier.handle(&PointerSample::up(Point::new(51.0, 50.0), 40), ctx);
//! assert!(matches!(up, Gesture::Released { release: Release::Tap, .. }));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod classifier;
pub mod drag;
pub mod intercept;
pub mod pointer;
pub mod tap;
