// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag_transform --heading-base-level=0

//! Understory Drag Transform: the transform model behind drag-to-dismiss viewers.
//!
//! A drag-to-dismiss viewer couples a vertical drag to three visual effects at
//! once: the content follows the pointer, shrinks, and the black backdrop fades
//! out. This crate holds the headless pieces of that model:
//!
//! - [`scale_for`] / [`alpha_for`]: pure mapping from a vertical offset to
//!   scale and backdrop alpha.
//! - [`DragTransform`]: the `(translation, scale, background_alpha)` tuple,
//!   with interpolation and conversion to a [`kurbo::Affine`].
//! - [`DragTransformState`]: the live transform with its single-writer entry
//!   points for drags and animation frames.
//! - [`LayoutMetrics`]: per-layout derived values (`min_scale`, dismiss
//!   threshold, origin transform).
//! - [`DragDescriptor`]: the immutable origin rect and content reference.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use understory_drag_transform::{DragTransformState, LayoutMetrics};
//!
//! // 500x1000 container, content opened from a 100px wide thumbnail.
//! let metrics = LayoutMetrics::new(
//!     Size::new(500.0, 1000.0),
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//! )
//! .unwrap();
//! assert_eq!(metrics.min_scale(), 0.2);
//!
//! let mut state = DragTransformState::new();
//! state.apply_drag(Vec2::new(0.0, 500.0), &metrics).unwrap();
//! assert_eq!(state.scale(), 0.5);
//! assert_eq!(state.background_alpha(), 128);
//! assert!(metrics.exceeds_dismiss_threshold(state.translation().y));
//! ```
//!
//! Alpha is rounded half-up (`127.5` becomes `128`).
//!
//! This crate is `no_std`.

#![no_std]

mod descriptor;
mod layout;
mod mapper;
mod transform;

pub use descriptor::DragDescriptor;
pub use layout::{DEFAULT_DISMISS_FRACTION, LayoutMetrics};
pub use mapper::{LayoutNotReady, alpha_for, round_half_up, scale_for};
pub use transform::{DragTransform, DragTransformState};
