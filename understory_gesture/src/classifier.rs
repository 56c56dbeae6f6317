// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction classification: turns one `Down, Move*, Up|Cancel` stream into
//! drag deltas, pass-through decisions and a release outcome.
//!
//! The classifier never touches the transform itself. It reads the live
//! translation and the content layer's zoom through [`GestureContext`] and
//! reports what the caller should do with each sample.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_gesture::classifier::{Gesture, GestureClassifier, GestureContext, Release};
//! use understory_gesture::intercept::InterceptionPolicy;
//! use understory_gesture::pointer::PointerSample;
//!
//! let mut classifier = GestureClassifier::new(InterceptionPolicy::single());
//! let mut ctx = GestureContext::default();
//!
//! assert_eq!(
//!     classifier.handle(&PointerSample::down(Point::new(100.0, 100.0), 0), ctx),
//!     Gesture::Pressed { exclusive: true }
//! );
//! let moved = classifier.handle(&PointerSample::moved(Point::new(100.0, 160.0), 16), ctx);
//! assert_eq!(moved, Gesture::Drag { delta: Vec2::new(0.0, 60.0) });
//! ctx.translation = Vec2::new(0.0, 60.0);
//!
//! let up = classifier.handle(&PointerSample::up(Point::new(100.0, 160.0), 32), ctx);
//! assert_eq!(up, Gesture::Released { release: Release::Settle, tap: None });
//! ```

use kurbo::Vec2;

use crate::drag::DragTracker;
use crate::intercept::{InterceptionPolicy, MoveFacts, Ownership};
use crate::pointer::{PointerPhase, PointerSample};
use crate::tap::{TapConfig, TapEvent, TapRecognizer};

/// Container state the classifier needs to decide ownership.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureContext {
    /// Live drag translation.
    pub translation: Vec2,
    /// Zoom of the inner content layer (`1.0` when not zoomed).
    pub content_scale: f64,
}

impl Default for GestureContext {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            content_scale: 1.0,
        }
    }
}

/// How an interaction ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Release {
    /// A tap or double tap: dismiss right away.
    Tap,
    /// Any other `Up`: compare the live translation against the dismiss
    /// threshold.
    Settle,
    /// The interaction was cancelled: restore.
    Cancel,
    /// The interaction belonged to the paging ancestor. `offset` is the total
    /// travel of the primary pointer.
    Ancestor {
        /// Travel from the `Down` position to the `Up` position.
        offset: Vec2,
    },
}

/// What the caller should do with a sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Gesture {
    /// An interaction started.
    Pressed {
        /// The host should stop ancestors (such as a pager) from intercepting
        /// the rest of the interaction.
        exclusive: bool,
    },
    /// Move the content by `delta`.
    Drag {
        /// Movement since the previous sample.
        delta: Vec2,
    },
    /// Forward the raw sample to the inner content layer.
    PassToChild,
    /// Forward the sample to the paging ancestor.
    PassToAncestor {
        /// Travel from the `Down` position.
        offset: Vec2,
    },
    /// The interaction ended.
    Released {
        /// The outcome.
        release: Release,
        /// The tap-family event recognized on this `Up`, if any.
        tap: Option<TapEvent>,
    },
    /// The sample arrived outside an interaction.
    Ignored,
}

/// Per-interaction classifier. See the [module docs](self).
#[derive(Clone, Debug)]
pub struct GestureClassifier {
    policy: InterceptionPolicy,
    drag: DragTracker,
    taps: TapRecognizer,
    ancestor_locked: bool,
}

impl GestureClassifier {
    /// Creates a classifier with default tap tolerances.
    #[must_use]
    pub fn new(policy: InterceptionPolicy) -> Self {
        Self::with_tap_config(policy, TapConfig::default())
    }

    /// Creates a classifier with custom tap tolerances.
    #[must_use]
    pub fn with_tap_config(policy: InterceptionPolicy, tap: TapConfig) -> Self {
        Self {
            policy,
            drag: DragTracker::default(),
            taps: TapRecognizer::new(tap),
            ancestor_locked: false,
        }
    }

    /// The ownership policy in use.
    #[must_use]
    pub fn policy(&self) -> InterceptionPolicy {
        self.policy
    }

    /// Returns `true` while an interaction is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.drag.is_tracking()
    }

    /// Returns `true` if the current interaction has been handed to the
    /// paging ancestor.
    #[must_use]
    pub fn is_ancestor_locked(&self) -> bool {
        self.ancestor_locked
    }

    /// Classifies one sample.
    pub fn handle(&mut self, sample: &PointerSample, ctx: GestureContext) -> Gesture {
        let tap = self.taps.observe(sample);
        let pos = sample.position();
        match sample.phase {
            PointerPhase::Down => {
                self.drag.start(pos);
                self.ancestor_locked = false;
                Gesture::Pressed {
                    exclusive: self.policy.request_exclusive_on_down(),
                }
            }
            PointerPhase::Move => {
                if !self.drag.is_tracking() {
                    return Gesture::Ignored;
                }
                let first_move = self.drag.is_first_move();
                let offset = self.drag.total_offset(pos).unwrap_or(Vec2::ZERO);
                let delta = self.drag.update(pos).unwrap_or(Vec2::ZERO);
                if self.ancestor_locked {
                    return Gesture::PassToAncestor { offset };
                }
                let facts = MoveFacts {
                    first_move,
                    dy: offset.y,
                    pointer_count: sample.pointer_count(),
                    content_scale: ctx.content_scale,
                    translation: ctx.translation,
                };
                match self.policy.on_move(&facts) {
                    Ownership::Container => Gesture::Drag { delta },
                    Ownership::Child => Gesture::PassToChild,
                    Ownership::Ancestor => {
                        self.ancestor_locked = true;
                        Gesture::PassToAncestor { offset }
                    }
                }
            }
            PointerPhase::Up => {
                if !self.drag.is_tracking() {
                    return Gesture::Ignored;
                }
                let offset = self.drag.total_offset(pos).unwrap_or(Vec2::ZERO);
                let release = if self.ancestor_locked {
                    Release::Ancestor { offset }
                } else if matches!(tap, Some(TapEvent::Tap(_) | TapEvent::DoubleTap(_))) {
                    Release::Tap
                } else {
                    Release::Settle
                };
                self.finish();
                Gesture::Released { release, tap }
            }
            PointerPhase::Cancel => {
                if !self.drag.is_tracking() {
                    return Gesture::Ignored;
                }
                self.finish();
                Gesture::Released {
                    release: Release::Cancel,
                    tap: None,
                }
            }
        }
    }

    /// Reports a long press while the pointer is held still.
    pub fn poll(&mut self, now_ms: u64) -> Option<TapEvent> {
        self.taps.poll(now_ms)
    }

    /// Drops the current interaction without producing a release.
    pub fn reset(&mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        self.drag.end();
        self.ancestor_locked = false;
    }
}
