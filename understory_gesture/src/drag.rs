// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: anchor point, per-sample deltas, and the first-move flag.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::start`] with the `Down` position.
//! 2) On each `Move`, call [`DragTracker::update`] to get the delta since the
//!    previous sample. [`DragTracker::is_first_move`] tells whether the next
//!    update will be the first of the interaction.
//! 3) [`DragTracker::total_offset`] gives the offset from the anchor.
//! 4) Call [`DragTracker::end`] on `Up`/`Cancel`.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_gesture::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! drag.start(Point::new(10.0, 20.0));
//! assert!(drag.is_first_move());
//!
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert!(!drag.is_first_move());
//! assert_eq!(drag.update(Point::new(15.0, 40.0)), Some(Vec2::new(0.0, 15.0)));
//! assert_eq!(drag.total_offset(Point::new(15.0, 40.0)), Some(Vec2::new(5.0, 20.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pointer interaction's anchor and last sample.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    /// Position of the `Down` sample.
    pub anchor: Option<Point>,
    /// Last recorded primary pointer position.
    pub last_pos: Option<Point>,
    moves: u32,
}

impl DragTracker {
    /// Starts tracking a new interaction at `pos`, discarding any previous one.
    pub fn start(&mut self, pos: Point) {
        self.anchor = Some(pos);
        self.last_pos = Some(pos);
        self.moves = 0;
    }

    /// Records a move to `pos`, returning the delta since the previous sample.
    ///
    /// Returns `None` when no interaction is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.anchor?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        self.moves = self.moves.saturating_add(1);
        delta
    }

    /// Offset from the anchor to `current_pos`.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.anchor.map(|anchor| current_pos - anchor)
    }

    /// Returns `true` while an interaction is active and has not moved yet.
    pub fn is_first_move(&self) -> bool {
        self.anchor.is_some() && self.moves == 0
    }

    /// Number of move samples recorded in the current interaction.
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// Ends the current interaction and resets state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while an interaction is active.
    pub fn is_tracking(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_idle() {
        let drag = DragTracker::default();
        assert!(!drag.is_tracking());
        assert!(!drag.is_first_move());
        assert_eq!(drag.move_count(), 0);
    }

    #[test]
    fn start_sets_anchor_and_first_move() {
        let mut drag = DragTracker::default();
        let start = Point::new(10.0, 20.0);
        drag.start(start);

        assert_eq!(drag.anchor, Some(start));
        assert_eq!(drag.anchor, drag.last_pos);
        assert!(drag.is_first_move());
    }

    #[test]
    fn update_returns_incremental_deltas() {
        let mut drag = DragTracker::default();
        drag.start(Point::new(0.0, 0.0));

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.update(Point::new(10.0, 10.0)), Some(Vec2::new(2.0, 3.0)));
        assert_eq!(drag.move_count(), 3);
    }

    #[test]
    fn update_without_interaction_is_ignored() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert!(drag.last_pos.is_none());
        assert_eq!(drag.move_count(), 0);
    }

    #[test]
    fn first_move_flag_clears_after_one_update() {
        let mut drag = DragTracker::default();
        drag.start(Point::new(1.0, 1.0));
        drag.update(Point::new(1.0, 0.0));
        assert!(!drag.is_first_move());
    }

    #[test]
    fn negative_movement_deltas() {
        let mut drag = DragTracker::default();
        drag.start(Point::new(100.0, 100.0));
        assert_eq!(drag.update(Point::new(90.0, 85.0)), Some(Vec2::new(-10.0, -15.0)));
    }

    #[test]
    fn total_offset_is_measured_from_anchor() {
        let mut drag = DragTracker::default();
        drag.start(Point::new(10.0, 20.0));
        drag.update(Point::new(15.0, 25.0));
        assert_eq!(
            drag.total_offset(Point::new(20.0, 35.0)),
            Some(Vec2::new(10.0, 15.0))
        );
    }

    #[test]
    fn end_resets_everything() {
        let mut drag = DragTracker::default();
        drag.start(Point::new(10.0, 20.0));
        drag.update(Point::new(15.0, 25.0));
        drag.end();

        assert!(!drag.is_tracking());
        assert!(drag.last_pos.is_none());
        assert_eq!(drag.total_offset(Point::ZERO), None);
    }

    #[test]
    fn start_overwrites_previous_interaction() {
        let mut drag = DragTracker::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(10.0, 10.0));

        drag.start(Point::new(50.0, 60.0));
        assert!(drag.is_first_move());
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }
}
