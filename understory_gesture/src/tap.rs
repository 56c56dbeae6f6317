// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap, double-tap and long-press recognition.
//!
//! [`TapRecognizer`] observes the same sample stream as the drag math without
//! influencing it. An interaction qualifies as a tap candidate while every
//! sample stays closer than `slop` to the `Down` position and only one pointer is
//! active.
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::pointer::PointerSample;
//! use understory_gesture::tap::{TapConfig, TapEvent, TapRecognizer};
//!
//! let mut taps = TapRecognizer::new(TapConfig::default());
//! taps.observe(&PointerSample::down(Point::new(10.0, 10.0), 1_000));
//! taps.observe(&PointerSample::moved(Point::new(12.0, 11.0), 1_020));
//! let event = taps.observe(&PointerSample::up(Point::new(12.0, 11.0), 1_050));
//! assert_eq!(event, Some(TapEvent::Tap(Point::new(10.0, 10.0))));
//! ```

use kurbo::Point;

use crate::pointer::{PointerPhase, PointerSample};

/// Default movement tolerance for taps, in logical pixels.
pub const DEFAULT_TAP_SLOP: f64 = 8.0;
/// Default maximum gap between a tap's `Up` and the next `Down` for a double tap.
pub const DEFAULT_DOUBLE_TAP_TIMEOUT_MS: u64 = 300;
/// Default hold time after which a stationary press becomes a long press.
pub const DEFAULT_LONG_PRESS_TIMEOUT_MS: u64 = 400;

/// Spatial and temporal tolerances for [`TapRecognizer`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TapConfig {
    /// Maximum distance from the `Down` position, in logical pixels.
    pub slop: f64,
    /// Maximum time between a tap's `Up` and the next `Down`.
    pub double_tap_timeout_ms: u64,
    /// Minimum stationary hold for a long press.
    pub long_press_timeout_ms: u64,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            slop: DEFAULT_TAP_SLOP,
            double_tap_timeout_ms: DEFAULT_DOUBLE_TAP_TIMEOUT_MS,
            long_press_timeout_ms: DEFAULT_LONG_PRESS_TIMEOUT_MS,
        }
    }
}

/// A recognized tap-family gesture, carrying the `Down` position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TapEvent {
    /// A short press that stayed within slop.
    Tap(Point),
    /// A tap that followed a previous tap closely in time and space.
    DoubleTap(Point),
    /// A stationary press held past the long-press timeout.
    LongPress(Point),
}

#[derive(Copy, Clone, Debug)]
struct Press {
    at: Point,
    time_ms: u64,
    qualified: bool,
    long_press_reported: bool,
}

/// Read-only tap recognizer. See the [module docs](self).
#[derive(Clone, Debug)]
pub struct TapRecognizer {
    config: TapConfig,
    press: Option<Press>,
    last_tap: Option<(Point, u64)>,
}

impl TapRecognizer {
    /// Creates a recognizer with the given tolerances.
    #[must_use]
    pub fn new(config: TapConfig) -> Self {
        Self {
            config,
            press: None,
            last_tap: None,
        }
    }

    /// The configured tolerances.
    #[must_use]
    pub fn config(&self) -> &TapConfig {
        &self.config
    }

    fn within_slop(&self, a: Point, b: Point) -> bool {
        (b - a).hypot2() < self.config.slop * self.config.slop
    }

    /// Feeds one sample; returns an event when one is recognized.
    ///
    /// `Tap`/`DoubleTap` are reported on `Up`. `LongPress` is reported on `Up`
    /// unless [`TapRecognizer::poll`] already reported it during the hold.
    pub fn observe(&mut self, sample: &PointerSample) -> Option<TapEvent> {
        match sample.phase {
            PointerPhase::Down => {
                self.press = Some(Press {
                    at: sample.position(),
                    time_ms: sample.time_ms,
                    qualified: !sample.is_multi_pointer(),
                    long_press_reported: false,
                });
                None
            }
            PointerPhase::Move => {
                let disqualify = self.press.is_some_and(|press| {
                    sample.is_multi_pointer() || !self.within_slop(press.at, sample.position())
                });
                if let Some(press) = self.press.as_mut()
                    && disqualify
                {
                    press.qualified = false;
                }
                None
            }
            PointerPhase::Up => {
                let press = self.press.take()?;
                if !press.qualified || !self.within_slop(press.at, sample.position()) {
                    self.last_tap = None;
                    return None;
                }
                let held = sample.time_ms.saturating_sub(press.time_ms);
                if held >= self.config.long_press_timeout_ms {
                    self.last_tap = None;
                    return (!press.long_press_reported).then_some(TapEvent::LongPress(press.at));
                }
                let is_double = self.last_tap.is_some_and(|(at, up_ms)| {
                    press.time_ms.saturating_sub(up_ms) <= self.config.double_tap_timeout_ms
                        && self.within_slop(at, press.at)
                });
                if is_double {
                    self.last_tap = None;
                    Some(TapEvent::DoubleTap(press.at))
                } else {
                    self.last_tap = Some((press.at, sample.time_ms));
                    Some(TapEvent::Tap(press.at))
                }
            }
            PointerPhase::Cancel => {
                self.press = None;
                self.last_tap = None;
                None
            }
        }
    }

    /// Reports a long press once the current press has been held, still
    /// qualified, for the long-press timeout.
    pub fn poll(&mut self, now_ms: u64) -> Option<TapEvent> {
        let timeout = self.config.long_press_timeout_ms;
        let press = self.press.as_mut()?;
        if press.qualified
            && !press.long_press_reported
            && now_ms.saturating_sub(press.time_ms) >= timeout
        {
            press.long_press_reported = true;
            return Some(TapEvent::LongPress(press.at));
        }
        None
    }

    /// Returns `true` while a press is in progress and still a tap candidate.
    #[must_use]
    pub fn is_candidate(&self) -> bool {
        self.press.is_some_and(|press| press.qualified)
    }
}

impl Default for TapRecognizer {
    fn default() -> Self {
        Self::new(TapConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap_at(taps: &mut TapRecognizer, at: Point, down_ms: u64, up_ms: u64) -> Option<TapEvent> {
        taps.observe(&PointerSample::down(at, down_ms));
        taps.observe(&PointerSample::up(at, up_ms))
    }

    #[test]
    fn short_stationary_press_is_a_tap() {
        let mut taps = TapRecognizer::default();
        let at = Point::new(5.0, 5.0);
        assert_eq!(tap_at(&mut taps, at, 0, 80), Some(TapEvent::Tap(at)));
    }

    #[test]
    fn movement_beyond_slop_disqualifies() {
        let mut taps = TapRecognizer::default();
        taps.observe(&PointerSample::down(Point::new(0.0, 0.0), 0));
        taps.observe(&PointerSample::moved(Point::new(0.0, 30.0), 10));
        // Coming back inside slop does not requalify the press.
        taps.observe(&PointerSample::moved(Point::new(0.0, 1.0), 20));
        assert!(!taps.is_candidate());
        assert_eq!(taps.observe(&PointerSample::up(Point::new(0.0, 1.0), 30)), None);
    }

    #[test]
    fn movement_within_slop_still_taps() {
        let mut taps = TapRecognizer::default();
        taps.observe(&PointerSample::down(Point::new(0.0, 0.0), 0));
        taps.observe(&PointerSample::moved(Point::new(3.0, 4.0), 10));
        assert_eq!(
            taps.observe(&PointerSample::up(Point::new(3.0, 4.0), 20)),
            Some(TapEvent::Tap(Point::ZERO))
        );
    }

    #[test]
    fn movement_of_exactly_slop_disqualifies() {
        let mut taps = TapRecognizer::default();
        taps.observe(&PointerSample::down(Point::ZERO, 0));
        taps.observe(&PointerSample::moved(Point::new(0.0, DEFAULT_TAP_SLOP), 10));
        assert!(!taps.is_candidate());
        assert_eq!(
            taps.observe(&PointerSample::up(Point::new(0.0, DEFAULT_TAP_SLOP), 20)),
            None
        );
    }

    #[test]
    fn second_pointer_disqualifies() {
        let mut taps = TapRecognizer::default();
        taps.observe(&PointerSample::down(Point::ZERO, 0));
        taps.observe(&PointerSample::with_pointers(
            PointerPhase::Move,
            [Point::ZERO, Point::new(100.0, 100.0)],
            10,
        ));
        assert_eq!(taps.observe(&PointerSample::up(Point::ZERO, 20)), None);
    }

    #[test]
    fn quick_second_tap_is_a_double_tap() {
        let mut taps = TapRecognizer::default();
        let at = Point::new(50.0, 50.0);
        assert_eq!(tap_at(&mut taps, at, 0, 50), Some(TapEvent::Tap(at)));
        let near = Point::new(52.0, 51.0);
        assert_eq!(tap_at(&mut taps, near, 200, 240), Some(TapEvent::DoubleTap(near)));
        // A third tap starts a new sequence.
        assert_eq!(tap_at(&mut taps, near, 300, 320), Some(TapEvent::Tap(near)));
    }

    #[test]
    fn slow_second_tap_is_a_new_tap() {
        let mut taps = TapRecognizer::default();
        let at = Point::new(50.0, 50.0);
        tap_at(&mut taps, at, 0, 50);
        assert_eq!(tap_at(&mut taps, at, 400, 450), Some(TapEvent::Tap(at)));
    }

    #[test]
    fn held_press_is_a_long_press() {
        let mut taps = TapRecognizer::default();
        let at = Point::new(1.0, 2.0);
        assert_eq!(tap_at(&mut taps, at, 0, 450), Some(TapEvent::LongPress(at)));
    }

    #[test]
    fn poll_reports_long_press_once() {
        let mut taps = TapRecognizer::default();
        let at = Point::new(1.0, 2.0);
        taps.observe(&PointerSample::down(at, 0));
        assert_eq!(taps.poll(100), None);
        assert_eq!(taps.poll(400), Some(TapEvent::LongPress(at)));
        assert_eq!(taps.poll(500), None);
        assert_eq!(taps.observe(&PointerSample::up(at, 600)), None);
    }

    #[test]
    fn cancel_forgets_the_press() {
        let mut taps = TapRecognizer::default();
        taps.observe(&PointerSample::down(Point::ZERO, 0));
        taps.observe(&PointerSample::cancel(Point::ZERO, 10));
        assert!(!taps.is_candidate());
        assert_eq!(taps.observe(&PointerSample::up(Point::ZERO, 20)), None);
    }
}
