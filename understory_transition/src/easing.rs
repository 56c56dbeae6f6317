// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves mapping linear progress in `[0, 1]` to eased progress.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// An easing curve.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// `t`.
    Linear,
    /// `1 - (1 - t)^2`: fast start, slowing into the end.
    Decelerate,
    /// Cubic bezier `(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Cubic bezier `(0.4, 0, 0.2, 1)`.
    FastOutSlowIn,
    /// A custom cubic bezier through `(0, 0)`, `(x1, y1)`, `(x2, y2)`, `(1, 1)`.
    CubicBezier {
        /// First control point x, expected in `[0, 1]`.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, expected in `[0, 1]`.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Easing {
    /// Maps linear progress `t` to eased progress. `t` is clamped to `[0, 1]`
    /// and the endpoints map exactly to `0` and `1`.
    #[must_use]
    pub fn apply(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match *self {
            Self::Linear => t,
            Self::Decelerate => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f64, b: f64, c: f64, t: f64| ((a * t + b) * t + c) * t;
    let slope = |a: f64, b: f64, c: f64, t: f64| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson for the parameter whose x is `x`, bisection if it stalls.
    let mut t = x;
    let mut solved = false;
    for _ in 0..8 {
        let err = sample(ax, bx, cx, t) - x;
        if err.abs() < EPSILON {
            solved = true;
            break;
        }
        let d = slope(ax, bx, cx, t);
        if d.abs() < EPSILON {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }
    if !solved {
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..32 {
            let err = sample(ax, bx, cx, t) - x;
            if err.abs() < EPSILON {
                break;
            }
            if err > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::Decelerate,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
        Easing::CubicBezier {
            x1: 0.25,
            y1: 0.1,
            x2: 0.25,
            y2: 1.0,
        },
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
            assert_eq!(easing.apply(-3.0), 0.0, "{easing:?} below range");
            assert_eq!(easing.apply(7.0), 1.0, "{easing:?} above range");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(f64::from(i) / 100.0);
                assert!(v + 1e-9 >= prev, "{easing:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn decelerate_matches_closed_form() {
        assert!((Easing::Decelerate.apply(0.5) - 0.75).abs() < 1e-12, "1 - 0.25");
        assert!((Easing::Decelerate.apply(0.1) - 0.19).abs() < 1e-12, "1 - 0.81");
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let mid = Easing::EaseInOut.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-4, "midpoint was {mid}");
        let a = Easing::EaseInOut.apply(0.2);
        let b = Easing::EaseInOut.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-4, "{a} + {b}");
    }

    #[test]
    fn fast_out_slow_in_leads_linear() {
        assert!(
            Easing::FastOutSlowIn.apply(0.5) > 0.5,
            "fast-out-slow-in should be ahead of linear at the midpoint"
        );
    }
}
