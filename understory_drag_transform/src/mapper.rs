// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure mapping from a vertical drag offset to scale and background alpha.
//!
//! Both functions are monotonic non-increasing in `|dy|` and saturate once
//! `|dy|` reaches the container height (or earlier, for the scale floor).

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`, `floor`

/// Error returned when transform math is attempted before the container has
/// a usable measured size.
///
/// Callers are expected to skip the update and retry after the next layout
/// pass; this is never a fatal condition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutNotReady {
    /// The measured extent that was rejected.
    pub extent: f64,
}

impl fmt::Display for LayoutNotReady {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "container is not laid out yet (measured extent {})",
            self.extent
        )
    }
}

impl core::error::Error for LayoutNotReady {}

/// Checks that `extent` can be used as a divisor for the mapping.
pub(crate) fn check_extent(extent: f64) -> Result<f64, LayoutNotReady> {
    if extent.is_finite() && extent > 0.0 {
        Ok(extent)
    } else {
        Err(LayoutNotReady { extent })
    }
}

/// Remaining fraction `1 - |dy| / height`, unclamped.
fn remaining(dy: f64, height: f64) -> f64 {
    1.0 - dy.abs() / height
}

/// Rounds a non-negative channel value to the nearest integer, ties upward.
///
/// `127.5` becomes `128`. Negative inputs only occur past the saturation point
/// and are clamped to zero by the caller.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Converts an unclamped alpha value into the `[0, 255]` channel.
#[expect(
    clippy::cast_possible_truncation,
    reason = "value is rounded and clamped into 0..=255 first"
)]
pub(crate) fn alpha_channel(value: f64) -> u8 {
    round_half_up(value).clamp(0.0, 255.0) as u8
}

/// Scale for a vertical drag offset.
///
/// `clamp(1 - |dy| / height, min_scale, 1)`. A `min_scale` above `1.0` is
/// treated as `1.0` so the clamp range is never inverted.
///
/// ```
/// use understory_drag_transform::scale_for;
///
/// assert_eq!(scale_for(500.0, 0.2, 1000.0).unwrap(), 0.5);
/// assert_eq!(scale_for(-2000.0, 0.2, 1000.0).unwrap(), 0.2);
/// assert!(scale_for(10.0, 0.2, 0.0).is_err());
/// ```
pub fn scale_for(dy: f64, min_scale: f64, height: f64) -> Result<f64, LayoutNotReady> {
    let height = check_extent(height)?;
    let floor = min_scale.min(1.0);
    Ok(remaining(dy, height).clamp(floor, 1.0))
}

/// Background alpha for a vertical drag offset.
///
/// `clamp(round(255 * (1 - |dy| / height)), 0, 255)`, rounding ties upward.
///
/// ```
/// use understory_drag_transform::alpha_for;
///
/// assert_eq!(alpha_for(0.0, 1000.0).unwrap(), 255);
/// assert_eq!(alpha_for(500.0, 1000.0).unwrap(), 128);
/// assert_eq!(alpha_for(1500.0, 1000.0).unwrap(), 0);
/// ```
pub fn alpha_for(dy: f64, height: f64) -> Result<u8, LayoutNotReady> {
    let height = check_extent(height)?;
    Ok(alpha_channel(255.0 * remaining(dy, height)))
}
