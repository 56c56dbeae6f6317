// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::mapper::{self, LayoutNotReady, check_extent};
use crate::transform::DragTransform;

/// Default fraction of the container height a release must exceed to dismiss.
pub const DEFAULT_DISMISS_FRACTION: f64 = 0.25;

/// Values derived once per layout pass from the container size and the
/// selected origin rect.
///
/// - `min_scale = origin.width / container.width`
/// - `max_dismiss_translation_y = container.height * dismiss_fraction`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutMetrics {
    container: Size,
    origin: Rect,
    min_scale: f64,
    max_dismiss_translation_y: f64,
}

impl LayoutMetrics {
    /// Measures the metrics for `container` with the default dismiss fraction.
    pub fn new(container: Size, origin: Rect) -> Result<Self, LayoutNotReady> {
        Self::with_dismiss_fraction(container, origin, DEFAULT_DISMISS_FRACTION)
    }

    /// Measures the metrics with a custom dismiss fraction of the height.
    pub fn with_dismiss_fraction(
        container: Size,
        origin: Rect,
        dismiss_fraction: f64,
    ) -> Result<Self, LayoutNotReady> {
        let width = check_extent(container.width)?;
        let height = check_extent(container.height)?;
        Ok(Self {
            container,
            origin,
            min_scale: origin.width() / width,
            max_dismiss_translation_y: height * dismiss_fraction,
        })
    }

    /// Placeholder metrics for a container that has not been laid out.
    ///
    /// Every mapping through these metrics returns [`LayoutNotReady`].
    #[must_use]
    pub fn unmeasured() -> Self {
        Self {
            container: Size::ZERO,
            origin: Rect::ZERO,
            min_scale: 1.0,
            max_dismiss_translation_y: 0.0,
        }
    }

    /// Returns `true` if the container has a usable size.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        check_extent(self.container.width).is_ok() && check_extent(self.container.height).is_ok()
    }

    /// The measured container size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// The origin rect the metrics were derived for.
    #[must_use]
    pub fn origin(&self) -> Rect {
        self.origin
    }

    /// Smallest scale a drag can shrink the content to.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Vertical offset a release must exceed (in magnitude) to dismiss.
    #[must_use]
    pub fn max_dismiss_translation_y(&self) -> f64 {
        self.max_dismiss_translation_y
    }

    /// Scale for a vertical offset. See [`mapper::scale_for`].
    pub fn scale_for(&self, dy: f64) -> Result<f64, LayoutNotReady> {
        mapper::scale_for(dy, self.min_scale, self.container.height)
    }

    /// Backdrop alpha for a vertical offset. See [`mapper::alpha_for`].
    pub fn alpha_for(&self, dy: f64) -> Result<u8, LayoutNotReady> {
        mapper::alpha_for(dy, self.container.height)
    }

    /// Returns `true` if releasing at `translation_y` should dismiss.
    #[must_use]
    pub fn exceeds_dismiss_threshold(&self, translation_y: f64) -> bool {
        translation_y.abs() > self.max_dismiss_translation_y
    }

    /// The transform that shrinks the content onto the origin rect with a
    /// transparent backdrop.
    ///
    /// The content is scaled about the container center, so the translation is
    /// the offset between the origin center and the container center.
    #[must_use]
    pub fn origin_transform(&self) -> DragTransform {
        let offset = self.origin.center() - self.container.to_rect().center();
        DragTransform::new(offset, self.min_scale, 0)
    }
}
