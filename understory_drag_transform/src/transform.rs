// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size, Vec2};
use peniko::Color;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::layout::LayoutMetrics;
use crate::mapper::{LayoutNotReady, alpha_channel};

/// The four-field transform applied to a content layer and its backdrop.
///
/// Translation and scale are in logical pixels and unit scale respectively;
/// `background_alpha` is the 8-bit opacity of the black backdrop behind the
/// content.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragTransform {
    /// Offset of the content from its resting position.
    pub translation: Vec2,
    /// Uniform scale about the container center.
    pub scale: f64,
    /// Backdrop opacity in `[0, 255]`.
    pub background_alpha: u8,
}

impl DragTransform {
    /// The resting transform: no offset, full size, opaque backdrop.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: 1.0,
        background_alpha: u8::MAX,
    };

    /// Creates a transform from its components.
    #[must_use]
    pub const fn new(translation: Vec2, scale: f64, background_alpha: u8) -> Self {
        Self {
            translation,
            scale,
            background_alpha,
        }
    }

    /// Interpolates every field toward `target` by `t` (not clamped).
    ///
    /// The alpha channel is interpolated in floating point and rounded half-up.
    #[must_use]
    pub fn lerp(&self, target: &Self, t: f64) -> Self {
        let alpha = f64::from(self.background_alpha)
            + (f64::from(target.background_alpha) - f64::from(self.background_alpha)) * t;
        Self {
            translation: self.translation.lerp(target.translation, t),
            scale: self.scale + (target.scale - self.scale) * t,
            background_alpha: alpha_channel(alpha),
        }
    }

    /// Returns `true` if both transforms agree within `epsilon` on the
    /// floating-point fields and exactly on alpha.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.translation.x - other.translation.x).abs() <= epsilon
            && (self.translation.y - other.translation.y).abs() <= epsilon
            && (self.scale - other.scale).abs() <= epsilon
            && self.background_alpha == other.background_alpha
    }

    /// Returns `true` if this is exactly the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Affine placing the content: scale about the container center, then
    /// translate.
    #[must_use]
    pub fn to_affine(&self, container: Size) -> Affine {
        let center = container.to_rect().center();
        Affine::translate(self.translation) * Affine::scale_about(self.scale, center)
    }

    /// Backdrop color for this transform: black at `background_alpha`.
    #[must_use]
    pub fn scrim_color(&self) -> Color {
        Color::from_rgba8(0, 0, 0, self.background_alpha)
    }
}

impl Default for DragTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The live transform, with a revision counter that advances on every change.
///
/// There are exactly two ways to write it:
/// - [`DragTransformState::apply_drag`] during a live drag, where scale and
///   alpha are always derived from the vertical offset through the mapper.
/// - [`DragTransformState::apply_frame`] during an animation, where all four
///   fields come from one interpolation step.
#[derive(Clone, Debug, Default)]
pub struct DragTransformState {
    current: DragTransform,
    revision: u64,
}

impl DragTransformState {
    /// Creates a state resting at the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current transform.
    #[must_use]
    pub fn current(&self) -> DragTransform {
        self.current
    }

    /// Current translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.current.translation
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.current.scale
    }

    /// Current backdrop alpha.
    #[must_use]
    pub fn background_alpha(&self) -> u8 {
        self.current.background_alpha
    }

    /// Monotonic change counter; unchanged writes do not advance it.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Moves the content to `translation` and derives scale and alpha from its
    /// vertical component.
    ///
    /// Returns `Ok(true)` if anything changed. On [`LayoutNotReady`] the state
    /// is left untouched.
    pub fn apply_drag(
        &mut self,
        translation: Vec2,
        metrics: &LayoutMetrics,
    ) -> Result<bool, LayoutNotReady> {
        let scale = metrics.scale_for(translation.y)?;
        let background_alpha = metrics.alpha_for(translation.y)?;
        Ok(self.set(DragTransform {
            translation,
            scale,
            background_alpha,
        }))
    }

    /// Offsets the content by `delta` from its current translation.
    ///
    /// See [`DragTransformState::apply_drag`].
    pub fn drag_by(&mut self, delta: Vec2, metrics: &LayoutMetrics) -> Result<bool, LayoutNotReady> {
        self.apply_drag(self.current.translation + delta, metrics)
    }

    /// Writes one animation frame. Returns `true` if anything changed.
    pub fn apply_frame(&mut self, frame: DragTransform) -> bool {
        self.set(frame)
    }

    fn set(&mut self, next: DragTransform) -> bool {
        if next == self.current {
            return false;
        }
        self.current = next;
        self.revision += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::*;

    fn metrics() -> LayoutMetrics {
        LayoutMetrics::new(
            Size::new(500.0, 1000.0),
            Rect::new(10.0, 20.0, 110.0, 120.0),
        )
        .unwrap()
    }

    #[test]
    fn drag_derives_scale_and_alpha_from_vertical_offset() {
        let mut state = DragTransformState::new();
        assert!(state.apply_drag(Vec2::new(40.0, 500.0), &metrics()).unwrap());

        assert_eq!(state.translation(), Vec2::new(40.0, 500.0));
        assert_eq!(state.scale(), 0.5);
        assert_eq!(state.background_alpha(), 128);
        assert_eq!(state.revision(), 1);
    }

    #[test]
    fn horizontal_offset_does_not_change_scale() {
        let mut state = DragTransformState::new();
        state.apply_drag(Vec2::new(-250.0, 0.0), &metrics()).unwrap();
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.background_alpha(), 255);
    }

    #[test]
    fn drag_by_accumulates_deltas() {
        let mut state = DragTransformState::new();
        let m = metrics();
        state.drag_by(Vec2::new(0.0, 300.0), &m).unwrap();
        state.drag_by(Vec2::new(5.0, 200.0), &m).unwrap();
        assert_eq!(state.translation(), Vec2::new(5.0, 500.0));
        assert_eq!(state.scale(), 0.5);
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn unchanged_write_keeps_revision() {
        let mut state = DragTransformState::new();
        assert!(!state.apply_frame(DragTransform::IDENTITY));
        assert!(!state.apply_drag(Vec2::ZERO, &metrics()).unwrap());
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn layout_not_ready_leaves_state_untouched() {
        let mut state = DragTransformState::new();
        let unready = LayoutMetrics::unmeasured();
        assert!(state.apply_drag(Vec2::new(0.0, 10.0), &unready).is_err());
        assert!(state.current().is_identity());
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn lerp_hits_endpoints_and_rounds_alpha_half_up() {
        let from = DragTransform::new(Vec2::new(0.0, 100.0), 0.5, 0);
        let to = DragTransform::IDENTITY;
        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);
        // 0 + 255 * 0.5 = 127.5, which rounds to 128.
        assert_eq!(from.lerp(&to, 0.5).background_alpha, 128);
        assert_eq!(from.lerp(&to, 0.5).scale, 0.75);
    }

    #[test]
    fn affine_scales_about_center_then_translates() {
        let container = Size::new(500.0, 1000.0);
        let t = DragTransform::new(Vec2::new(10.0, 20.0), 0.5, 255);
        let affine = t.to_affine(container);
        // The center stays put under the scale and then moves by the translation.
        assert_eq!(affine * Point::new(250.0, 500.0), Point::new(260.0, 520.0));
        assert_eq!(affine * Point::new(0.0, 0.0), Point::new(135.0, 270.0));
    }

    #[test]
    fn scrim_color_tracks_alpha() {
        let t = DragTransform::new(Vec2::ZERO, 1.0, 128);
        let rgba = t.scrim_color().to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0, 0, 0, 128));
    }
}
