// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the container tells its host.

use kurbo::Affine;
use peniko::Color;
use understory_drag_transform::DragTransform;

use crate::content::SurfaceParts;
use crate::phase::GesturePhase;

/// Everything the host needs to draw one frame.
#[derive(Copy, Clone, Debug)]
pub struct RenderFrame {
    /// The drag transform.
    pub transform: DragTransform,
    /// [`RenderFrame::transform`] as an affine about the container center.
    pub affine: Affine,
    /// Backdrop color.
    pub scrim: Color,
    /// Selected item index.
    pub selected: usize,
    /// Sub-surfaces the selected layer shows.
    pub parts: SurfaceParts,
    /// Horizontal offset of an in-progress page swipe, `0` otherwise.
    pub page_offset: f64,
    /// Phase at the time of the frame.
    pub phase: GesturePhase,
}

/// Receives frames and lifecycle signals from a [`Container`](crate::Container).
pub trait Host {
    /// Draws a frame.
    fn render(&mut self, frame: &RenderFrame);

    /// The exit transition finished and every layer was detached. Sent once.
    fn on_dismissed(&mut self);

    /// The selected page changed.
    fn on_page_selected(&mut self, index: usize) {
        let _ = index;
    }

    /// Loading item `index` failed.
    fn on_load_failed(&mut self, index: usize, reason: &str) {
        let _ = (index, reason);
    }
}
