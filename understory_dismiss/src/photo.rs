// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Photo content layer with inner pinch zoom and pan.

use alloc::rc::Rc;
use core::fmt;

use kurbo::{Point, Size, Vec2};
use understory_drag_transform::DragDescriptor;
use understory_gesture::pointer::{PointerPhase, PointerSample};

use crate::content::{ContentLayer, ContentLoader, LoadState, SurfaceParts};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

#[derive(Copy, Clone, Debug)]
struct Pinch {
    distance: f64,
    zoom: f64,
}

/// Shows a photo; pinch zooms it between `1` and `max_zoom`.
///
/// While zoomed, single-pointer pass-through samples pan the photo within its
/// zoomed bounds. Zoom and pan reset on detach.
pub struct PhotoLayer<R> {
    loader: Rc<dyn ContentLoader<R>>,
    content: R,
    thumbnail: Option<R>,
    size: Option<Size>,
    state: LoadState,
    visible: bool,
    max_zoom: f64,
    zoom: f64,
    pan: Vec2,
    pinch: Option<Pinch>,
    last_pan: Option<Point>,
}

impl<R: fmt::Debug> fmt::Debug for PhotoLayer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoLayer")
            .field("content", &self.content)
            .field("thumbnail", &self.thumbnail)
            .field("size", &self.size)
            .field("state", &self.state)
            .field("visible", &self.visible)
            .field("max_zoom", &self.max_zoom)
            .field("zoom", &self.zoom)
            .field("pan", &self.pan)
            .finish_non_exhaustive()
    }
}

impl<R: Clone> PhotoLayer<R> {
    /// Creates a detached layer for `descriptor`.
    #[must_use]
    pub fn new(
        descriptor: &DragDescriptor<R>,
        loader: Rc<dyn ContentLoader<R>>,
        max_zoom: f64,
    ) -> Self {
        Self {
            loader,
            content: descriptor.content().clone(),
            thumbnail: descriptor.thumbnail().cloned(),
            size: None,
            state: LoadState::Idle,
            visible: false,
            max_zoom: max_zoom.max(1.0),
            zoom: 1.0,
            pan: Vec2::ZERO,
            pinch: None,
            last_pan: None,
        }
    }
}

impl<R> PhotoLayer<R> {
    /// Current pan offset of the zoomed photo.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns `true` while this layer is the visible page.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn clamp_pan(&mut self) {
        let Some(size) = self.size else {
            self.pan = Vec2::ZERO;
            return;
        };
        let slack_x = size.width * (self.zoom - 1.0) * 0.5;
        let slack_y = size.height * (self.zoom - 1.0) * 0.5;
        self.pan = Vec2::new(
            self.pan.x.clamp(-slack_x, slack_x),
            self.pan.y.clamp(-slack_y, slack_y),
        );
    }

    fn reset_zoom(&mut self) {
        self.zoom = 1.0;
        self.pan = Vec2::ZERO;
        self.pinch = None;
        self.last_pan = None;
    }
}

impl<R> ContentLayer for PhotoLayer<R> {
    fn attach(&mut self, size: Size) {
        let first = self.size.is_none();
        self.size = Some(size);
        if first {
            self.state = LoadState::Loading;
            self.loader.load(&self.content, self.thumbnail.as_ref());
        } else {
            self.clamp_pan();
        }
    }

    fn detach(&mut self) {
        if self.size.take().is_some() && self.state == LoadState::Loading {
            self.loader.cancel(&self.content);
        }
        self.state = LoadState::Idle;
        self.visible = false;
        self.reset_zoom();
    }

    fn is_attached(&self) -> bool {
        self.size.is_some()
    }

    fn on_visibility_hint_changed(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.reset_zoom();
        }
    }

    fn on_load_state(&mut self, state: LoadState) {
        if self.size.is_some() {
            self.state = state;
        }
    }

    fn load_state(&self) -> LoadState {
        self.state
    }

    fn parts(&self) -> SurfaceParts {
        SurfaceParts::for_state(self.state, self.thumbnail.is_some())
    }

    fn content_scale(&self) -> f64 {
        self.zoom
    }

    fn on_passthrough(&mut self, sample: &PointerSample) {
        if matches!(sample.phase, PointerPhase::Up | PointerPhase::Cancel) {
            self.pinch = None;
            self.last_pan = None;
            return;
        }
        if let [a, b, ..] = sample.pointers.as_slice() {
            self.last_pan = None;
            let distance = (*b - *a).hypot();
            match self.pinch {
                Some(pinch) if pinch.distance > 0.0 => {
                    self.zoom = (pinch.zoom * distance / pinch.distance).clamp(1.0, self.max_zoom);
                    self.clamp_pan();
                }
                _ => {
                    self.pinch = Some(Pinch {
                        distance,
                        zoom: self.zoom,
                    });
                }
            }
            return;
        }
        self.pinch = None;
        let pos = sample.position();
        if let Some(last) = self.last_pan {
            self.pan += pos - last;
            self.clamp_pan();
        }
        self.last_pan = Some(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Rect;

    #[derive(Default)]
    struct Log {
        loads: RefCell<Vec<(u32, Option<u32>)>>,
        cancels: RefCell<Vec<u32>>,
    }

    impl ContentLoader<u32> for Log {
        fn load(&self, content: &u32, thumbnail: Option<&u32>) {
            self.loads.borrow_mut().push((*content, thumbnail.copied()));
        }
        fn cancel(&self, content: &u32) {
            self.cancels.borrow_mut().push(*content);
        }
    }

    fn layer() -> (Rc<Log>, PhotoLayer<u32>) {
        let log = Rc::new(Log::default());
        let descriptor =
            DragDescriptor::new(Rect::new(0.0, 0.0, 50.0, 50.0), 7).with_thumbnail(70);
        let photo = PhotoLayer::new(&descriptor, log.clone(), 3.0);
        (log, photo)
    }

    fn pinch(a: Point, b: Point) -> PointerSample {
        PointerSample::with_pointers(PointerPhase::Move, [a, b], 0)
    }

    #[test]
    fn attach_loads_once_and_shows_placeholders() {
        let (log, mut photo) = layer();
        photo.attach(Size::new(400.0, 800.0));
        photo.attach(Size::new(800.0, 400.0));
        assert_eq!(*log.loads.borrow(), [(7, Some(70))]);
        assert_eq!(
            photo.parts(),
            SurfaceParts::THUMBNAIL | SurfaceParts::PROGRESS
        );
    }

    #[test]
    fn detach_while_loading_cancels() {
        let (log, mut photo) = layer();
        photo.attach(Size::new(400.0, 800.0));
        photo.detach();
        assert_eq!(*log.cancels.borrow(), [7]);
        assert!(!photo.is_attached());
        assert!(photo.parts().is_empty());
    }

    #[test]
    fn pinch_zoom_is_clamped() {
        let (_, mut photo) = layer();
        photo.attach(Size::new(400.0, 800.0));
        photo.on_passthrough(&pinch(Point::new(100.0, 100.0), Point::new(200.0, 100.0)));
        photo.on_passthrough(&pinch(Point::new(50.0, 100.0), Point::new(250.0, 100.0)));
        assert_eq!(photo.content_scale(), 2.0);
        photo.on_passthrough(&pinch(Point::new(0.0, 100.0), Point::new(1000.0, 100.0)));
        assert_eq!(photo.content_scale(), 3.0);
        photo.on_passthrough(&pinch(Point::new(100.0, 100.0), Point::new(110.0, 100.0)));
        assert_eq!(photo.content_scale(), 1.0);
    }

    #[test]
    fn zoomed_photo_pans_within_bounds() {
        let (_, mut photo) = layer();
        photo.attach(Size::new(400.0, 800.0));
        photo.on_passthrough(&pinch(Point::new(100.0, 100.0), Point::new(200.0, 100.0)));
        photo.on_passthrough(&pinch(Point::new(50.0, 100.0), Point::new(250.0, 100.0)));
        photo.on_passthrough(&PointerSample::moved(Point::new(100.0, 100.0), 0));
        photo.on_passthrough(&PointerSample::moved(Point::new(130.0, 90.0), 0));
        assert_eq!(photo.pan(), Vec2::new(30.0, -10.0));
        // Zoom 2 on a 400 wide surface leaves 200px of horizontal slack.
        photo.on_passthrough(&PointerSample::moved(Point::new(900.0, 90.0), 0));
        assert_eq!(photo.pan(), Vec2::new(200.0, -10.0));
    }

    #[test]
    fn detach_resets_zoom() {
        let (_, mut photo) = layer();
        photo.attach(Size::new(400.0, 800.0));
        photo.on_passthrough(&pinch(Point::new(100.0, 100.0), Point::new(200.0, 100.0)));
        photo.on_passthrough(&pinch(Point::new(50.0, 100.0), Point::new(250.0, 100.0)));
        photo.detach();
        assert_eq!(photo.content_scale(), 1.0);
        assert_eq!(photo.pan(), Vec2::ZERO);
    }
}
