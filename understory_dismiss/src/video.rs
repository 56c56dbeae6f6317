// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Video content layer with looping playback.

use alloc::rc::Rc;
use core::fmt;

use kurbo::Size;
use understory_drag_transform::DragDescriptor;

use crate::content::{ContentLayer, ContentLoader, LoadState, SurfaceParts};

/// Playback state of a [`VideoLayer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Playback {
    /// Nothing playing; the initial and post-detach state.
    #[default]
    Stopped,
    /// Playing, looping at the end.
    Playing,
    /// Paused because the layer is hidden.
    Paused,
}

/// Shows a video that plays in a loop once ready.
///
/// Playback starts when the content becomes ready while the layer is visible,
/// pauses while it is hidden, and stops on detach.
pub struct VideoLayer<R> {
    loader: Rc<dyn ContentLoader<R>>,
    content: R,
    thumbnail: Option<R>,
    size: Option<Size>,
    state: LoadState,
    visible: bool,
    playback: Playback,
}

impl<R: fmt::Debug> fmt::Debug for VideoLayer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoLayer")
            .field("content", &self.content)
            .field("thumbnail", &self.thumbnail)
            .field("size", &self.size)
            .field("state", &self.state)
            .field("visible", &self.visible)
            .field("playback", &self.playback)
            .finish_non_exhaustive()
    }
}

impl<R: Clone> VideoLayer<R> {
    /// Creates a detached layer for `descriptor`.
    #[must_use]
    pub fn new(descriptor: &DragDescriptor<R>, loader: Rc<dyn ContentLoader<R>>) -> Self {
        Self {
            loader,
            content: descriptor.content().clone(),
            thumbnail: descriptor.thumbnail().cloned(),
            size: None,
            state: LoadState::Idle,
            visible: false,
            playback: Playback::Stopped,
        }
    }
}

impl<R> VideoLayer<R> {
    /// Current playback state.
    #[must_use]
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Videos always loop.
    #[must_use]
    pub fn is_looping(&self) -> bool {
        true
    }

    fn is_playable(&self) -> bool {
        matches!(self.state, LoadState::Ready | LoadState::Revealed)
    }

    fn sync_playback(&mut self) {
        self.playback = match (self.is_playable(), self.visible) {
            (false, _) => Playback::Stopped,
            (true, true) => Playback::Playing,
            (true, false) => Playback::Paused,
        };
    }
}

impl<R> ContentLayer for VideoLayer<R> {
    fn attach(&mut self, size: Size) {
        if self.size.replace(size).is_none() {
            self.state = LoadState::Loading;
            self.loader.load(&self.content, self.thumbnail.as_ref());
        }
    }

    fn detach(&mut self) {
        if self.size.take().is_some() {
            self.loader.cancel(&self.content);
        }
        self.state = LoadState::Idle;
        self.visible = false;
        self.playback = Playback::Stopped;
    }

    fn is_attached(&self) -> bool {
        self.size.is_some()
    }

    fn on_visibility_hint_changed(&mut self, visible: bool) {
        self.visible = visible;
        self.sync_playback();
    }

    fn on_load_state(&mut self, state: LoadState) {
        if self.size.is_some() {
            self.state = state;
            self.sync_playback();
        }
    }

    fn load_state(&self) -> LoadState {
        self.state
    }

    fn parts(&self) -> SurfaceParts {
        SurfaceParts::for_state(self.state, self.thumbnail.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Rect;

    #[derive(Default)]
    struct Streams {
        cancels: RefCell<Vec<&'static str>>,
    }

    impl ContentLoader<&'static str> for Streams {
        fn load(&self, _content: &&'static str, _thumbnail: Option<&&'static str>) {}
        fn cancel(&self, content: &&'static str) {
            self.cancels.borrow_mut().push(*content);
        }
    }

    fn layer() -> (Rc<Streams>, VideoLayer<&'static str>) {
        let streams = Rc::new(Streams::default());
        let descriptor = DragDescriptor::new(Rect::new(0.0, 0.0, 64.0, 36.0), "clip.mp4");
        let video = VideoLayer::new(&descriptor, streams.clone());
        (streams, video)
    }

    #[test]
    fn plays_when_ready_and_visible() {
        let (_, mut video) = layer();
        video.attach(Size::new(400.0, 800.0));
        video.on_visibility_hint_changed(true);
        assert_eq!(video.playback(), Playback::Stopped);
        assert_eq!(video.parts(), SurfaceParts::PROGRESS);

        video.on_load_state(LoadState::Ready);
        assert_eq!(video.playback(), Playback::Playing);
        assert!(video.is_looping());
    }

    #[test]
    fn pauses_when_hidden_and_resumes() {
        let (_, mut video) = layer();
        video.attach(Size::new(400.0, 800.0));
        video.on_visibility_hint_changed(true);
        video.on_load_state(LoadState::Revealed);
        video.on_visibility_hint_changed(false);
        assert_eq!(video.playback(), Playback::Paused);
        video.on_visibility_hint_changed(true);
        assert_eq!(video.playback(), Playback::Playing);
    }

    #[test]
    fn detach_stops_and_releases_stream() {
        let (streams, mut video) = layer();
        video.attach(Size::new(400.0, 800.0));
        video.on_visibility_hint_changed(true);
        video.on_load_state(LoadState::Ready);
        video.detach();
        assert_eq!(video.playback(), Playback::Stopped);
        assert_eq!(*streams.cancels.borrow(), ["clip.mp4"]);
    }

    #[test]
    fn failure_stops_playback() {
        let (_, mut video) = layer();
        video.attach(Size::new(400.0, 800.0));
        video.on_visibility_hint_changed(true);
        video.on_load_state(LoadState::Failed);
        assert_eq!(video.playback(), Playback::Stopped);
        assert_eq!(video.parts(), SurfaceParts::FAILURE);
    }
}
