// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content layers and the loading collaborator they talk to.
//!
//! A content layer is the surface presenting one item inside the container.
//! It never decodes or fetches anything itself: on attach it asks a shared
//! [`ContentLoader`] to start loading, and the host reports progress back
//! through [`Container::on_load_signal`](crate::Container::on_load_signal),
//! which the container turns into [`LoadState`] updates.
//!
//! While loading, a layer shows a thumbnail (when one exists) and a progress
//! indicator. When the content is ready it is shown underneath the
//! placeholders, which are removed after a short reveal delay so the swap does
//! not flicker. A failure replaces everything with a failure surface.

use alloc::string::String;

use kurbo::Size;
use understory_gesture::pointer::PointerSample;

/// Starts and cancels content loads. Implemented by the host.
///
/// Completion is reported asynchronously through
/// [`Container::on_load_signal`](crate::Container::on_load_signal).
pub trait ContentLoader<R> {
    /// Begins loading `content`, with an optional low-resolution `thumbnail`.
    fn load(&self, content: &R, thumbnail: Option<&R>);

    /// Abandons any in-flight load of `content`.
    fn cancel(&self, content: &R);
}

/// Load progress reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadSignal {
    /// Loading started (for example, a cache miss went to the network).
    Started,
    /// The content is decoded and displayable.
    Ready,
    /// The content could not be loaded.
    Failed(String),
}

/// Lifecycle of one layer's content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum LoadState {
    /// Not attached, or attached before any load began.
    #[default]
    Idle,
    /// Waiting for the loader.
    Loading,
    /// Content displayable; placeholders still shown.
    Ready,
    /// Placeholders removed.
    Revealed,
    /// Loading failed.
    Failed,
}

bitflags::bitflags! {
    /// Sub-surfaces a content layer currently shows.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SurfaceParts: u8 {
        /// Low-resolution placeholder.
        const THUMBNAIL = 0b0000_0001;
        /// Loading indicator.
        const PROGRESS  = 0b0000_0010;
        /// The full content.
        const CONTENT   = 0b0000_0100;
        /// Inline failure message.
        const FAILURE   = 0b0000_1000;
    }
}

impl SurfaceParts {
    /// Parts shown for `state`.
    #[must_use]
    pub fn for_state(state: LoadState, has_thumbnail: bool) -> Self {
        let placeholders = if has_thumbnail {
            Self::THUMBNAIL | Self::PROGRESS
        } else {
            Self::PROGRESS
        };
        match state {
            LoadState::Idle => Self::empty(),
            LoadState::Loading => placeholders,
            LoadState::Ready => placeholders | Self::CONTENT,
            LoadState::Revealed => Self::CONTENT,
            LoadState::Failed => Self::FAILURE,
        }
    }
}

/// A surface presenting one item. See the [module docs](self).
pub trait ContentLayer {
    /// Attaches the layer to a surface of `size`. Starts loading the first
    /// time; later calls only update the size.
    fn attach(&mut self, size: Size);

    /// Detaches the layer, cancelling loads and releasing playback.
    fn detach(&mut self);

    /// Returns `true` while attached.
    fn is_attached(&self) -> bool;

    /// The layer became the visible page (`true`) or stopped being it.
    fn on_visibility_hint_changed(&mut self, visible: bool);

    /// Applies a load-state change decided by the container.
    fn on_load_state(&mut self, state: LoadState);

    /// Current load state.
    fn load_state(&self) -> LoadState;

    /// Sub-surfaces currently shown.
    fn parts(&self) -> SurfaceParts;

    /// Inner zoom; `1.0` when the content is not zoomed.
    fn content_scale(&self) -> f64 {
        1.0
    }

    /// Receives a pointer sample the container relinquished.
    fn on_passthrough(&mut self, sample: &PointerSample) {
        let _ = sample;
    }
}
