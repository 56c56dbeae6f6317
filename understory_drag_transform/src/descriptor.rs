// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::layout::LayoutMetrics;
use crate::mapper::LayoutNotReady;

/// Where a piece of content visually originates, and how to load it.
///
/// `R` is an opaque reference understood only by the content-loading
/// collaborator (a URL, a path, an asset id, ...). Descriptors are created
/// once from the host's launch parameters and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct DragDescriptor<R> {
    origin: Rect,
    content: R,
    thumbnail: Option<R>,
}

impl<R> DragDescriptor<R> {
    /// Creates a descriptor for content that opens from `origin`.
    #[must_use]
    pub fn new(origin: Rect, content: R) -> Self {
        Self {
            origin,
            content,
            thumbnail: None,
        }
    }

    /// Adds a lower-resolution reference shown while the content loads.
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: R) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// The screen rect the content opens from and returns to.
    #[must_use]
    pub fn origin(&self) -> Rect {
        self.origin
    }

    /// The reference handed to the content loader.
    #[must_use]
    pub fn content(&self) -> &R {
        &self.content
    }

    /// The optional thumbnail reference.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&R> {
        self.thumbnail.as_ref()
    }

    /// Measures [`LayoutMetrics`] for this descriptor inside `container`.
    pub fn measure(
        &self,
        container: Size,
        dismiss_fraction: f64,
    ) -> Result<LayoutMetrics, LayoutNotReady> {
        LayoutMetrics::with_dismiss_fraction(container, self.origin, dismiss_fraction)
    }
}
