// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated launch parameters: one descriptor, or a carousel plus selection.

use alloc::vec;
use alloc::vec::Vec;

use understory_drag_transform::DragDescriptor;

use crate::error::DismissError;

/// What the viewer opens with.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchParams<R> {
    items: Vec<DragDescriptor<R>>,
    selected: usize,
}

impl<R> LaunchParams<R> {
    /// A single-item viewer. No paging.
    #[must_use]
    pub fn single(item: DragDescriptor<R>) -> Self {
        Self {
            items: vec![item],
            selected: 0,
        }
    }

    /// A multi-item viewer opened at `selected`.
    pub fn carousel(items: Vec<DragDescriptor<R>>, selected: usize) -> Result<Self, DismissError> {
        if items.is_empty() {
            return Err(DismissError::EmptyLaunch);
        }
        if selected >= items.len() {
            return Err(DismissError::IndexOutOfRange {
                index: selected,
                len: items.len(),
            });
        }
        Ok(Self { items, selected })
    }

    /// All descriptors, in page order.
    #[must_use]
    pub fn items(&self) -> &[DragDescriptor<R>] {
        &self.items
    }

    /// Initially selected index.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: empty launches are rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the viewer pages between several items.
    #[must_use]
    pub fn is_paging(&self) -> bool {
        self.items.len() > 1
    }

    /// Checks `index` against the launched items.
    pub fn check_index(&self, index: usize) -> Result<(), DismissError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(DismissError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    fn item(n: u32) -> DragDescriptor<u32> {
        DragDescriptor::new(Rect::new(0.0, 0.0, 10.0, 10.0), n)
    }

    #[test]
    fn single_does_not_page() {
        let launch = LaunchParams::single(item(1));
        assert_eq!(launch.len(), 1);
        assert_eq!(launch.selected(), 0);
        assert!(!launch.is_paging());
    }

    #[test]
    fn empty_carousel_is_rejected() {
        assert_eq!(
            LaunchParams::<u32>::carousel(Vec::new(), 0),
            Err(DismissError::EmptyLaunch)
        );
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        assert_eq!(
            LaunchParams::carousel(vec![item(1), item(2)], 2),
            Err(DismissError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn carousel_pages() {
        let launch = LaunchParams::carousel(vec![item(1), item(2), item(3)], 1).unwrap();
        assert!(launch.is_paging());
        assert_eq!(*launch.items()[launch.selected()].content(), 2);
        assert!(launch.check_index(2).is_ok());
        assert!(launch.check_index(3).is_err());
    }
}
