// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors returned when building or steering a viewer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DismissError {
    /// A carousel was launched without any item.
    EmptyLaunch,
    /// An item index was outside the launched items.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of launched items.
        len: usize,
    },
}

impl fmt::Display for DismissError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLaunch => write!(f, "viewer launched with no items"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "item index {index} out of range for {len} items")
            }
        }
    }
}

impl core::error::Error for DismissError {}
