// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Interaction phase of a [`Container`](crate::Container).
///
/// ```text
/// Idle ──enter──▶ Entering ──▶ Idle
/// Idle ──drag──▶ Dragging ──release──▶ Restoring ──▶ Idle
///                                  └──▶ Dismissing ──▶ Terminated
/// ```
///
/// A press during `Restoring` cancels the restore and drags from the live
/// transform. Pointer input is ignored while `Entering`, `Dismissing` or
/// `Terminated`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    /// At rest; the initial state.
    #[default]
    Idle,
    /// The enter transition is running.
    Entering,
    /// The container owns a live drag.
    Dragging,
    /// The restore transition is running.
    Restoring,
    /// The exit transition is running.
    Dismissing,
    /// Dismissed; every content layer is detached.
    Terminated,
}

impl GesturePhase {
    /// Returns `true` if pointer input is processed in this phase.
    #[must_use]
    pub fn accepts_input(self) -> bool {
        matches!(self, Self::Idle | Self::Dragging | Self::Restoring)
    }

    /// Returns `true` once the viewer has started closing.
    #[must_use]
    pub fn is_closing(self) -> bool {
        matches!(self, Self::Dismissing | Self::Terminated)
    }
}

impl fmt::Display for GesturePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Entering => "entering",
            Self::Dragging => "dragging",
            Self::Restoring => "restoring",
            Self::Dismissing => "dismissing",
            Self::Terminated => "terminated",
        })
    }
}
