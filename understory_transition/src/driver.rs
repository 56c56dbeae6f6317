// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives at most one transition at a time against a host clock.

use understory_drag_transform::DragTransform;

use crate::transition::{Transition, TransitionKind};

/// Identifies one started transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw ticket number; increases with every start.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Yielded exactly once, on the tick that reaches a transition's end tuple.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// The ticket returned by [`TransitionDriver::start`].
    pub ticket: Ticket,
    /// The transition that finished.
    pub kind: TransitionKind,
}

/// One animation frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Which transition produced this frame.
    pub kind: TransitionKind,
    /// The transform to render.
    pub transform: DragTransform,
    /// Present on the final frame only.
    pub completion: Option<Completion>,
}

#[derive(Copy, Clone, Debug)]
struct Active {
    ticket: Ticket,
    transition: Transition,
    started_ms: u64,
}

/// Single-slot transition runner.
///
/// Starting a transition supersedes the running one: the superseded
/// transition produces no further frames and its completion is never yielded.
#[derive(Clone, Debug, Default)]
pub struct TransitionDriver {
    active: Option<Active>,
    next_ticket: u64,
}

impl TransitionDriver {
    /// Creates an idle driver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `transition` at `now_ms`, superseding any running one.
    pub fn start(&mut self, transition: Transition, now_ms: u64) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.active = Some(Active {
            ticket,
            transition,
            started_ms: now_ms,
        });
        ticket
    }

    /// Advances to `now_ms`. Returns `None` when nothing is running.
    pub fn tick(&mut self, now_ms: u64) -> Option<Frame> {
        let active = self.active?;
        let elapsed = now_ms.saturating_sub(active.started_ms);
        let transition = &active.transition;
        let transform = transition.sample(elapsed);
        let completion = if transition.progress(elapsed) >= 1.0 {
            self.active = None;
            Some(Completion {
                ticket: active.ticket,
                kind: transition.kind(),
            })
        } else {
            None
        };
        Some(Frame {
            kind: transition.kind(),
            transform,
            completion,
        })
    }

    /// Stops the running transition without completing it.
    pub fn cancel(&mut self) -> Option<TransitionKind> {
        self.active.take().map(|a| a.transition.kind())
    }

    /// Returns `true` while a transition is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Kind of the running transition.
    #[must_use]
    pub fn active_kind(&self) -> Option<TransitionKind> {
        self.active.map(|a| a.transition.kind())
    }

    /// Ticket of the running transition.
    #[must_use]
    pub fn active_ticket(&self) -> Option<Ticket> {
        self.active.map(|a| a.ticket)
    }
}
