// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag container: composes classification, transform math, transitions,
//! content layers and timers behind a handful of host entry points.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Size, Vec2};
use log::{debug, trace, warn};
use understory_drag_transform::{DragDescriptor, DragTransform, DragTransformState, LayoutMetrics};
use understory_gesture::classifier::{Gesture, GestureClassifier, GestureContext, Release};
use understory_gesture::intercept::InterceptionPolicy;
use understory_gesture::pointer::{PointerPhase, PointerSample};
use understory_gesture::tap::TapEvent;
use understory_transition::{Ticket, Transition, TransitionDriver, TransitionKind};

use crate::config::DismissConfig;
use crate::content::{ContentLayer, LoadSignal, LoadState};
use crate::error::DismissError;
use crate::host::{Host, RenderFrame};
use crate::launch::LaunchParams;
use crate::phase::GesturePhase;
use crate::timers::{Timer, TimerQueue};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Headless drag-to-dismiss viewer.
///
/// `R` is the content reference type understood by the host's loader; `H`
/// receives frames and lifecycle signals. See the [crate docs](crate) for the
/// overall flow.
pub struct Container<R, H> {
    config: DismissConfig,
    launch: LaunchParams<R>,
    layers: Vec<Box<dyn ContentLayer>>,
    host: H,
    selected: usize,
    phase: GesturePhase,
    transform: DragTransformState,
    metrics: LayoutMetrics,
    size: Option<Size>,
    classifier: GestureClassifier,
    driver: TransitionDriver,
    last_advance: Option<(Ticket, u64)>,
    timers: TimerQueue<Timer>,
    enter_pending: bool,
    entered: bool,
    settle_pending: bool,
    page_offset: f64,
}

impl<R, H: fmt::Debug> fmt::Debug for Container<R, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("config", &self.config)
            .field("items", &self.launch.len())
            .field("host", &self.host)
            .field("selected", &self.selected)
            .field("phase", &self.phase)
            .field("transform", &self.transform)
            .field("size", &self.size)
            .field("transition", &self.driver.active_kind())
            .field("settle_pending", &self.settle_pending)
            .field("page_offset", &self.page_offset)
            .finish_non_exhaustive()
    }
}

impl<R, H: Host> Container<R, H> {
    /// Creates a container for `launch`.
    ///
    /// `make_layer` builds the content layer for each launched item, in page
    /// order, and receives `config` for layer tunables such as
    /// [`DismissConfig::max_zoom`]. Nothing is attached or loaded until the
    /// first successful [`Container::layout`].
    pub fn new(
        launch: LaunchParams<R>,
        config: DismissConfig,
        host: H,
        mut make_layer: impl FnMut(
            usize,
            &DragDescriptor<R>,
            &DismissConfig,
        ) -> Box<dyn ContentLayer>,
    ) -> Self {
        let layers = launch
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| make_layer(index, item, &config))
            .collect();
        let policy = if launch.is_paging() {
            InterceptionPolicy::paging()
        } else {
            InterceptionPolicy::single()
        };
        Self {
            classifier: GestureClassifier::with_tap_config(policy, config.tap()),
            selected: launch.selected(),
            config,
            launch,
            layers,
            host,
            phase: GesturePhase::Idle,
            transform: DragTransformState::new(),
            metrics: LayoutMetrics::unmeasured(),
            size: None,
            driver: TransitionDriver::new(),
            last_advance: None,
            timers: TimerQueue::new(),
            enter_pending: false,
            entered: false,
            settle_pending: false,
            page_offset: 0.0,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Live drag transform.
    #[must_use]
    pub fn transform(&self) -> DragTransform {
        self.transform.current()
    }

    /// Revision of the live transform; bumps on every change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.transform.revision()
    }

    /// Selected item index.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Metrics of the last successful layout for the selected item.
    #[must_use]
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &DismissConfig {
        &self.config
    }

    /// Launched items.
    #[must_use]
    pub fn launch(&self) -> &LaunchParams<R> {
        &self.launch
    }

    /// The content layer of item `index`.
    #[must_use]
    pub fn layer(&self, index: usize) -> Option<&dyn ContentLayer> {
        self.layers.get(index).map(|layer| &**layer)
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns `true` while a transition runs or a delayed action is pending;
    /// the host should keep calling [`Container::tick`] until it is `false`.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.driver.is_running() || !self.timers.is_empty()
    }

    /// Deadline of the next delayed action, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Reports the container's laid-out size.
    ///
    /// A size with a zero or non-finite extent leaves the container
    /// unmeasured; pointer input and `enter` wait for the next valid layout.
    /// An interaction in progress is abandoned, and a transform it displaced
    /// is restored by the next valid layout.
    /// The first valid layout attaches the selected layer and, with
    /// [`DismissConfig::auto_enter`] or a pending [`Container::enter`], starts
    /// the enter transition.
    pub fn layout(&mut self, size: Size, now_ms: u64) {
        let measured = self.launch.items()[self.selected].measure(size, self.config.dismiss_fraction);
        match measured {
            Ok(metrics) => {
                self.metrics = metrics;
                self.size = Some(size);
            }
            Err(err) => {
                debug!("layout deferred: {err}");
                self.metrics = LayoutMetrics::unmeasured();
                self.size = None;
                self.abandon_interaction();
                return;
            }
        }
        if self.phase == GesturePhase::Terminated {
            return;
        }
        for layer in self.layers.iter_mut().filter(|layer| layer.is_attached()) {
            layer.attach(size);
        }
        self.attach_selected(size);
        if !self.entered && (self.enter_pending || self.config.auto_enter) {
            self.start_enter(now_ms);
        } else if self.settle_pending {
            self.settle_pending = false;
            self.settle(now_ms);
        } else {
            self.render();
        }
    }

    /// Starts the enter transition, or defers it until the first layout.
    ///
    /// Ignored once the viewer has entered or while it is not idle.
    pub fn enter(&mut self, now_ms: u64) {
        if self.entered || self.phase != GesturePhase::Idle {
            debug!("enter ignored in phase {}", self.phase);
            return;
        }
        if self.size.is_none() {
            debug!("enter deferred until layout");
            self.enter_pending = true;
            return;
        }
        self.start_enter(now_ms);
    }

    /// Closes the viewer through the exit transition, from the live transform.
    ///
    /// Without a layout there is nothing to animate and the viewer is
    /// dismissed immediately. Ignored once closing.
    pub fn request_dismiss(&mut self, now_ms: u64) {
        if self.phase.is_closing() {
            return;
        }
        self.classifier.reset();
        self.page_offset = 0.0;
        if self.size.is_none() {
            self.finish_dismiss();
            return;
        }
        self.start_exit(self.transform.current(), now_ms);
    }

    /// Feeds one pointer sample. Returns how it was classified, so the host
    /// can route pass-through samples to its own pager when it has one.
    pub fn handle_pointer(&mut self, sample: &PointerSample) -> Gesture {
        if !self.phase.accepts_input() || self.size.is_none() {
            trace!("pointer {:?} ignored in phase {}", sample.phase, self.phase);
            return Gesture::Ignored;
        }
        let now = sample.time_ms;
        if sample.phase == PointerPhase::Down && self.phase == GesturePhase::Restoring {
            self.driver.cancel();
            debug!("restore superseded by a new press");
            self.set_phase(GesturePhase::Idle);
        }
        let ctx = GestureContext {
            translation: self.transform.translation(),
            content_scale: self.layers[self.selected].content_scale(),
        };
        let gesture = self.classifier.handle(sample, ctx);
        trace!("pointer {:?} classified as {gesture:?}", sample.phase);
        match gesture {
            Gesture::Pressed { .. } | Gesture::Ignored => {}
            Gesture::Drag { delta } => self.drag_by(delta),
            Gesture::PassToChild => self.layers[self.selected].on_passthrough(sample),
            Gesture::PassToAncestor { offset } => {
                self.page_offset = offset.x;
                self.render();
            }
            Gesture::Released { release, tap } => {
                // Lets the layer end any pinch or pan it was tracking.
                self.layers[self.selected].on_passthrough(sample);
                if let Some(TapEvent::LongPress(at)) = tap {
                    debug!("long press at ({}, {})", at.x, at.y);
                }
                self.resolve(release, now);
            }
        }
        gesture
    }

    /// Advances transitions and delayed actions to `now_ms`.
    ///
    /// Returns [`Container::needs_tick`].
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if let Some(TapEvent::LongPress(at)) = self.classifier.poll(now_ms) {
            debug!("long press held at ({}, {})", at.x, at.y);
        }
        while let Some(timer) = self.timers.pop_due(now_ms) {
            self.fire(timer, now_ms);
        }
        self.advance(now_ms);
        self.needs_tick()
    }

    /// Reports load progress of item `index`.
    pub fn on_load_signal(
        &mut self,
        index: usize,
        signal: LoadSignal,
        now_ms: u64,
    ) -> Result<(), DismissError> {
        self.launch.check_index(index)?;
        if self.phase == GesturePhase::Terminated {
            return Ok(());
        }
        let layer = &mut self.layers[index];
        match signal {
            LoadSignal::Started => layer.on_load_state(LoadState::Loading),
            LoadSignal::Ready => {
                layer.on_load_state(LoadState::Ready);
                self.timers.schedule(
                    now_ms.saturating_add(self.config.reveal_delay_ms),
                    Timer::Reveal { index },
                );
            }
            LoadSignal::Failed(reason) => {
                warn!("item {index} failed to load: {reason}");
                layer.on_load_state(LoadState::Failed);
                self.host.on_load_failed(index, &reason);
                if self.config.dismiss_on_failure {
                    self.timers.schedule(
                        now_ms.saturating_add(self.config.failure_dismiss_delay_ms),
                        Timer::FailureDismiss { index },
                    );
                }
            }
        }
        if index == self.selected {
            self.render();
        }
        Ok(())
    }

    /// Makes item `index` the visible page.
    ///
    /// Selecting the current page is a no-op; the host is notified only on
    /// change. A leftover drag transform is restored from `now_ms`.
    pub fn select_page(&mut self, index: usize, now_ms: u64) -> Result<(), DismissError> {
        self.launch.check_index(index)?;
        if index == self.selected || self.phase.is_closing() {
            return Ok(());
        }
        let previous = self.selected;
        self.layers[previous].on_visibility_hint_changed(false);
        self.selected = index;
        if let Some(size) = self.size {
            match self.launch.items()[index].measure(size, self.config.dismiss_fraction) {
                Ok(metrics) => self.metrics = metrics,
                Err(err) => debug!("page metrics unavailable: {err}"),
            }
            self.attach_selected(size);
        }
        debug!("page {previous} -> {index}");
        self.host.on_page_selected(index);
        if self.phase == GesturePhase::Idle && !self.transform.current().is_identity() {
            self.start_restore(now_ms);
        } else {
            self.render();
        }
        Ok(())
    }

    fn attach_selected(&mut self, size: Size) {
        let layer = &mut self.layers[self.selected];
        if !layer.is_attached() {
            layer.attach(size);
        }
        layer.on_visibility_hint_changed(true);
    }

    /// Drops the classifier's interaction when layout goes away under it.
    fn abandon_interaction(&mut self) {
        if !self.classifier.is_active() && self.phase != GesturePhase::Dragging {
            return;
        }
        debug!("layout lost mid-interaction in phase {}", self.phase);
        self.classifier.reset();
        self.page_offset = 0.0;
        if self.phase == GesturePhase::Dragging {
            self.settle_pending = true;
        }
    }

    fn set_phase(&mut self, phase: GesturePhase) {
        if self.phase != phase {
            debug!("phase {} -> {}", self.phase, phase);
            self.phase = phase;
        }
    }

    fn drag_by(&mut self, delta: Vec2) {
        match self.transform.drag_by(delta, &self.metrics) {
            Ok(true) => {
                self.set_phase(GesturePhase::Dragging);
                self.render();
            }
            Ok(false) => {}
            Err(err) => debug!("drag skipped: {err}"),
        }
    }

    fn resolve(&mut self, release: Release, now: u64) {
        match release {
            Release::Tap => {
                debug!("tap: dismissing");
                self.start_exit(DragTransform::IDENTITY, now);
            }
            Release::Settle => {
                let ty = self.transform.translation().y;
                if self.metrics.exceeds_dismiss_threshold(ty) {
                    debug!("released past threshold ({ty}): dismissing");
                    self.start_exit(self.transform.current(), now);
                } else {
                    self.settle(now);
                }
            }
            Release::Cancel => self.settle(now),
            Release::Ancestor { offset } => {
                self.page_offset = 0.0;
                self.finish_page_swipe(offset, now);
                if self.phase != GesturePhase::Restoring {
                    self.settle(now);
                }
            }
        }
    }

    /// Restores a displaced transform; an untouched one resolves to nothing.
    fn settle(&mut self, now: u64) {
        if self.transform.current().is_identity() {
            self.set_phase(GesturePhase::Idle);
            self.render();
        } else {
            self.start_restore(now);
        }
    }

    fn finish_page_swipe(&mut self, offset: Vec2, now: u64) {
        let width = self.metrics.container().width;
        if offset.x.abs() < self.config.page_swipe_fraction * width {
            return;
        }
        let target = if offset.x < 0.0 {
            self.selected + 1
        } else if let Some(previous) = self.selected.checked_sub(1) {
            previous
        } else {
            return;
        };
        if self.select_page(target, now).is_err() {
            trace!("page swipe past the last item");
        }
    }

    fn start_enter(&mut self, now: u64) {
        self.entered = true;
        self.enter_pending = false;
        let transition = Transition::enter(&self.metrics, self.config.enter);
        self.transform.apply_frame(transition.from());
        self.start_transition(transition, GesturePhase::Entering, now);
    }

    fn start_exit(&mut self, from: DragTransform, now: u64) {
        let transition = Transition::exit(from, &self.metrics, self.config.exit);
        self.transform.apply_frame(from);
        self.start_transition(transition, GesturePhase::Dismissing, now);
    }

    fn start_restore(&mut self, now: u64) {
        let transition = Transition::restore(self.transform.current(), self.config.restore);
        self.start_transition(transition, GesturePhase::Restoring, now);
    }

    fn start_transition(&mut self, transition: Transition, phase: GesturePhase, now: u64) {
        if let Some(kind) = self.driver.active_kind() {
            debug!("{kind:?} superseded by {:?}", transition.kind());
        }
        self.driver.start(transition, now);
        self.set_phase(phase);
        self.advance(now);
    }

    fn advance(&mut self, now: u64) {
        let Some(ticket) = self.driver.active_ticket() else {
            return;
        };
        if self.last_advance == Some((ticket, now)) {
            return;
        }
        self.last_advance = Some((ticket, now));
        let Some(frame) = self.driver.tick(now) else {
            return;
        };
        self.transform.apply_frame(frame.transform);
        self.render();
        if let Some(done) = frame.completion {
            match done.kind {
                TransitionKind::Enter | TransitionKind::Restore => {
                    self.set_phase(GesturePhase::Idle);
                }
                TransitionKind::Exit => self.finish_dismiss(),
            }
        }
    }

    fn fire(&mut self, timer: Timer, now: u64) {
        match timer {
            Timer::Reveal { index } => {
                let layer = &mut self.layers[index];
                if layer.load_state() == LoadState::Ready {
                    layer.on_load_state(LoadState::Revealed);
                    if index == self.selected {
                        self.render();
                    }
                }
            }
            Timer::FailureDismiss { index } => {
                if index == self.selected {
                    debug!("item {index} failed: dismissing");
                    self.request_dismiss(now);
                } else {
                    debug!("item {index} failed but is no longer selected");
                }
            }
        }
    }

    fn finish_dismiss(&mut self) {
        self.driver.cancel();
        for layer in &mut self.layers {
            layer.detach();
        }
        self.timers.clear();
        self.classifier.reset();
        self.set_phase(GesturePhase::Terminated);
        self.host.on_dismissed();
    }

    fn render(&mut self) {
        let Some(size) = self.size else {
            return;
        };
        let transform = self.transform.current();
        let frame = RenderFrame {
            transform,
            affine: transform.to_affine(size),
            scrim: transform.scrim_color(),
            selected: self.selected,
            parts: self.layers[self.selected].parts(),
            page_offset: self.page_offset,
            phase: self.phase,
        };
        self.host.render(&frame);
    }
}
