// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dismiss --heading-base-level=0

//! Understory Dismiss: a headless drag-to-dismiss media viewer.
//!
//! The viewer opens by growing content out of an origin rect (typically the
//! thumbnail the user tapped), lets the user drag it around with the backdrop
//! fading and the content shrinking as it moves away vertically, and on
//! release either springs back or flies home to the origin rect and closes.
//! A tap closes it too. Several items can be paged horizontally.
//!
//! [`Container`] ties the pieces together:
//!
//! - [`understory_gesture`] classifies each pointer sample (drag, pass to the
//!   content layer, pass to the pager, release outcome).
//! - [`understory_drag_transform`] maps the vertical offset to scale and
//!   backdrop alpha.
//! - [`understory_transition`] runs the enter, exit and restore transitions.
//! - [`ContentLayer`]s ([`PhotoLayer`], [`VideoLayer`]) present each item and
//!   talk to a host-provided [`ContentLoader`].
//! - A [`Host`] receives [`RenderFrame`]s and lifecycle signals.
//!
//! The container owns no clock and no window. The host drives it through
//! [`Container::layout`], [`Container::handle_pointer`],
//! [`Container::tick`], [`Container::on_load_signal`],
//! [`Container::select_page`], [`Container::enter`] and
//! [`Container::request_dismiss`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect, Size};
//! use understory_dismiss::{
//!     Container, ContentLoader, DismissConfig, GesturePhase, Host, LaunchParams, PhotoLayer,
//!     RenderFrame,
//! };
//! use understory_drag_transform::DragDescriptor;
//! use understory_gesture::pointer::PointerSample;
//!
//! struct Loader;
//! impl ContentLoader<&'static str> for Loader {
//!     fn load(&self, _content: &&'static str, _thumbnail: Option<&&'static str>) {}
//!     fn cancel(&self, _content: &&'static str) {}
//! }
//!
//! #[derive(Debug, Default)]
//! struct Screen {
//!     frames: usize,
//!     dismissed: bool,
//! }
//! impl Host for Screen {
//!     fn render(&mut self, _frame: &RenderFrame) {
//!         self.frames += 1;
//!     }
//!     fn on_dismissed(&mut self) {
//!         self.dismissed = true;
//!     }
//! }
//!
//! let loader: Rc<dyn ContentLoader<&'static str>> = Rc::new(Loader);
//! let item = DragDescriptor::new(Rect::new(50.0, 100.0, 150.0, 200.0), "cat.jpg");
//! let mut viewer = Container::new(
//!     LaunchParams::single(item),
//!     DismissConfig::default(),
//!     Screen::default(),
//!     |_, item, config| Box::new(PhotoLayer::new(item, loader.clone(), config.max_zoom)),
//! );
//!
//! // The first layout starts the enter transition.
//! viewer.layout(Size::new(500.0, 1000.0), 0);
//! assert_eq!(viewer.phase(), GesturePhase::Entering);
//! viewer.tick(300);
//! assert_eq!(viewer.phase(), GesturePhase::Idle);
//!
//! // Drag halfway down and let go: past a quarter of the height, so it closes.
//! viewer.handle_pointer(&PointerSample::down(Point::new(250.0, 300.0), 400));
//! viewer.handle_pointer(&PointerSample::moved(Point::new(250.0, 800.0), 420));
//! assert_eq!(viewer.transform().scale, 0.5);
//! viewer.handle_pointer(&PointerSample::up(Point::new(250.0, 800.0), 440));
//! assert_eq!(viewer.phase(), GesturePhase::Dismissing);
//!
//! viewer.tick(740);
//! assert!(viewer.host().dismissed);
//! ```
//!
//! ## Logging
//!
//! Phase changes and decisions are reported through the [`log`] facade at
//! `debug` level, per-sample classification at `trace`, load failures at
//! `warn`. The host installs whichever logger it likes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod container;
mod content;
mod error;
mod host;
mod launch;
mod phase;
mod photo;
mod timers;
mod video;

pub use config::{
    DEFAULT_FAILURE_DISMISS_DELAY_MS, DEFAULT_MAX_ZOOM, DEFAULT_PAGE_SWIPE_FRACTION,
    DEFAULT_REVEAL_DELAY_MS, DismissConfig,
};
pub use container::Container;
pub use content::{ContentLayer, ContentLoader, LoadSignal, LoadState, SurfaceParts};
pub use error::DismissError;
pub use host::{Host, RenderFrame};
pub use launch::LaunchParams;
pub use phase::GesturePhase;
pub use photo::PhotoLayer;
pub use video::{Playback, VideoLayer};
