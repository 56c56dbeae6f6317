// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for a [`Container`](crate::Container).

use understory_drag_transform::DEFAULT_DISMISS_FRACTION;
use understory_gesture::tap::{
    DEFAULT_DOUBLE_TAP_TIMEOUT_MS, DEFAULT_LONG_PRESS_TIMEOUT_MS, DEFAULT_TAP_SLOP, TapConfig,
};
use understory_transition::TransitionTiming;

/// Fraction of the container width a forwarded swipe must travel to change page.
pub const DEFAULT_PAGE_SWIPE_FRACTION: f64 = 0.25;
/// Delay between content becoming ready and the placeholders being removed.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 100;
/// Delay between a load failure and the automatic dismissal.
pub const DEFAULT_FAILURE_DISMISS_DELAY_MS: u64 = 1000;
/// Upper bound of the photo pinch zoom.
pub const DEFAULT_MAX_ZOOM: f64 = 3.0;

/// Container configuration.
///
/// Every field has a default matching the stock viewer; the `with_*` setters
/// adjust one field at a time:
///
/// ```
/// use understory_dismiss::DismissConfig;
///
/// let config = DismissConfig::default()
///     .with_dismiss_fraction(0.2)
///     .with_auto_enter(false);
/// assert_eq!(config.dismiss_fraction, 0.2);
/// assert_eq!(config.reveal_delay_ms, 100);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DismissConfig {
    /// Fraction of the container height past which a release dismisses.
    pub dismiss_fraction: f64,
    /// Fraction of the container width a page swipe must travel.
    pub page_swipe_fraction: f64,
    /// Enter transition.
    pub enter: TransitionTiming,
    /// Exit transition.
    pub exit: TransitionTiming,
    /// Restore transition.
    pub restore: TransitionTiming,
    /// Tap movement tolerance in logical pixels.
    pub tap_slop: f64,
    /// Double-tap window.
    pub double_tap_timeout_ms: u64,
    /// Long-press hold time.
    pub long_press_timeout_ms: u64,
    /// Anti-flicker delay before placeholders are removed.
    pub reveal_delay_ms: u64,
    /// Delay before a failed load dismisses the viewer.
    pub failure_dismiss_delay_ms: u64,
    /// Start the enter transition on the first successful layout.
    pub auto_enter: bool,
    /// Dismiss automatically after a load failure of the selected item.
    pub dismiss_on_failure: bool,
    /// Maximum photo zoom, read by layer factories given to
    /// [`Container::new`](crate::Container::new).
    pub max_zoom: f64,
}

impl Default for DismissConfig {
    fn default() -> Self {
        Self {
            dismiss_fraction: DEFAULT_DISMISS_FRACTION,
            page_swipe_fraction: DEFAULT_PAGE_SWIPE_FRACTION,
            enter: TransitionTiming::enter(),
            exit: TransitionTiming::exit(),
            restore: TransitionTiming::restore(),
            tap_slop: DEFAULT_TAP_SLOP,
            double_tap_timeout_ms: DEFAULT_DOUBLE_TAP_TIMEOUT_MS,
            long_press_timeout_ms: DEFAULT_LONG_PRESS_TIMEOUT_MS,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            failure_dismiss_delay_ms: DEFAULT_FAILURE_DISMISS_DELAY_MS,
            auto_enter: true,
            dismiss_on_failure: true,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl DismissConfig {
    /// Sets [`DismissConfig::dismiss_fraction`].
    #[must_use]
    pub fn with_dismiss_fraction(mut self, fraction: f64) -> Self {
        self.dismiss_fraction = fraction;
        self
    }

    /// Sets [`DismissConfig::page_swipe_fraction`].
    #[must_use]
    pub fn with_page_swipe_fraction(mut self, fraction: f64) -> Self {
        self.page_swipe_fraction = fraction;
        self
    }

    /// Sets [`DismissConfig::enter`].
    #[must_use]
    pub fn with_enter(mut self, timing: TransitionTiming) -> Self {
        self.enter = timing;
        self
    }

    /// Sets [`DismissConfig::exit`].
    #[must_use]
    pub fn with_exit(mut self, timing: TransitionTiming) -> Self {
        self.exit = timing;
        self
    }

    /// Sets [`DismissConfig::restore`].
    #[must_use]
    pub fn with_restore(mut self, timing: TransitionTiming) -> Self {
        self.restore = timing;
        self
    }

    /// Sets the tap slop and timeouts from a [`TapConfig`].
    #[must_use]
    pub fn with_tap(mut self, tap: TapConfig) -> Self {
        self.tap_slop = tap.slop;
        self.double_tap_timeout_ms = tap.double_tap_timeout_ms;
        self.long_press_timeout_ms = tap.long_press_timeout_ms;
        self
    }

    /// Sets [`DismissConfig::reveal_delay_ms`].
    #[must_use]
    pub fn with_reveal_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reveal_delay_ms = delay_ms;
        self
    }

    /// Sets [`DismissConfig::failure_dismiss_delay_ms`].
    #[must_use]
    pub fn with_failure_dismiss_delay_ms(mut self, delay_ms: u64) -> Self {
        self.failure_dismiss_delay_ms = delay_ms;
        self
    }

    /// Sets [`DismissConfig::auto_enter`].
    #[must_use]
    pub fn with_auto_enter(mut self, auto_enter: bool) -> Self {
        self.auto_enter = auto_enter;
        self
    }

    /// Sets [`DismissConfig::dismiss_on_failure`].
    #[must_use]
    pub fn with_dismiss_on_failure(mut self, dismiss: bool) -> Self {
        self.dismiss_on_failure = dismiss;
        self
    }

    /// Sets [`DismissConfig::max_zoom`].
    #[must_use]
    pub fn with_max_zoom(mut self, max_zoom: f64) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    /// Tap tolerances as a [`TapConfig`].
    #[must_use]
    pub fn tap(&self) -> TapConfig {
        TapConfig {
            slop: self.tap_slop,
            double_tap_timeout_ms: self.double_tap_timeout_ms,
            long_press_timeout_ms: self.long_press_timeout_ms,
        }
    }
}
