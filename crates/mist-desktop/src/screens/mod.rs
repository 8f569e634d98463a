//! Top-level screens and navigation
//!
//! Screens are an exhaustive enum; navigation is a `match`, not a
//! string-keyed callback table. The navigator tracks which screens have
//! already been displayed so one-time setup runs exactly once per process
//! while per-entry work may repeat.

mod boot;
mod guest;
mod login;

pub use boot::BootScreen;
pub use guest::GuestScreen;
pub use login::LoginScreen;

use std::collections::HashSet;

use dioxus::prelude::*;

/// A full-viewport UI state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Boot,
    Login,
    Guest,
}

/// Screen navigation state
#[derive(Clone, Copy)]
pub struct Navigator {
    current: Signal<Screen>,
    displayed: Signal<HashSet<Screen>>,
}

impl Navigator {
    /// Build a navigator from externally created signals
    #[must_use]
    pub const fn new(current: Signal<Screen>, displayed: Signal<HashSet<Screen>>) -> Self {
        Self { current, displayed }
    }

    /// The screen currently shown
    #[must_use]
    pub fn current(&self) -> Screen {
        (self.current)()
    }

    /// Switch to `screen`
    pub fn go(&mut self, screen: Screen) {
        tracing::debug!("Navigating to {screen:?}");
        self.current.set(screen);
    }

    /// Record that `screen` is being displayed.
    ///
    /// Returns `true` only on the first display, so callers can gate their
    /// one-time init work on it.
    pub fn begin(&mut self, screen: Screen) -> bool {
        self.displayed.write().insert(screen)
    }
}
