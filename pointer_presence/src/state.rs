// Copyright 2025 the Pointer Presence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presence state helper: guarded transitions between pointer present and hidden.
//!
//! ## Usage
//!
//! 1) Call [`PresenceState::hide`] when keyboard interaction should retire the pointer.
//! 2) Call [`PresenceState::show`] when the next pointer movement arrives.
//! 3) Query [`PresenceState::is_present`] at any time; queries have no side effects.
//!
//! Both transitions are guarded: triggering the state that is already current
//! is a no-op and reports no event, so repeated hide (or show) calls cannot
//! produce duplicate notifications downstream.
//!
//! ## Minimal example
//!
//! ```
//! use pointer_presence::state::{PresenceEvent, PresenceState};
//!
//! let mut state = PresenceState::new();
//! assert!(state.is_present());
//!
//! // First hide transitions; the second is suppressed by the guard.
//! assert_eq!(state.hide(), Some(PresenceEvent::Disappeared));
//! assert_eq!(state.hide(), None);
//!
//! // Movement restores presence.
//! assert_eq!(state.show(), Some(PresenceEvent::Appeared));
//! assert!(state.is_present());
//! ```

/// Whether the pointer is currently considered present on screen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Presence {
    /// The pointer is visible/active. This is the initial state.
    #[default]
    Present,
    /// The pointer has been retired, typically by keyboard interaction.
    Hidden,
}

/// A presence transition event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PresenceEvent {
    /// The pointer went from [`Presence::Present`] to [`Presence::Hidden`].
    Disappeared,
    /// The pointer went from [`Presence::Hidden`] to [`Presence::Present`].
    Appeared,
}

/// A two-state presence machine with guarded, cyclic transitions.
///
/// The machine starts in [`Presence::Present`] and has no terminal state:
/// `hide` and `show` alternate for the life of the value. Self-loop triggers
/// (hiding while hidden, showing while present) are suppressed and return
/// `None` rather than re-reporting a transition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PresenceState {
    current: Presence,
}

impl PresenceState {
    /// Creates a machine in the initial [`Presence::Present`] state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Presence::Present,
        }
    }

    /// Returns the current presence value.
    #[must_use]
    pub const fn current(&self) -> Presence {
        self.current
    }

    /// Returns `true` iff the pointer is currently present.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self.current, Presence::Present)
    }

    /// Transition `Present → Hidden`.
    ///
    /// Returns `Some(PresenceEvent::Disappeared)` when the transition
    /// happened, or `None` when the machine was already hidden.
    pub fn hide(&mut self) -> Option<PresenceEvent> {
        match self.current {
            Presence::Present => {
                self.current = Presence::Hidden;
                Some(PresenceEvent::Disappeared)
            }
            Presence::Hidden => None,
        }
    }

    /// Transition `Hidden → Present`.
    ///
    /// Returns `Some(PresenceEvent::Appeared)` when the transition happened,
    /// or `None` when the machine was already present.
    pub fn show(&mut self) -> Option<PresenceEvent> {
        match self.current {
            Presence::Hidden => {
                self.current = Presence::Present;
                Some(PresenceEvent::Appeared)
            }
            Presence::Present => None,
        }
    }
}
