// Copyright 2025 the Pointer Presence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability interface toward the host's input event plumbing.
//!
//! The presence tracker never talks to a concrete windowing system. Instead,
//! the host injects an [`EventSource`] implementation describing the two
//! capabilities the tracker needs:
//!
//! - registering interest in pointer-movement events, and
//! - registering persistent key-press interest scoped to a host element.
//!
//! Registration is interest-only: the source hands back a
//! [`ListenerId`](EventSource::ListenerId) and the host's adapter later
//! routes matching native events into the tracker's transition entry points
//! ([`PresenceTracker::pointer_moved`](crate::PresenceTracker::pointer_moved)
//! and [`PresenceTracker::dispatch_disappear`](crate::PresenceTracker::dispatch_disappear)).
//! The [`queue`](crate::adapters::queue) adapter shows the full wiring
//! against an in-memory source.
//!
//! Movement interest is consumed one-shot by the tracker: after the first
//! delivery it calls [`unlisten`](EventSource::unlisten) on the registration
//! itself, so sources that only offer persistent listeners need no special
//! handling.

/// Host-side registration surface for pointer-movement and key-press events.
///
/// Implementations only manage registrations; they do not invoke tracker
/// callbacks themselves. An adapter owned by the host event loop matches
/// fired native events against outstanding registrations and drives the
/// tracker accordingly.
pub trait EventSource {
    /// Host handle naming where key listeners attach (a window, a widget id,
    /// a DOM-like element key).
    type Element;

    /// Identifier for one active registration, passed back to
    /// [`unlisten`](Self::unlisten).
    type ListenerId;

    /// Registers interest in pointer-movement events.
    ///
    /// The tracker arms at most one movement registration at a time and
    /// releases it after the first delivery.
    fn listen_moves(&mut self) -> Self::ListenerId;

    /// Registers persistent interest in key-press events on `element`.
    fn listen_keys(&mut self, element: &Self::Element) -> Self::ListenerId;

    /// Removes one specific registration.
    ///
    /// Other registrations, of either kind, are unaffected.
    fn unlisten(&mut self, listener: Self::ListenerId);
}
