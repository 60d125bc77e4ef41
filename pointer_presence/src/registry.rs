// Copyright 2025 the Pointer Presence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered callback registry keyed by subscription tokens.
//!
//! A [`CallbackRegistry`] holds zero-argument callbacks and replays them in
//! registration order. Entries are identified by [`Subscription`] tokens
//! rather than callback identity, so removal works uniformly for closures,
//! function pointers, and anything else without relying on reference
//! equality.
//!
//! Ids are caller-allocated. A container that owns several registries (such
//! as [`PresenceTracker`](crate::PresenceTracker) with its disappear and
//! appear registries) typically draws ids from one shared counter so a single
//! token can be resolved against all of them.
//!
//! ## Minimal example
//!
//! ```
//! use pointer_presence::registry::{CallbackRegistry, Subscription};
//!
//! let mut registry = CallbackRegistry::new();
//! let first = Subscription::from_raw(0);
//! let second = Subscription::from_raw(1);
//!
//! registry.register(first, || {});
//! registry.register(second, || {});
//! assert_eq!(registry.len(), 2);
//!
//! assert!(registry.remove(first));
//! // Removal is idempotent: a stale token is a no-op, not an error.
//! assert!(!registry.remove(first));
//! assert_eq!(registry.len(), 1);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Token identifying one registered callback.
///
/// Tokens compare by value and are expected to be unique for the lifetime of
/// the registry they were registered with; allocators that never reuse ids
/// make stale tokens permanently inert.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

impl Subscription {
    /// Constructs a token from a raw id.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id of this token.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

struct Entry {
    id: Subscription,
    callback: Box<dyn FnMut()>,
}

/// An ordered collection of subscriber callbacks for one event kind.
///
/// Callbacks fire in registration order, each exactly once per
/// [`notify_all`](Self::notify_all) pass. The pass holds the registry
/// exclusively, so callbacks cannot re-enter it; a removal performed between
/// passes always takes effect for the next one.
#[derive(Default)]
pub struct CallbackRegistry {
    entries: Vec<Entry>,
}

impl CallbackRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `id` is currently registered.
    #[must_use]
    pub fn contains(&self, id: Subscription) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Appends `callback` under the caller-allocated `id`.
    ///
    /// Registration order is notification order. The registry does not
    /// deduplicate ids; callers are expected to allocate each id once.
    pub fn register(&mut self, id: Subscription, callback: impl FnMut() + 'static) {
        self.entries.push(Entry {
            id,
            callback: Box::new(callback),
        });
    }

    /// Removes the callback registered under `id`.
    ///
    /// Returns `true` if an entry was removed. Removing an unknown id is a
    /// no-op and returns `false`.
    pub fn remove(&mut self, id: Subscription) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes all callbacks.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Invokes every registered callback once, in registration order.
    ///
    /// Nothing is caught: a panicking callback unwinds to the caller and the
    /// remainder of the pass does not run.
    pub fn notify_all(&mut self) {
        for entry in &mut self.entries {
            (entry.callback)();
        }
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    fn sub(id: u64) -> Subscription {
        Subscription::from_raw(id)
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = CallbackRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn notify_fires_in_registration_order() {
        let log: Rc<RefCell<Vec<u32>>> = Rc::default();
        let mut registry = CallbackRegistry::new();

        for value in [1_u32, 2, 3] {
            let log = Rc::clone(&log);
            registry.register(sub(u64::from(value)), move || log.borrow_mut().push(value));
        }

        registry.notify_all();
        assert_eq!(*log.borrow(), vec![1, 2, 3]);

        // A second pass replays everything again, still in order.
        registry.notify_all();
        assert_eq!(*log.borrow(), vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn removed_callback_does_not_fire() {
        let log: Rc<RefCell<Vec<u32>>> = Rc::default();
        let mut registry = CallbackRegistry::new();

        for value in [1_u32, 2, 3] {
            let log = Rc::clone(&log);
            registry.register(sub(u64::from(value)), move || log.borrow_mut().push(value));
        }

        assert!(registry.remove(sub(2)));
        registry.notify_all();
        assert_eq!(*log.borrow(), vec![1, 3]);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut registry = CallbackRegistry::new();
        registry.register(sub(1), || {});

        assert!(!registry.remove(sub(99)));
        assert_eq!(registry.len(), 1);

        // Double removal of a known id degrades to the same no-op.
        assert!(registry.remove(sub(1)));
        assert!(!registry.remove(sub(1)));
    }

    #[test]
    fn contains_tracks_registration() {
        let mut registry = CallbackRegistry::new();
        assert!(!registry.contains(sub(7)));

        registry.register(sub(7), || {});
        assert!(registry.contains(sub(7)));

        registry.remove(sub(7));
        assert!(!registry.contains(sub(7)));
    }

    #[test]
    fn clear_drops_everything() {
        let count = Rc::new(RefCell::new(0_u32));
        let mut registry = CallbackRegistry::new();
        for id in 0..4 {
            let count = Rc::clone(&count);
            registry.register(sub(id), move || *count.borrow_mut() += 1);
        }

        registry.clear();
        registry.notify_all();
        assert!(registry.is_empty());
        assert_eq!(*count.borrow(), 0);
    }
}
