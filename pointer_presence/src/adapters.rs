// Copyright 2025 the Pointer Presence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters bridging concrete event plumbing into the tracker.
//!
//! Modules in this file are behind feature flags so `pointer_presence` can
//! remain usable in contexts that do not want the extra dependencies.
//!
//! - [`queue`] (`queue_adapter` feature): an in-memory [`QueueSource`]
//!   event source plus the [`pump`] routing helper, for tests and for hosts
//!   whose native loop already delivers events as a serialized stream.
//!
//! [`QueueSource`]: queue::QueueSource
//! [`pump`]: queue::pump

#[cfg(feature = "queue_adapter")]
pub mod queue;
