// SPDX-License-Identifier: MPL-2.0
//! Phase-change events delivered to host observers.
//!
//! The controller notifies subscribers synchronously on every phase
//! transition so the host UI can animate show/hide. The surface is a
//! plain callback interface with no toolkit types, so the engine can be
//! driven from any event loop.

use crate::alert::AlertId;
use crate::controller::Phase;
use std::fmt;

/// Token identifying one observer subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new unique subscription ID.
    pub(crate) fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription-{}", self.0)
    }
}

/// Why the current alert left the `Showing` phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The auto-dismiss deadline expired.
    Expired,
    /// The host (or user) dismissed the alert explicitly.
    Manual,
}

/// One phase transition of the presentation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseEvent {
    /// The phase just entered.
    pub phase: Phase,
    /// The alert involved in the transition, if any. `None` only when
    /// returning to `Idle` with nothing left to show.
    pub alert: Option<AlertId>,
    /// Set on the `Dismissing` transition; `None` otherwise.
    pub reason: Option<DismissReason>,
}

/// Observer callback invoked on every phase transition.
pub type PhaseObserver = Box<dyn FnMut(&PhaseEvent)>;
