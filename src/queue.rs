// SPDX-License-Identifier: MPL-2.0
//! Pending alert queue.
//!
//! A FIFO over the alerts waiting to be shown. Insertion order is
//! presentation order, and an id can appear at most once.

use crate::alert::{Alert, AlertId};
use crate::error::{Error, Result};
use std::collections::VecDeque;

/// Ordered queue of pending alerts.
///
/// The queue only knows about alerts that are *waiting*; the alert
/// currently on screen is owned by the
/// [`PresentationController`](crate::controller::PresentationController),
/// which also guards against enqueuing a duplicate of it.
#[derive(Debug, Default)]
pub struct AlertQueue {
    pending: VecDeque<Alert>,
}

impl AlertQueue {
    /// Creates a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an alert to the tail of the queue.
    ///
    /// Fails with [`Error::DuplicateAlert`] if an alert with the same id
    /// is already queued; the queue is left unchanged in that case.
    pub fn enqueue(&mut self, alert: Alert) -> Result<()> {
        if self.contains(alert.id()) {
            return Err(Error::DuplicateAlert(alert.id()));
        }
        self.pending.push_back(alert);
        Ok(())
    }

    /// Removes and returns the head of the queue, or `None` if empty.
    pub fn dequeue_next(&mut self) -> Option<Alert> {
        self.pending.pop_front()
    }

    /// Removes a queued alert by id.
    ///
    /// Returns `true` if the alert was found and removed, `false` if no
    /// queued alert has that id.
    pub fn cancel(&mut self, id: AlertId) -> bool {
        if let Some(pos) = self.pending.iter().position(|a| a.id() == id) {
            self.pending.remove(pos);
            return true;
        }
        false
    }

    /// Returns whether an alert with the given id is queued.
    #[must_use]
    pub fn contains(&self, id: AlertId) -> bool {
        self.pending.iter().any(|a| a.id() == id)
    }

    /// Returns the queued alerts in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.pending.iter()
    }

    /// Returns the number of queued alerts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes all queued alerts.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
