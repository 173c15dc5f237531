// SPDX-License-Identifier: MPL-2.0
//! Alert presentation lifecycle management.
//!
//! The `PresentationController` owns the pending queue and the alert
//! currently on screen. It enforces at-most-one-visible presentation,
//! runs the idle → showing → dismissing cycle, and handles timed
//! auto-dismiss alongside manual dismissal.
//!
//! All methods take `&mut self` and are meant to be called from the
//! host's UI event loop; the engine does no locking of its own.

use crate::alert::{Alert, AlertId};
use crate::error::{Error, Result};
use crate::observer::{DismissReason, PhaseEvent, PhaseObserver, SubscriptionId};
use crate::queue::AlertQueue;
use std::fmt;
use std::time::Instant;

/// Presentation phase of the controller.
///
/// The controller cycles idle → showing → dismissing → idle for the
/// process lifetime; there is no terminal phase. `Dismissing` is
/// transient: it is observable through [`PhaseEvent`]s but the
/// controller never parks in it between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing on screen, queue may or may not be empty.
    #[default]
    Idle,
    /// One alert is visible.
    Showing,
    /// The visible alert is being torn down.
    Dismissing,
}

/// Messages for alert state changes, for Elm-style hosts.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific alert by ID (the shown one or a queued one).
    Dismiss(AlertId),
    /// Tick for checking the auto-dismiss deadline.
    Tick,
}

/// Drives the visible/hidden lifecycle of alerts.
///
/// The controller is an explicitly owned value: embed it in your
/// application state and call into it from your update loop. There is
/// no global instance.
#[derive(Default)]
pub struct PresentationController {
    /// Pending alerts in presentation order.
    queue: AlertQueue,
    /// The alert currently on screen, if any.
    current: Option<Alert>,
    /// Current presentation phase.
    phase: Phase,
    /// Auto-dismiss deadline for the current alert. Cleared on manual
    /// dismissal, which is what invalidates a pending timer.
    deadline: Option<Instant>,
    /// Subscribed phase observers, notified synchronously in
    /// subscription order.
    observers: Vec<(SubscriptionId, PhaseObserver)>,
}

impl PresentationController {
    /// Creates a new idle controller with an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues an alert for presentation.
    ///
    /// Fails with [`Error::DuplicateAlert`] if an alert with the same id
    /// is already queued or currently shown; all state is left unchanged
    /// in that case. On success the alert is shown immediately when the
    /// controller is idle, otherwise it waits its turn in FIFO order.
    ///
    /// Returns the alert's id so the caller can later [`cancel`] it.
    ///
    /// [`cancel`]: Self::cancel
    pub fn enqueue(&mut self, alert: Alert) -> Result<AlertId> {
        if self.current.as_ref().is_some_and(|c| c.id() == alert.id()) {
            return Err(Error::DuplicateAlert(alert.id()));
        }

        let id = alert.id();
        self.queue.enqueue(alert)?;

        if self.phase == Phase::Idle {
            self.present_next_at(Instant::now());
        }
        Ok(id)
    }

    /// Presents the queue head if the controller is idle.
    ///
    /// Returns `true` if an alert was promoted to showing. This happens
    /// automatically on `enqueue` and after a dismissal; it only needs
    /// to be called directly by hosts that paused presentation via
    /// [`clear`].
    ///
    /// [`clear`]: Self::clear
    pub fn present_next(&mut self) -> bool {
        self.present_next_at(Instant::now())
    }

    /// Dismisses the currently shown alert.
    ///
    /// Transitions showing → dismissing → idle, invalidates the
    /// auto-dismiss deadline, and immediately presents the next queued
    /// alert if there is one. Fails with [`Error::NoActiveAlert`] when
    /// nothing is showing; callers typically ignore that error.
    pub fn dismiss_current(&mut self) -> Result<()> {
        self.dismiss_at(Instant::now(), DismissReason::Manual)
    }

    /// Removes a *queued* alert by id.
    ///
    /// Returns `true` if the alert was found and removed. The alert
    /// currently shown is not affected; use [`dismiss_current`] for it.
    ///
    /// [`dismiss_current`]: Self::dismiss_current
    pub fn cancel(&mut self, id: AlertId) -> bool {
        self.queue.cancel(id)
    }

    /// Checks the auto-dismiss deadline against `Instant::now()`.
    ///
    /// Call periodically from the host loop, e.g. every 100ms via
    /// `iced::time::every`. A tick that arrives after the alert was
    /// already dismissed manually is a no-op.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Checks the auto-dismiss deadline against an explicit instant.
    ///
    /// For hosts (and tests) that drive their own clock. If the current
    /// alert's deadline has passed, it is dismissed with
    /// [`DismissReason::Expired`] and the next queued alert is shown.
    pub fn tick_at(&mut self, now: Instant) {
        let expired = self.phase == Phase::Showing && self.deadline.is_some_and(|d| now >= d);
        if expired {
            // The deadline is only armed while an alert is showing, so
            // this cannot fail with NoActiveAlert.
            let _ = self.dismiss_at(now, DismissReason::Expired);
        }
    }

    /// Drops all queued alerts and dismisses the current one.
    pub fn clear(&mut self) {
        self.queue.clear();
        if self.phase == Phase::Showing {
            let _ = self.dismiss_current();
        }
    }

    /// Subscribes an observer to phase transitions.
    ///
    /// The callback is invoked synchronously on every transition, in
    /// subscription order, so the host UI can animate show/hide.
    pub fn subscribe(&mut self, observer: impl FnMut(&PhaseEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a previously registered observer.
    ///
    /// Returns `true` if the subscription was found.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub_id, _)| *sub_id != id);
        self.observers.len() < before
    }

    /// Handles an alert message from an Elm-style host.
    ///
    /// `Dismiss` targets the shown alert or a queued one by id; a stale
    /// id is ignored. `Tick` runs the deadline check.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                if self.current.as_ref().is_some_and(|c| c.id() == *id) {
                    let _ = self.dismiss_current();
                } else {
                    self.cancel(*id);
                }
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the current presentation phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the alert currently on screen, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    /// Returns the number of queued (not yet shown) alerts.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether any alert is shown or queued.
    #[must_use]
    pub fn has_alerts(&self) -> bool {
        self.current.is_some() || !self.queue.is_empty()
    }

    fn present_next_at(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        let Some(alert) = self.queue.dequeue_next() else {
            return false;
        };

        let id = alert.id();
        self.deadline = alert.effective_duration().map(|d| now + d);
        self.current = Some(alert);
        self.set_phase(Phase::Showing, Some(id), None);
        true
    }

    fn dismiss_at(&mut self, now: Instant, reason: DismissReason) -> Result<()> {
        if self.phase != Phase::Showing {
            return Err(Error::NoActiveAlert);
        }
        let id = self.current.as_ref().map(Alert::id);

        // Invalidate the timer before anything else so a late tick
        // cannot re-dismiss.
        self.deadline = None;
        self.set_phase(Phase::Dismissing, id, Some(reason));
        self.current = None;
        self.set_phase(Phase::Idle, None, None);

        self.present_next_at(now);
        Ok(())
    }

    fn set_phase(&mut self, phase: Phase, alert: Option<AlertId>, reason: Option<DismissReason>) {
        self.phase = phase;
        let event = PhaseEvent {
            phase,
            alert,
            reason,
        };
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }
}

impl fmt::Debug for PresentationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationController")
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("queued", &self.queue.len())
            .field("deadline", &self.deadline)
            .field("observers", &self.observers.len())
            .finish()
    }
}
