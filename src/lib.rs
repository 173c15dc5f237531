// SPDX-License-Identifier: MPL-2.0
//! `iced_alerts` is a queued alert/toast presentation engine for
//! applications built with the Iced GUI toolkit.
//!
//! Alerts follow toast/snackbar UX patterns: they appear temporarily to
//! inform users about actions (save success, errors, etc.) without
//! blocking interaction. One alert is visible at a time; the rest wait
//! in FIFO order.
//!
//! # Components
//!
//! - [`alert`] - Immutable `Alert` descriptor with severity levels
//! - [`queue`] - FIFO `AlertQueue` with duplicate-id rejection
//! - [`controller`] - `PresentationController` driving the show/dismiss cycle
//! - [`observer`] - Phase-change events for host subscriptions
//! - [`config`] - Persisted presentation preferences
//! - [`ui`] - Iced toast widget (the only toolkit-bound module)
//!
//! # Usage
//!
//! ```
//! use iced_alerts::{Alert, PresentationController};
//!
//! let mut alerts = PresentationController::new();
//!
//! // Enqueue an alert; it shows immediately when the controller is idle.
//! let _id = alerts.enqueue(Alert::success("Image saved")?)?;
//!
//! // Drive auto-dismiss from your event loop, e.g. every 100ms.
//! alerts.tick();
//!
//! // Dismissal promotes the next queued alert, if any.
//! alerts.dismiss_current()?;
//! # Ok::<(), iced_alerts::Error>(())
//! ```
//!
//! In an Iced application, render the current alert with
//! [`ui::Toast::view_overlay`] and feed [`controller::Message`]s back
//! through [`PresentationController::handle_message`].
//!
//! # Design Considerations
//!
//! - Display duration: 3s for success/info, 5s for warnings, manual
//!   dismiss for errors; per-alert override via `Alert::with_duration`
//! - At most one alert visible; others are queued
//! - The controller is an owned value, not a global
//! - All failures are recoverable `Result` values; the engine never
//!   panics in the host's face

#![doc(html_root_url = "https://docs.rs/iced_alerts/0.1.0")]

pub mod alert;
pub mod config;
pub mod controller;
pub mod error;
pub mod observer;
pub mod queue;
pub mod ui;

pub use alert::{Alert, AlertId, Severity};
pub use controller::{Message, Phase, PresentationController};
pub use error::{Error, Result};
pub use observer::{DismissReason, PhaseEvent, SubscriptionId};
pub use queue::AlertQueue;
