// SPDX-License-Identifier: MPL-2.0
//! Core alert data structures.
//!
//! This module defines the immutable `Alert` descriptor, its `AlertId`
//! identity token, and the `Severity` scale that drives styling and
//! auto-dismiss timing.

use crate::error::{Error, Result};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for an alert.
///
/// Assigned once at creation and used for de-duplication and
/// cancellation. Two alerts are the same alert exactly when their ids
/// are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(u64);

impl AlertId {
    /// Creates a new unique alert ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alert-{}", self.0)
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (3s duration).
    #[default]
    Success,
    /// Informational message (3s duration).
    Info,
    /// Warning that doesn't block operation (5s duration).
    Warning,
    /// Error requiring attention (manual dismiss).
    Error,
}

impl Severity {
    /// Returns the default auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None, // Manual dismiss required
        }
    }
}

/// An immutable descriptor for one alert.
///
/// Created by the host, validated at construction, and never mutated
/// afterwards. Equality is by [`AlertId`] only; two alerts with the
/// same text are still distinct alerts.
#[derive(Debug, Clone)]
pub struct Alert {
    /// Unique identifier for this alert.
    id: AlertId,
    /// Severity level (determines accent color and auto-dismiss behavior).
    severity: Severity,
    /// Optional short title shown above the message.
    title: Option<String>,
    /// The message text shown to the user.
    message: String,
    /// When this alert was created.
    created_at: Instant,
    /// Custom auto-dismiss duration (overrides severity default).
    custom_dismiss_duration: Option<Duration>,
}

impl Alert {
    /// Creates a new alert with the given severity and message.
    ///
    /// Fails with [`Error::InvalidAlert`] if the message is empty or
    /// consists only of whitespace.
    pub fn new(severity: Severity, message: impl Into<String>) -> Result<Self> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(Error::InvalidAlert("message text is empty".to_string()));
        }

        Ok(Self {
            id: AlertId::new(),
            severity,
            title: None,
            message,
            created_at: Instant::now(),
            custom_dismiss_duration: None,
        })
    }

    /// Creates a success alert.
    pub fn success(message: impl Into<String>) -> Result<Self> {
        Self::new(Severity::Success, message)
    }

    /// Creates an info alert.
    pub fn info(message: impl Into<String>) -> Result<Self> {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning alert.
    pub fn warning(message: impl Into<String>) -> Result<Self> {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error alert.
    pub fn error(message: impl Into<String>) -> Result<Self> {
        Self::new(Severity::Error, message)
    }

    /// Adds a short title shown above the message.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    ///
    /// Fails with [`Error::InvalidAlert`] on a zero duration; pass no
    /// duration at all for alerts that should stay until dismissed.
    pub fn with_duration(mut self, duration: Duration) -> Result<Self> {
        if duration.is_zero() {
            return Err(Error::InvalidAlert(
                "auto-dismiss duration must be positive".to_string(),
            ));
        }
        self.custom_dismiss_duration = Some(duration);
        Ok(self)
    }

    /// Returns the alert's unique ID.
    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the optional title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this alert was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the auto-dismiss duration in effect for this alert.
    ///
    /// A custom duration takes precedence over the severity default.
    /// `None` means the alert stays until dismissed manually.
    #[must_use]
    pub fn effective_duration(&self) -> Option<Duration> {
        self.custom_dismiss_duration
            .or_else(|| self.severity.auto_dismiss_duration())
    }
}

impl PartialEq for Alert {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Alert {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_ids_are_unique() {
        let a = Alert::success("test").unwrap();
        let b = Alert::success("test").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn empty_message_is_rejected() {
        assert!(matches!(
            Alert::info(""),
            Err(Error::InvalidAlert(_))
        ));
        assert!(matches!(
            Alert::info("   \t\n"),
            Err(Error::InvalidAlert(_))
        ));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let result = Alert::info("test")
            .unwrap()
            .with_duration(Duration::ZERO);
        assert!(matches!(result, Err(Error::InvalidAlert(_))));
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let success_duration = Severity::Success.auto_dismiss_duration().unwrap();
        let warning_duration = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning_duration > success_duration);
    }

    #[test]
    fn custom_duration_overrides_severity_default() {
        let alert = Alert::success("test")
            .unwrap()
            .with_duration(Duration::from_secs(10))
            .unwrap();
        assert_eq!(alert.effective_duration(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn effective_duration_falls_back_to_severity() {
        let alert = Alert::warning("test").unwrap();
        assert_eq!(alert.effective_duration(), Some(Duration::from_secs(5)));

        let alert = Alert::error("test").unwrap();
        assert_eq!(alert.effective_duration(), None);
    }

    #[test]
    fn builder_sets_title() {
        let alert = Alert::error("disk full").unwrap().with_title("Save failed");
        assert_eq!(alert.title(), Some("Save failed"));
        assert_eq!(alert.message(), "disk full");
    }

    #[test]
    fn constructors_set_correct_severity() {
        assert_eq!(Alert::success("x").unwrap().severity(), Severity::Success);
        assert_eq!(Alert::info("x").unwrap().severity(), Severity::Info);
        assert_eq!(Alert::warning("x").unwrap().severity(), Severity::Warning);
        assert_eq!(Alert::error("x").unwrap().severity(), Severity::Error);
    }

    #[test]
    fn equality_is_by_id_only() {
        let a = Alert::info("same text").unwrap();
        let b = Alert::info("same text").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
