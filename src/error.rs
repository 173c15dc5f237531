// SPDX-License-Identifier: MPL-2.0
use crate::alert::AlertId;
use std::fmt;

/// Errors reported by the alert engine.
///
/// Every variant is recoverable: a presentation utility must never take
/// the host application down, so failures are returned as values and the
/// caller decides whether to log or ignore them.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An alert with the same id is already queued or currently shown.
    DuplicateAlert(AlertId),

    /// The alert descriptor failed validation at construction time.
    InvalidAlert(String),

    /// `dismiss_current` was called while no alert is showing.
    NoActiveAlert,

    /// Configuration could not be read or written.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateAlert(id) => write!(f, "Duplicate alert: {}", id),
            Error::InvalidAlert(reason) => write!(f, "Invalid alert: {}", reason),
            Error::NoActiveAlert => write!(f, "No alert is currently showing"),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::Alert;

    #[test]
    fn display_formats_duplicate_alert() {
        let alert = Alert::info("test").expect("valid alert");
        let err = Error::DuplicateAlert(alert.id());
        assert!(format!("{}", err).starts_with("Duplicate alert: "));
    }

    #[test]
    fn display_formats_invalid_alert() {
        let err = Error::InvalidAlert("message text is empty".to_string());
        assert_eq!(format!("{}", err), "Invalid alert: message text is empty");
    }

    #[test]
    fn display_formats_no_active_alert() {
        assert_eq!(
            format!("{}", Error::NoActiveAlert),
            "No alert is currently showing"
        );
    }

    #[test]
    fn from_io_error_produces_config_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Config(message) => assert!(message.contains("boom")),
            _ => panic!("expected Config variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
