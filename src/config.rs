// SPDX-License-Identifier: MPL-2.0
//! Presentation preferences, persisted to a `settings.toml` file.
//!
//! Hosts usually construct a [`Config`] directly or let the user tweak
//! it; `load`/`save` handle the on-disk copy under the platform config
//! directory.
//!
//! # Examples
//!
//! ```no_run
//! use iced_alerts::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.anchor = Some(config::Anchor::TopRight);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::alert::Severity;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedAlerts";

// ==========================================================================
// Defaults
// ==========================================================================

/// Default interval between auto-dismiss deadline checks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum allowed tick interval.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Maximum allowed tick interval.
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

/// Default display duration for success and info alerts (in seconds).
pub const DEFAULT_NOTICE_DURATION_SECS: u64 = 3;

/// Default display duration for warning alerts (in seconds).
pub const DEFAULT_WARNING_DURATION_SECS: u64 = 5;

/// Minimum allowed display duration.
pub const MIN_DURATION_SECS: u64 = 1;

/// Maximum allowed display duration.
pub const MAX_DURATION_SECS: u64 = 60;

/// Screen corner where the toast overlay is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

/// Presentation preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Corner where toasts appear.
    #[serde(default)]
    pub anchor: Option<Anchor>,
    /// How often the host should tick the controller, in milliseconds.
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
    /// Display duration for success/info alerts, in seconds.
    #[serde(default)]
    pub notice_duration_secs: Option<u64>,
    /// Display duration for warning alerts, in seconds.
    #[serde(default)]
    pub warning_duration_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anchor: Some(Anchor::BottomRight),
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
            notice_duration_secs: Some(DEFAULT_NOTICE_DURATION_SECS),
            warning_duration_secs: Some(DEFAULT_WARNING_DURATION_SECS),
        }
    }
}

impl Config {
    /// Returns the effective anchor corner.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor.unwrap_or_default()
    }

    /// Returns the effective tick interval, clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let ms = self
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Returns the display duration in effect for a severity, clamped
    /// to the supported range.
    ///
    /// `None` for errors, which always require manual dismissal. Hosts
    /// apply this when building alerts:
    ///
    /// ```
    /// use iced_alerts::config::Config;
    /// use iced_alerts::{Alert, Severity};
    ///
    /// let config = Config::default();
    /// let mut alert = Alert::warning("low disk space")?;
    /// if let Some(duration) = config.duration_for(Severity::Warning) {
    ///     alert = alert.with_duration(duration)?;
    /// }
    /// # Ok::<(), iced_alerts::Error>(())
    /// ```
    #[must_use]
    pub fn duration_for(&self, severity: Severity) -> Option<Duration> {
        let configured = match severity {
            Severity::Success | Severity::Info => self.notice_duration_secs,
            Severity::Warning => self.warning_duration_secs,
            Severity::Error => return None,
        };
        configured
            .map(|secs| Duration::from_secs(secs.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS)))
            .or_else(|| severity.auto_dismiss_duration())
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
