use std::env;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ReminderError;

/// Sender label used when `ORIGINATOR` is not set.
pub const DEFAULT_ORIGINATOR: &str = "HB reminder";

// MessageBird accepts an alphanumeric sender of up to 11 characters or a numeric one of up to 17 digits.
static ALPHANUMERIC_ORIGINATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9 ]{1,11}$").expect("valid originator regex")
});
static NUMERIC_ORIGINATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9]{1,17}$").expect("valid originator regex")
});

/// Where the roster document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    Bundled,
    Inline(String),
    File(PathBuf),
    SsmParameter(String),
}

impl std::fmt::Display for RosterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterSource::Bundled => write!(f, "bundled"),
            RosterSource::Inline(_) => write!(f, "inline"),
            RosterSource::File(path) => write!(f, "file:{}", path.display()),
            RosterSource::SsmParameter(name) => write!(f, "ssm:{name}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub phone_number: u64,
    pub originator: String,
    pub timezone: Tz,
    pub roster_source: RosterSource,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ReminderError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReminderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let phone_number = get("PHONE_NUMBER")
            .ok_or_else(|| ReminderError::ConfigurationError("PHONE_NUMBER: not set".to_string()))?
            .parse::<u64>()
            .map_err(|e| ReminderError::ConfigurationError(format!("PHONE_NUMBER: {e}")))?;

        let originator = get("ORIGINATOR").unwrap_or_else(|| DEFAULT_ORIGINATOR.to_string());
        if !is_valid_originator(&originator) {
            return Err(ReminderError::ConfigurationError(format!(
                "ORIGINATOR: '{originator}' is not a valid sender label"
            )));
        }

        let timezone = match get("REMINDER_TIMEZONE") {
            Some(name) => name.parse::<Tz>().map_err(|e| {
                ReminderError::ConfigurationError(format!("REMINDER_TIMEZONE: {e}"))
            })?,
            None => Tz::UTC,
        };

        let roster_source = if let Some(json) = get("ROSTER_JSON") {
            RosterSource::Inline(json)
        } else if let Some(path) = get("ROSTER_PATH") {
            RosterSource::File(PathBuf::from(path))
        } else if let Some(name) = get("ROSTER_SSM_PARAMETER") {
            RosterSource::SsmParameter(name)
        } else {
            RosterSource::Bundled
        };

        Ok(Self {
            phone_number,
            originator,
            timezone,
            roster_source,
        })
    }

    /// Calendar date of `now` in the configured time zone.
    #[must_use]
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.timezone).date_naive()
    }
}

fn is_valid_originator(originator: &str) -> bool {
    ALPHANUMERIC_ORIGINATOR.is_match(originator) || NUMERIC_ORIGINATOR.is_match(originator)
}
