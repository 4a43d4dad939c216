use std::collections::HashSet;
use std::path::Path;

use aws_sdk_ssm::Client as SsmClient;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use tracing::info;

use super::config::RosterSource;
use crate::errors::ReminderError;

/// Roster shipped with the binary, used when no other source is configured.
pub const BUNDLED_ROSTER: &str = include_str!("../../roster.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BirthdayEntry {
    pub name: String,
    #[serde(rename = "date")]
    pub birthdate: NaiveDate,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl BirthdayEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, birthdate: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birthdate,
            enabled: true,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Month and day match; the year is ignored.
    #[must_use]
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.birthdate.month() == date.month() && self.birthdate.day() == date.day()
    }

    #[must_use]
    pub fn age_on(&self, date: NaiveDate) -> i32 {
        date.year() - self.birthdate.year()
    }
}

/// Validated, read-only set of birthdays keyed by unique name.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<BirthdayEntry>,
}

impl Roster {
    /// # Errors
    ///
    /// Returns a configuration error for blank or duplicate names.
    pub fn new(entries: Vec<BirthdayEntry>) -> Result<Self, ReminderError> {
        let mut seen = HashSet::new();
        let mut validated = Vec::with_capacity(entries.len());

        for mut entry in entries {
            let name = entry.name.trim().to_string();
            if name.is_empty() {
                return Err(ReminderError::ConfigurationError(format!(
                    "roster entry dated {} has a blank name",
                    entry.birthdate
                )));
            }
            if !seen.insert(name.clone()) {
                return Err(ReminderError::ConfigurationError(format!(
                    "roster lists '{name}' more than once"
                )));
            }
            entry.name = name;
            validated.push(entry);
        }

        Ok(Self { entries: validated })
    }

    /// # Errors
    ///
    /// Returns a configuration error if the document is not a valid roster.
    pub fn from_json(document: &str) -> Result<Self, ReminderError> {
        let entries: Vec<BirthdayEntry> = serde_json::from_str(document)?;
        Self::new(entries)
    }

    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ReminderError> {
        let document = std::fs::read_to_string(path)?;
        Self::from_json(&document)
    }

    /// # Errors
    ///
    /// Returns a configuration error if the bundled document is invalid.
    pub fn bundled() -> Result<Self, ReminderError> {
        Self::from_json(BUNDLED_ROSTER)
    }

    /// Loads the roster from the configured source.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the source is unreachable or the
    /// document does not validate.
    pub async fn load(source: &RosterSource) -> Result<Self, ReminderError> {
        let roster = match source {
            RosterSource::Bundled => Self::bundled()?,
            RosterSource::Inline(document) => Self::from_json(document)?,
            RosterSource::File(path) => Self::from_file(path)?,
            RosterSource::SsmParameter(name) => Self::from_json(&fetch_ssm_parameter(name).await?)?,
        };

        info!(
            source = %source,
            entries = roster.len(),
            enabled = roster.enabled().count(),
            "Roster loaded"
        );
        Ok(roster)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BirthdayEntry> {
        self.entries.iter()
    }

    pub fn enabled(&self) -> impl Iterator<Item = &BirthdayEntry> {
        self.entries.iter().filter(|entry| entry.enabled)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BirthdayEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

async fn fetch_ssm_parameter(name: &str) -> Result<String, ReminderError> {
    let shared = aws_config::from_env().load().await;
    let client = SsmClient::new(&shared);

    let resp = client
        .get_parameter()
        .name(name)
        .with_decryption(true)
        .send()
        .await
        .map_err(|e| ReminderError::ConfigurationError(format!("ssm get_parameter {name}: {e}")))?;

    resp.parameter
        .and_then(|param| param.value().map(str::to_string))
        .ok_or_else(|| {
            ReminderError::ConfigurationError(format!("ssm parameter {name} has no value"))
        })
}
