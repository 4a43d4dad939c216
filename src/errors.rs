use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReminderError {
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    #[error("Failed to deliver notification: {0}")]
    DeliveryError(String),
}

impl ReminderError {
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, ReminderError::ConfigurationError(_))
    }

    #[must_use]
    pub fn is_delivery(&self) -> bool {
        matches!(self, ReminderError::DeliveryError(_))
    }
}

impl From<reqwest::Error> for ReminderError {
    fn from(error: reqwest::Error) -> Self {
        ReminderError::DeliveryError(error.to_string())
    }
}

impl From<serde_json::Error> for ReminderError {
    fn from(error: serde_json::Error) -> Self {
        ReminderError::ConfigurationError(format!("roster parse: {error}"))
    }
}

impl From<std::io::Error> for ReminderError {
    fn from(error: std::io::Error) -> Self {
        ReminderError::ConfigurationError(format!("roster read: {error}"))
    }
}
