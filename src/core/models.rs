use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub recipient: u64,
    pub originator: String,
    pub body: String,
}

/// Confirmation returned by a gateway after a successful send.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub message_id: Option<String>,
    pub recipients: u32,
}

/// Per-invocation state. Nothing here outlives a single run.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub current_date: NaiveDate,
    pub recipient: u64,
    pub originator: String,
    pub any_notification_sent: bool,
}

impl InvocationContext {
    #[must_use]
    pub fn new(current_date: NaiveDate, recipient: u64, originator: impl Into<String>) -> Self {
        Self {
            current_date,
            recipient,
            originator: originator.into(),
            any_notification_sent: false,
        }
    }

    /// Builds a request addressed to this invocation's recipient.
    #[must_use]
    pub fn request(&self, body: String) -> NotificationRequest {
        NotificationRequest {
            recipient: self.recipient,
            originator: self.originator.clone(),
            body,
        }
    }
}

/// What an invocation ended up sending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvocationReport {
    pub current_date: Option<NaiveDate>,
    pub celebrated: Vec<String>,
    pub heartbeat_sent: bool,
}

impl InvocationReport {
    #[must_use]
    pub fn notifications_sent(&self) -> usize {
        self.celebrated.len() + usize::from(self.heartbeat_sent)
    }
}
