use async_trait::async_trait;

use crate::core::models::{DeliveryReceipt, NotificationRequest};
use crate::errors::ReminderError;

/// Anything that can deliver a text message to a single recipient.
///
/// Implementations report every failure as [`ReminderError::DeliveryError`];
/// callers treat a send as done or failed, with no retry.
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    async fn send(&self, request: &NotificationRequest) -> Result<DeliveryReceipt, ReminderError>;
}
