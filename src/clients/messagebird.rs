//! MessageBird SMS client
//!
//! Sends one message per call through the MessageBird REST API. There is no
//! retry here: a failed send is reported straight back to the caller.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
#[cfg(feature = "debug-logs")]
use tracing::debug;
use tracing::info;

use super::gateway::MessagingGateway;
use crate::core::models::{DeliveryReceipt, NotificationRequest};
use crate::errors::ReminderError;

pub const DEFAULT_BASE_URL: &str = "https://rest.messagebird.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Access key selection for the MessageBird account.
#[derive(Clone)]
pub struct MessageBirdConfig {
    pub access_key: String,
    pub test_mode: bool,
}

impl std::fmt::Debug for MessageBirdConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageBirdConfig")
            .field("access_key", &"<redacted>")
            .field("test_mode", &self.test_mode)
            .finish()
    }
}

impl MessageBirdConfig {
    pub fn from_env() -> Result<Self, ReminderError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Picks `MBIRD_TEST` when `MBIRD_USE_TEST_KEY` is truthy, `MBIRD_LIVE` otherwise.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReminderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let test_mode = lookup("MBIRD_USE_TEST_KEY")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let key_var = if test_mode { "MBIRD_TEST" } else { "MBIRD_LIVE" };

        let access_key = lookup(key_var)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ReminderError::ConfigurationError(format!("{key_var}: not set")))?;

        Ok(Self {
            access_key,
            test_mode,
        })
    }
}

#[derive(Debug, Serialize)]
struct CreateMessageRequest<'a> {
    originator: &'a str,
    recipients: Vec<String>,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateMessageResponse {
    id: Option<String>,
    recipients: Option<RecipientSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipientSummary {
    total_count: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: i64,
    description: String,
    parameter: Option<String>,
}

pub struct MessageBirdClient {
    http: Client,
    access_key: String,
    base_url: String,
    test_mode: bool,
}

impl MessageBirdClient {
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &MessageBirdConfig) -> Result<Self, ReminderError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ReminderError::ConfigurationError(format!("http client: {e}")))?;

        Ok(Self {
            http,
            access_key: config.access_key.clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
            test_mode: config.test_mode,
        })
    }

    /// Points the client at another API root, e.g. a local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url)
    }
}

#[async_trait]
impl MessagingGateway for MessageBirdClient {
    async fn send(&self, request: &NotificationRequest) -> Result<DeliveryReceipt, ReminderError> {
        let payload = CreateMessageRequest {
            originator: &request.originator,
            recipients: vec![request.recipient.to_string()],
            body: &request.body,
        };

        let response = self
            .http
            .post(self.messages_url())
            .header("Authorization", format!("AccessKey {}", self.access_key))
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        #[cfg(feature = "debug-logs")]
        debug!(status = %status, body = %text, "MessageBird response");

        if !status.is_success() {
            return Err(ReminderError::DeliveryError(describe_failure(status, &text)));
        }

        let parsed: CreateMessageResponse = serde_json::from_str(&text).map_err(|e| {
            ReminderError::DeliveryError(format!("unexpected MessageBird response: {e}"))
        })?;

        let receipt = DeliveryReceipt {
            message_id: parsed.id,
            recipients: parsed.recipients.map_or(1, |r| r.total_count),
        };

        info!(
            message_id = receipt.message_id.as_deref().unwrap_or("unknown"),
            recipients = receipt.recipients,
            test_mode = self.test_mode,
            "SMS successfully sent to MessageBird service"
        );
        Ok(receipt)
    }
}

fn describe_failure(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.errors.is_empty() => {
            let details = envelope
                .errors
                .iter()
                .map(|e| match &e.parameter {
                    Some(param) => format!("{} (code {}, parameter {param})", e.description, e.code),
                    None => format!("{} (code {})", e.description, e.code),
                })
                .collect::<Vec<_>>()
                .join("; ");
            format!("MessageBird returned {status}: {details}")
        }
        _ => format!("MessageBird returned {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn live_key_is_used_by_default() {
        let config = MessageBirdConfig::from_lookup(lookup(&[
            ("MBIRD_LIVE", "live_key"),
            ("MBIRD_TEST", "test_key"),
        ]))
        .unwrap();
        assert_eq!(config.access_key, "live_key");
        assert!(!config.test_mode);
    }

    #[test]
    fn test_key_is_selected_by_flag() {
        let config = MessageBirdConfig::from_lookup(lookup(&[
            ("MBIRD_LIVE", "live_key"),
            ("MBIRD_TEST", "test_key"),
            ("MBIRD_USE_TEST_KEY", "true"),
        ]))
        .unwrap();
        assert_eq!(config.access_key, "test_key");
        assert!(config.test_mode);
    }

    #[test]
    fn missing_selected_key_is_a_configuration_error() {
        let err = MessageBirdConfig::from_lookup(lookup(&[
            ("MBIRD_LIVE", "live_key"),
            ("MBIRD_USE_TEST_KEY", "1"),
        ]))
        .unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("MBIRD_TEST"));
    }

    #[test]
    fn debug_output_hides_the_access_key() {
        let config = MessageBirdConfig {
            access_key: "secret".to_string(),
            test_mode: false,
        };
        assert!(!format!("{config:?}").contains("secret"));
    }

    #[test]
    fn failure_description_lists_api_errors() {
        let body = r#"{"errors":[{"code":2,"description":"Request not allowed (incorrect access_key)","parameter":"access_key"}]}"#;
        let msg = describe_failure(StatusCode::UNAUTHORIZED, body);
        assert!(msg.contains("401"));
        assert!(msg.contains("incorrect access_key"));
        assert!(msg.contains("parameter access_key"));
    }

    #[test]
    fn failure_description_tolerates_non_json_bodies() {
        let msg = describe_failure(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(msg, "MessageBird returned 502 Bad Gateway");
    }
}
