#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use hb_reminder::clients::MessagingGateway;
use hb_reminder::core::{DeliveryReceipt, NotificationRequest};
use hb_reminder::errors::ReminderError;

/// Gateway double that records every attempted send.
///
/// When `fail_on_attempt` is set, that attempt (1-based) fails with a delivery error.
#[derive(Default)]
pub struct RecordingGateway {
    attempts: Mutex<Vec<NotificationRequest>>,
    fail_on_attempt: Option<usize>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(attempt: usize) -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            fail_on_attempt: Some(attempt),
        }
    }

    pub fn attempts(&self) -> Vec<NotificationRequest> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn bodies(&self) -> Vec<String> {
        self.attempts().into_iter().map(|r| r.body).collect()
    }
}

#[async_trait]
impl MessagingGateway for RecordingGateway {
    async fn send(&self, request: &NotificationRequest) -> Result<DeliveryReceipt, ReminderError> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            attempts.push(request.clone());
            attempts.len()
        };

        if self.fail_on_attempt == Some(attempt) {
            return Err(ReminderError::DeliveryError("gateway unavailable".to_string()));
        }

        Ok(DeliveryReceipt {
            message_id: Some(format!("msg-{attempt}")),
            recipients: 1,
        })
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn env_lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}
