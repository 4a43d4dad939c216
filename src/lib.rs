//! HB reminder - a scheduled Lambda that texts birthday reminders.
//!
//! Once a day the scheduler invokes the function. It compares today's date
//! with every enabled roster entry and sends one SMS per matching birthday
//! through MessageBird. On the first day of an even month with no birthday it
//! sends a heartbeat instead, so silence means something is broken.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for scheduled serverless execution
//! - AWS SSM Parameter Store as an optional roster source
//! - MessageBird's REST API for SMS delivery, behind the `MessagingGateway` trait
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use hb_reminder::clients::{MessageBirdClient, MessageBirdConfig};
//! use hb_reminder::core::Roster;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     hb_reminder::setup_logging();
//!
//!     let gateway = MessageBirdClient::new(&MessageBirdConfig {
//!         access_key: "test_key".to_string(),
//!         test_mode: true,
//!     })?;
//!     let roster = Roster::from_json(r#"[{"name": "Ann", "date": "1990-03-16"}]"#)?;
//!     let today = NaiveDate::from_ymd_opt(2024, 3, 16).ok_or("bad date")?;
//!
//!     let report =
//!         hb_reminder::reminder::run_invocation(&gateway, &roster, 33_612_345_678, "HB reminder", today)
//!             .await?;
//!     println!("Celebrated: {:?}", report.celebrated);
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod core;
pub mod errors;
pub mod reminder;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level defaults to `info` and can be
/// overridden with `RUST_LOG`.
///
/// # Example
///
/// ```
/// hb_reminder::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
