use chrono::{DateTime, NaiveDate, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{birthdays, heartbeat};
use crate::clients::{MessageBirdClient, MessageBirdConfig, MessagingGateway};
use crate::core::config::AppConfig;
use crate::core::models::{InvocationContext, InvocationReport};
use crate::core::roster::Roster;
use crate::errors::ReminderError;

/// Evaluates birthdays, then the heartbeat, for one calendar date.
///
/// # Errors
///
/// Returns the first delivery failure; nothing after it is attempted.
pub async fn run_invocation<G>(
    gateway: &G,
    roster: &Roster,
    recipient: u64,
    originator: &str,
    today: NaiveDate,
) -> Result<InvocationReport, ReminderError>
where
    G: MessagingGateway + ?Sized,
{
    let mut ctx = InvocationContext::new(today, recipient, originator);

    let celebrated = birthdays::notify_birthdays(gateway, roster, &mut ctx).await?;
    let heartbeat_sent = heartbeat::send_heartbeat_if_due(gateway, &ctx).await?;

    info!("All the birthdays from the crew have been checked, bye!");
    Ok(InvocationReport {
        current_date: Some(today),
        celebrated,
        heartbeat_sent,
    })
}

/// One scheduled run: read configuration, load the roster, then evaluate.
///
/// Configuration is resolved through `lookup` so nothing reaches the gateway
/// when a required value is missing or malformed.
///
/// # Errors
///
/// Returns a configuration error before any send, or the first delivery error.
pub async fn invoke<F, G>(
    lookup: F,
    gateway: &G,
    now: DateTime<Utc>,
) -> Result<InvocationReport, ReminderError>
where
    F: Fn(&str) -> Option<String>,
    G: MessagingGateway + ?Sized,
{
    let config = AppConfig::from_lookup(lookup)?;
    let roster = Roster::load(&config.roster_source).await?;
    let today = config.today(now);
    info!(date = %today, timezone = %config.timezone, "Checking birthdays");

    run_invocation(
        gateway,
        &roster,
        config.phone_number,
        &config.originator,
        today,
    )
    .await
}

/// Lambda handler for the scheduled trigger. The event payload is ignored.
///
/// # Errors
///
/// Fails the invocation on any configuration or delivery error.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<(), Error> {
    info!("Reminder Lambda triggered");

    let gateway_config = MessageBirdConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let gateway = MessageBirdClient::new(&gateway_config).map_err(|e| {
        error!("Failed to initialize MessageBird client: {}", e);
        Error::from(e)
    })?;
    if gateway.test_mode() {
        info!("Using MessageBird test key, messages will not be delivered");
    }

    let report = invoke(|key| std::env::var(key).ok(), &gateway, Utc::now())
        .await
        .map_err(|e| {
            error!("Invocation failed: {}", e);
            Error::from(e)
        })?;

    info!(
        celebrated = ?report.celebrated,
        heartbeat_sent = report.heartbeat_sent,
        notifications = report.notifications_sent(),
        "Invocation complete"
    );
    Ok(())
}

pub use self::function_handler as handler;
