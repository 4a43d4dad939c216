use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::clients::MessagingGateway;
use crate::core::models::InvocationContext;
use crate::errors::ReminderError;

pub const HEARTBEAT_MESSAGE: &str = "hb-reminder is still standing strong!";

/// First day of February, April, June, August, October and December.
#[must_use]
pub fn is_heartbeat_day(date: NaiveDate) -> bool {
    date.day() == 1 && date.month() % 2 == 0
}

/// Sends the liveness message when nothing else went out today.
///
/// Returns whether a heartbeat was sent.
///
/// # Errors
///
/// Returns the gateway's error if the send fails.
pub async fn send_heartbeat_if_due<G>(
    gateway: &G,
    ctx: &InvocationContext,
) -> Result<bool, ReminderError>
where
    G: MessagingGateway + ?Sized,
{
    if ctx.any_notification_sent || !is_heartbeat_day(ctx.current_date) {
        return Ok(false);
    }

    info!(date = %ctx.current_date, "No birthday today, sending heartbeat");
    gateway
        .send(&ctx.request(HEARTBEAT_MESSAGE.to_string()))
        .await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn heartbeat_days_are_the_first_of_even_months() {
        for month in [2, 4, 6, 8, 10, 12] {
            assert!(is_heartbeat_day(date(2024, month, 1)), "month {month}");
        }
        for month in [1, 3, 5, 7, 9, 11] {
            assert!(!is_heartbeat_day(date(2024, month, 1)), "month {month}");
        }
        assert!(!is_heartbeat_day(date(2024, 4, 2)));
        assert!(!is_heartbeat_day(date(2024, 6, 30)));
    }
}
