use tracing::{debug, info};

use crate::clients::MessagingGateway;
use crate::core::models::InvocationContext;
use crate::core::roster::{BirthdayEntry, Roster};
use crate::errors::ReminderError;

#[must_use]
pub fn birthday_message(name: &str, age: i32) -> String {
    format!("It is {name}'s birthday! {age} years of greatness, wish it :)")
}

/// Sends one notification per enabled entry whose month and day match today.
///
/// Stops at the first delivery failure; entries after it are not attempted.
/// Returns the names that were celebrated, in roster order.
///
/// # Errors
///
/// Returns the gateway's error for the first failed send.
pub async fn notify_birthdays<G>(
    gateway: &G,
    roster: &Roster,
    ctx: &mut InvocationContext,
) -> Result<Vec<String>, ReminderError>
where
    G: MessagingGateway + ?Sized,
{
    let today = ctx.current_date;
    let mut celebrated = Vec::new();

    for entry in roster.iter() {
        if !entry.enabled {
            debug!(name = %entry.name, "Skipping disabled roster entry");
            continue;
        }
        if !entry.falls_on(today) {
            continue;
        }

        notify_one(gateway, entry, ctx).await?;
        celebrated.push(entry.name.clone());
    }

    Ok(celebrated)
}

async fn notify_one<G>(
    gateway: &G,
    entry: &BirthdayEntry,
    ctx: &mut InvocationContext,
) -> Result<(), ReminderError>
where
    G: MessagingGateway + ?Sized,
{
    let age = entry.age_on(ctx.current_date);
    info!(name = %entry.name, age, "It is {}'s birthday! {} years of greatness :)", entry.name, age);

    let request = ctx.request(birthday_message(&entry.name, age));
    gateway.send(&request).await?;
    ctx.any_notification_sent = true;
    Ok(())
}
