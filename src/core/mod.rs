//! Configuration, roster and shared data types

pub mod config;
pub mod models;
pub mod roster;

pub use config::{AppConfig, RosterSource};
pub use models::{DeliveryReceipt, InvocationContext, InvocationReport, NotificationRequest};
pub use roster::{BirthdayEntry, Roster};
