//! Reminder Lambda handler and notification policies

pub mod birthdays;
pub mod handler;
pub mod heartbeat;

// Re-export the main handler for convenience
pub use handler::{handler, invoke, run_invocation};
