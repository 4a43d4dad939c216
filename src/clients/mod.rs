//! Client modules for external API interactions

pub mod gateway;
pub mod messagebird;

pub use gateway::MessagingGateway;
pub use messagebird::{MessageBirdClient, MessageBirdConfig};
