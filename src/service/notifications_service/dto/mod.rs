mod message;
mod notifications_service_config;

pub use message::*;
pub use notifications_service_config::*;
