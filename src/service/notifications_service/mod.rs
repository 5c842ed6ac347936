mod dto;
mod error;
mod notifications_service;
mod notifications_service_impl;

pub use dto::*;
pub use error::*;
pub use notifications_service::*;
pub use notifications_service_impl::*;
