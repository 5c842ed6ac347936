mod access_token_service;
mod access_token_service_impl;
mod dto;
mod error;

pub use access_token_service::*;
pub use access_token_service_impl::*;
pub use dto::*;
pub use error::*;
