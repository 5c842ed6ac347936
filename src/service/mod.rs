pub mod access_token_service;
pub mod notifications_service;
