mod access_token_service_config;
mod assertion_claims;
mod service_account;
mod token_response;

pub use access_token_service_config::*;
pub use assertion_claims::*;
pub use service_account::*;
pub use token_response::*;
