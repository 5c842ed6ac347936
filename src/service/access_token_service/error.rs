use reqwest::StatusCode;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to sign assertion: {0}")]
    Sign(#[from] jsonwebtoken::errors::Error),

    #[error("token exchange failed: {0}")]
    Exchange(#[from] reqwest::Error),

    #[error("token endpoint rejected assertion: {status}")]
    Rejected { status: StatusCode, details: Value },
}
