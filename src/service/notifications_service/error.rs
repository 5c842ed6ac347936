use crate::service::access_token_service;
use reqwest::StatusCode;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("auth error: {0}")]
    Auth(#[from] access_token_service::Error),

    #[error("send request failed: {0}")]
    Send(#[from] reqwest::Error),

    #[error("provider rejected message: {status}")]
    Rejected { status: StatusCode, details: Value },
}

impl Error {
    ///
    /// Detail relayed to the caller: the error payload captured from
    /// the provider or the token endpoint, otherwise the error message
    ///
    pub fn details(&self) -> Value {
        match self {
            Error::Rejected { details, .. } => details.clone(),
            Error::Auth(access_token_service::Error::Rejected { details, .. }) => details.clone(),
            err => Value::String(err.to_string()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn details_returns_captured_provider_payload() {
        let payload = json!({
            "error": { "code": 404, "status": "NOT_FOUND" }
        });
        let error = Error::Rejected {
            status: StatusCode::NOT_FOUND,
            details: payload.clone(),
        };

        assert_eq!(error.details(), payload);
    }

    #[test]
    fn details_returns_token_endpoint_payload() {
        let payload = json!({ "error": "invalid_grant" });
        let error = Error::Auth(access_token_service::Error::Rejected {
            status: StatusCode::UNAUTHORIZED,
            details: payload.clone(),
        });

        assert_eq!(error.details(), payload);
    }

    #[test]
    fn details_falls_back_to_error_message() {
        let error = Error::Auth(access_token_service::Error::Sign(
            jsonwebtoken::errors::ErrorKind::InvalidToken.into(),
        ));

        let details = error.details();

        let message = details.as_str().unwrap();
        assert!(message.starts_with("auth error: failed to sign assertion"));
    }
}
