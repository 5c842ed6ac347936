use crate::service::notifications_service;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: missing required parameters")]
    MissingParameters,

    #[error("delivery error: {0}")]
    Delivery(#[from] notifications_service::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::MissingParameters => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing required parameters" })),
            ),
            Error::Delivery(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": "Failed to send notification",
                    "details": err.details(),
                })),
            ),
        }
        .into_response()
    }
}
