use super::Error;
use axum::async_trait;
use serde_json::Value;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Forward a notification to the provider.
    ///
    /// Mints a fresh access token, then submits a single high-priority
    /// message to the device identified by `token`. Nothing is retried.
    ///
    /// ### Returns
    /// Provider's response body, verbatim
    ///
    /// ### Errors
    /// - [Error::Auth] when the access token cannot be minted;
    ///   the message is not submitted in that case
    /// - [Error::Send] when the provider is unreachable
    /// - [Error::Rejected] when the provider rejects the message
    ///
    async fn send(&self, token: String, title: String, body: String) -> Result<Value, Error>;
}
