use super::Error;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessTokenService: Send + Sync {
    ///
    /// Mint a fresh access token authorizing a single downstream call.
    ///
    /// Every call signs a new assertion and performs a full round trip
    /// to the token endpoint. Tokens are never cached.
    ///
    /// ### Returns
    /// Opaque bearer token, valid for one hour from issuance
    ///
    /// ### Errors
    /// - [Error::Sign] when the assertion cannot be signed
    /// - [Error::Exchange] when the token endpoint is unreachable
    ///   or returns an unreadable body
    /// - [Error::Rejected] when the token endpoint rejects the assertion
    ///
    async fn mint(&self) -> Result<String, Error>;
}
