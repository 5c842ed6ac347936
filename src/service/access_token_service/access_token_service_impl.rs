use super::{
    AccessTokenService, AccessTokenServiceConfig, AssertionClaims, Error, ServiceAccount,
    TokenResponse,
};
use axum::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::Value;
use time::OffsetDateTime;

const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_VALIDITY_SECS: i64 = 3600;

pub struct AccessTokenServiceImpl {
    config: AccessTokenServiceConfig,
    service_account: ServiceAccount,
    encoding_key: EncodingKey,
    http_client: reqwest::Client,
}

impl AccessTokenServiceImpl {
    ///
    /// Parses the credential's RSA key once, so an invalid key
    /// fails at startup instead of on the first request
    ///
    pub fn new(
        config: AccessTokenServiceConfig,
        service_account: ServiceAccount,
        http_client: reqwest::Client,
    ) -> Result<Self, Error> {
        let encoding_key = EncodingKey::from_rsa_pem(service_account.private_key.as_bytes())?;

        Ok(Self {
            config,
            service_account,
            encoding_key,
            http_client,
        })
    }

    fn sign_assertion(&self) -> Result<String, Error> {
        let iat = OffsetDateTime::now_utc().unix_timestamp();
        let claims = AssertionClaims {
            iss: self.service_account.client_email.clone(),
            sub: self.service_account.client_email.clone(),
            aud: self.service_account.token_uri.clone(),
            iat,
            exp: iat + ASSERTION_VALIDITY_SECS,
            scope: self.config.scope.clone(),
        };

        let assertion =
            jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)?;

        Ok(assertion)
    }
}

#[async_trait]
impl AccessTokenService for AccessTokenServiceImpl {
    async fn mint(&self) -> Result<String, Error> {
        tracing::debug!("minting access token");

        let assertion = self.sign_assertion()?;

        let response = self
            .http_client
            .post(&self.service_account.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let details = serde_json::from_str(&text).unwrap_or(Value::String(text));
            tracing::warn!(%status, "token endpoint rejected assertion");

            return Err(Error::Rejected { status, details });
        }

        let token_response = response.json::<TokenResponse>().await?;
        tracing::debug!("minted access token");

        Ok(token_response.access_token)
    }
}
