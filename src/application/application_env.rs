use anyhow::anyhow;
use std::net::SocketAddr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub service_account_path: String,
    pub project_id: String,
    pub messaging_scope: String,
    pub fcm_endpoint: String,

    pub max_http_content_len: usize,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("FCM_RELAY_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("FCM_RELAY_LOG_FILENAME")?;
        let bind_address = Self::env_var_or("FCM_RELAY_BIND_ADDRESS", "0.0.0.0:3002").parse()?;
        let service_account_path = Self::env_var("FCM_RELAY_SERVICE_ACCOUNT_PATH")?;
        let project_id = Self::env_var("FCM_RELAY_PROJECT_ID")?;
        let messaging_scope = Self::env_var_or(
            "FCM_RELAY_MESSAGING_SCOPE",
            "https://www.googleapis.com/auth/firebase.messaging",
        );
        let fcm_endpoint =
            Self::env_var_or("FCM_RELAY_FCM_ENDPOINT", "https://fcm.googleapis.com");
        let max_http_content_len =
            Self::env_var_or("FCM_RELAY_MAX_HTTP_CONTENT_LEN", "16384").parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            service_account_path,
            project_id,
            messaging_scope,
            fcm_endpoint,
            max_http_content_len,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn env_var_or(name: &'static str, default: &str) -> String {
        std::env::var(name).unwrap_or_else(|_| default.to_string())
    }
}
