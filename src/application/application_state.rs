use super::ApplicationEnv;
use crate::service::{
    access_token_service::{
        AccessTokenServiceConfig, AccessTokenServiceImpl, ServiceAccount,
    },
    notifications_service::{
        NotificationsService, NotificationsServiceConfig, NotificationsServiceImpl,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub notifications_service: Arc<dyn NotificationsService>,
}

pub fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("loading service account credential");
    let service_account = ServiceAccount::from_file(&env.service_account_path)?;

    tracing::info!("creating services");
    let http_client = reqwest::Client::new();

    let access_token_service = AccessTokenServiceImpl::new(
        AccessTokenServiceConfig {
            scope: env.messaging_scope.clone(),
        },
        service_account,
        http_client.clone(),
    )?;

    let notifications_service = NotificationsServiceImpl::new(
        NotificationsServiceConfig {
            project_id: env.project_id.clone(),
            fcm_endpoint: env.fcm_endpoint.clone(),
        },
        Arc::new(access_token_service),
        http_client,
    );

    Ok(ApplicationState {
        notifications_service: Arc::new(notifications_service),
    })
}
