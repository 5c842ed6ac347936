use fcm_relay::{
    application::{create_application, ApplicationMiddleware, ApplicationState},
    service::{
        access_token_service::{AccessTokenServiceConfig, AccessTokenServiceImpl, ServiceAccount},
        notifications_service::{NotificationsServiceConfig, NotificationsServiceImpl},
    },
};
use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub const PROJECT_ID: &str = "mecocevent2025";
pub const CLIENT_EMAIL: &str = "relay@mecocevent2025.iam.gserviceaccount.com";
pub const MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";

pub const TEST_RSA_PEM: &str = include_str!("../data/test_rsa.pem");

pub const MAX_HTTP_CONTENT_LEN: usize = 16 * 1024;

///
/// Spawns the relay on an ephemeral port with both provider endpoints
/// pointed at the given base URLs.
///
/// ### Returns
/// Base URL of the spawned relay
///
pub async fn spawn_relay(token_uri: String, fcm_endpoint: String) -> String {
    let service_account = ServiceAccount {
        client_email: CLIENT_EMAIL.to_string(),
        private_key: TEST_RSA_PEM.to_string(),
        token_uri,
    };

    let access_token_service = AccessTokenServiceImpl::new(
        AccessTokenServiceConfig {
            scope: MESSAGING_SCOPE.to_string(),
        },
        service_account,
        reqwest::Client::new(),
    )
    .unwrap();

    let notifications_service = NotificationsServiceImpl::new(
        NotificationsServiceConfig {
            project_id: PROJECT_ID.to_string(),
            fcm_endpoint,
        },
        Arc::new(access_token_service),
        reqwest::Client::new(),
    );

    let state = ApplicationState {
        notifications_service: Arc::new(notifications_service),
    };
    let middleware = ApplicationMiddleware {
        body_limit: RequestBodyLimitLayer::new(MAX_HTTP_CONTENT_LEN),
        trace: TraceLayer::new_for_http(),
    };

    let app = create_application(state, middleware);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{address}")
}
