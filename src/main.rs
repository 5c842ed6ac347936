use fcm_relay::application::{self, ApplicationEnv};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let state = application::create_state(&env)?;
    let middleware = application::create_middleware(&env);
    let app = application::create_application(state, middleware);

    let listener = tokio::net::TcpListener::bind(env.bind_address).await?;
    tracing::info!("server listening on {}", env.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(application::shutdown_signal())
        .await?;

    Ok(())
}
