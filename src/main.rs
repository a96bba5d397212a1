use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use judge_webhook::config::Config;
use judge_webhook::hooks::LoggingHooks;
use judge_webhook::server::{AppState, build_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "judge_webhook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // A missing secret is a valid development mode, but never a silent one.
    match &config.webhook_secret {
        Some(_) => tracing::info!("webhook signature verification enabled"),
        None => tracing::warn!(
            "WEBHOOK_SECRET not set; signature verification is DISABLED and \
             deliveries will be accepted unauthenticated"
        ),
    }

    let app_state = AppState::new(config.webhook_secret.clone(), LoggingHooks);
    let app = build_router(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("invalid listen address");
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("shutdown signal received; stopping server");
}
