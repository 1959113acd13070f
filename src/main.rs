use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, RestConfig};
use reminders_core::{InMemoryReminderStore, ReminderService};

/// Main entry point for the reminders application
///
/// Starts the REST server on the configured address. The reminder store lives in process
/// memory: one instance is built here and shared by every request handler until shutdown.
///
/// # Environment Variables
/// - `REMINDERS_REST_ADDR`: REST server address (default: "0.0.0.0:8080")
/// - `REMINDERS_SWAGGER_UI`: serve Swagger UI and the OpenAPI document (default: true)
/// - `RUST_LOG`: tracing filter directives, added to the defaults `reminders=info` and
///   `api_rest=info`
///
/// # Returns
/// * `Ok(())` - If the server starts, runs and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration is invalid, binding fails, or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reminders=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RestConfig::from_env_values(
        std::env::var("REMINDERS_REST_ADDR").ok(),
        std::env::var("REMINDERS_SWAGGER_UI").ok(),
    )?;

    let store = Arc::new(InMemoryReminderStore::new());
    let state = AppState::new(ReminderService::new(store));
    let app = api_rest::router(state, cfg.swagger_ui());

    tracing::info!("++ Starting reminders REST on {}", cfg.addr());
    if cfg.swagger_ui() {
        tracing::info!("++ Swagger UI at http://{}/swagger-ui/", cfg.addr());
    }

    let listener = tokio::net::TcpListener::bind(cfg.addr()).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
}
