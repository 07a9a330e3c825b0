mod audit;
mod config;
mod context;
mod db;
mod errors;
mod llm_client;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::audit::PgAuditLog;
use crate::config::Config;
use crate::context::StaticContext;
use crate::db::{create_pool, ensure_schema};
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hawk Scorer v{}", env!("CARGO_PKG_VERSION"));

    // Static prompt context; a missing or malformed file stops startup here
    let context = StaticContext::load(&config.schema_path, &config.profile_path)?;

    // Initialize PostgreSQL (application_log document table)
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    // Initialize scoring model client
    let model = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_api_base.clone())?;
    info!("Scoring client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        model: Arc::new(model),
        audit_log: Arc::new(PgAuditLog::new(db)),
        context: Arc::new(context),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM from the platform.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+c, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
