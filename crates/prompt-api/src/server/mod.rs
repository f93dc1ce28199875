//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::path::Path;

use axum::Router;
use prompt_common::{AppConfig, AppError};
use prompt_db::{create_pool, run_migrations, PoolConfig};
use prompt_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, fallback, health_routes};
use crate::state::AppState;

/// Migrations directory, relative to the working directory
pub const MIGRATIONS_DIR: &str = "migrations";

/// Build the complete Axum application with all routes and middleware
///
/// Health routes are not rate limited.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    let api = apply_rate_limit(create_router(), &config.rate_limit);
    let router = fallback(health_routes().merge(api));
    let router = apply_middleware(
        router,
        &config.cors,
        config.env.is_production(),
        config.server.request_timeout(),
    );

    router.with_state(state)
}

/// Connect to PostgreSQL, optionally migrate, and build the service context
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    if config.database.run_migrations {
        info!(dir = MIGRATIONS_DIR, "Running database migrations");
        run_migrations(&pool, Path::new(MIGRATIONS_DIR))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let service_context = ServiceContext::from_pool(pool, config.view_counter.queue_capacity);

    Ok(AppState::new(service_context, config))
}

/// Serve `app` until a shutdown signal arrives
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener.local_addr().map_err(AppError::internal)?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the complete server with configuration
///
/// After the listener stops, the view counter is drained and the pool closed.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config
        .server
        .socket_addr()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let state = create_app_state(config).await?;
    let app = create_app(state.clone());

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    let result = run_server(app, listener).await;

    info!("Server stopped accepting connections, cleaning up");
    state.service_context().shutdown().await;
    info!("Graceful shutdown complete");

    result
}

/// Wait for Ctrl-C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
