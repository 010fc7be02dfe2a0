//! DriveHub Server — cached OneDrive file listing service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use drivehub_core::config::AppConfig;
use drivehub_core::error::AppError;
use drivehub_core::traits::drive::DriveLister;
use drivehub_core::traits::store::DocumentStore;
use drivehub_graph::GraphClient;
use drivehub_service::ListingService;
use drivehub_store::StoreManager;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("DRIVEHUB_ENV").unwrap_or_else(|_| "production".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DriveHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Document store ───────────────────────────────────
    // Initialization failure is not fatal: the server still serves,
    // and file requests report a configuration error instead.
    let store = match StoreManager::new(&config.store) {
        Ok(store) => {
            tracing::info!(provider = %config.store.provider, "Document store initialized");
            Some(Arc::new(store))
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                "Document store initialization failed; file requests will return a configuration error"
            );
            None
        }
    };

    // ── Step 2: Graph client ─────────────────────────────────────
    let drive = Arc::new(GraphClient::new(config.graph.clone()));

    // ── Step 3: Listing service ──────────────────────────────────
    let listing = store.as_ref().map(|store| {
        Arc::new(ListingService::new(
            Arc::clone(store) as Arc<dyn DocumentStore>,
            Arc::clone(&drive) as Arc<dyn DriveLister>,
            config.cache.clone(),
        ))
    });

    // ── Step 4: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = drivehub_api::state::AppState {
        config: Arc::new(config),
        store,
        listing,
    };

    let app = drivehub_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("DriveHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("DriveHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
