//! # Users Gateway Server
//!
//! Main entry point. Resolves the remote users service binding, then serves
//! the REST API until a shutdown signal arrives.

use gateway_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use gateway_core::{GatewayError, GatewayResult};
use gateway_grpc::create_remote_users_service;
use gateway_rest::{create_router, AppState, UsersBinding};
use gateway_service::UsersService;
use tokio::signal;
use tracing::{error, info};

mod telemetry;

#[tokio::main]
async fn main() {
    let config = ConfigLoader::from_default_location().map(|loader| loader.get());

    let observability = config
        .as_ref()
        .map(|c| c.observability.clone())
        .unwrap_or_else(|_| ObservabilityConfig::default());
    telemetry::init_logging(&observability);

    info!("Starting users gateway...");
    info!(version = env!("CARGO_PKG_VERSION"), "Gateway version");

    let result = match config {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!(error = %e, "Application error");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> GatewayResult<()> {
    info!(environment = %config.app.environment, "Environment");
    info!(url = %config.upstream.users_url, "Users service");

    // No operation can proceed without the binding, so failure here is fatal
    let remote = create_remote_users_service(&config.upstream).await?;
    let users_service = UsersService::new(remote);

    let state = AppState::new(users_service, UsersBinding::from(&config.upstream));
    let router = create_router(state, &config.server);

    let rest_addr = config.server.rest_addr();
    info!(addr = %rest_addr, "Starting REST server");

    let listener = tokio::net::TcpListener::bind(&rest_addr)
        .await
        .map_err(|e| GatewayError::internal(format!("Failed to bind REST: {e}")))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| GatewayError::internal(format!("REST server error: {e}")))?;

    info!("Gateway shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
