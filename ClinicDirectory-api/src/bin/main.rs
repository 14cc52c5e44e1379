use std::net::SocketAddr;

use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use clinic_directory_api::api::{create_app, handlers::create_service};
use clinic_directory_data::database::{DatabaseConfig, DatabasePool};

/// The listening port is fixed
const PORT: u16 = 3000;

/// The main entry point for the ClinicDirectory API server
///
/// 1. Loads environment variables from `.env`
/// 2. Sets up tracing
/// 3. Builds the lazy database pool and checks it in the background
/// 4. Serves the router until Ctrl+C or SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_loaded = dotenv().is_ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(false)
            .with_ansi(true)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stdout))
        .with(env_filter)
        .init();

    if !dotenv_loaded {
        warn!(".env file not found or couldn't be read. Using environment variables.");
    }

    info!("Starting ClinicDirectory API server");

    let config = DatabaseConfig::from_env().context("invalid database configuration")?;
    info!("DB_USER: {}", config.user.as_deref().unwrap_or_default());
    info!("DB_HOST: {}", config.host.as_deref().unwrap_or_default());

    let pool = DatabasePool::from_config(&config);
    info!("Using {:?} database", pool.database_type());

    // Unreachable databases are reported but never stop the server
    let check_pool = pool.clone();
    tokio::spawn(async move {
        match check_pool.check_connection().await {
            Ok(()) => info!("Connected to the database."),
            Err(e) => error!("Error connecting to the database: {}", e),
        }
    });

    let app = create_app(create_service(pool));

    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server is running on port {}", PORT);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down server...");
}
