// # dyndnsd - Dynamic DNS update daemon
//
// The dyndnsd daemon is responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing logging and the runtime
// 3. Building the Cloudflare client and the HTTP router
// 4. Serving `/dyndns/update` until SIGINT/SIGTERM
//
// See `settings.rs` for the full list of environment variables.
//
// ## Example
//
// ```bash
// export DYNDNS_API_TOKEN=your_token
// export DYNDNS_AUTH_CODE=your_secret
// export DYNDNS_LISTEN_ADDR=0.0.0.0:8080
//
// dyndnsd
//
// curl 'http://localhost:8080/dyndns/update?code=your_secret&hostname=home.example.com&myip=203.0.113.7'
// ```

use anyhow::Result;
use dyndns_provider_cloudflare::CloudflareClient;
use dyndnsd::Settings;
use std::net::SocketAddr;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Exit codes for different termination scenarios
///
/// These codes follow systemd conventions:
/// - 0: Clean shutdown
/// - 1: Configuration or startup error
/// - 2: Runtime error (unexpected)
#[derive(Debug, Clone, Copy)]
enum DyndnsExitCode {
    /// Clean shutdown (normal exit)
    CleanShutdown = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error (unexpected failure)
    RuntimeError = 2,
}

impl From<DyndnsExitCode> for ExitCode {
    fn from(code: DyndnsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    // Load configuration from environment
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return DyndnsExitCode::ConfigError.into();
        }
    };

    // Validate configuration
    if let Err(e) = settings.validate() {
        eprintln!("Configuration validation error: {:#}", e);
        return DyndnsExitCode::ConfigError.into();
    }

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(settings.log_level)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DyndnsExitCode::ConfigError.into();
    }

    info!("Starting dyndnsd");
    info!("Configuration loaded: {:?}", settings.config);

    // Enter tokio runtime
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return DyndnsExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        if let Err(e) = run_daemon(settings).await {
            error!("Daemon error: {:#}", e);
            DyndnsExitCode::RuntimeError
        } else {
            DyndnsExitCode::CleanShutdown
        }
    });

    result.into()
}

/// Run the daemon
async fn run_daemon(settings: Settings) -> Result<()> {
    let config = settings.config;

    let client = CloudflareClient::from_config(&config.provider)?;
    info!("Provider API: {}", client.base_url());

    let app = dyndnsd::app(&config, Box::new(client))?;

    let listener = tokio::net::TcpListener::bind(&config.server.listen_addr)
        .await
        .map_err(|e| {
            anyhow::anyhow!(
                "Unable to bind to {}: {}",
                config.server.listen_addr,
                e
            )
        })?;

    info!(
        "Listening on {} (route: {})",
        config.server.listen_addr, config.server.route_path
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Daemon stopped");
    Ok(())
}

/// Resolve once a shutdown signal arrives
///
/// If the signal handlers cannot be installed the server keeps running.
async fn shutdown_signal() {
    match wait_for_shutdown().await {
        Ok(signal) => {
            info!("Received shutdown signal: {}", signal);
            info!("Shutting down daemon");
        }
        Err(e) => {
            error!("Shutdown error: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Wait for shutdown signals (SIGTERM, SIGINT)
///
/// # Returns
///
/// Returns the name of the signal received.
#[cfg(unix)]
async fn wait_for_shutdown() -> Result<&'static str> {
    // Set up signal handlers for SIGTERM and SIGINT
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| anyhow::anyhow!("Failed to setup SIGTERM handler: {}", e))?;
    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| anyhow::anyhow!("Failed to setup SIGINT handler: {}", e))?;

    let signal = tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    };

    Ok(signal)
}

/// Wait for shutdown signals (SIGINT only)
///
/// Fallback implementation for non-Unix platforms.
#[cfg(not(unix))]
async fn wait_for_shutdown() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to wait for CTRL-C: {}", e))?;
    Ok("SIGINT")
}
