//! Service entry point: argument parsing, logging, and the axum listener.

use clap::Parser;
use tokio::net::TcpListener;

use load_srv::api::{self, SERVICE_NAME, SERVICE_VERSION};

#[derive(Parser, Debug)]
#[command(name = "load_srv", version, about = "Residential service load calculator API")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "LOAD_SRV_BIND")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5000, env = "LOAD_SRV_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let args = Args::parse();
    let addr = format!("{}:{}", args.bind, args.port);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Starting {} v{} on {}", SERVICE_NAME, SERVICE_VERSION, addr);

    axum::serve(listener, api::create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("{} stopped", SERVICE_NAME);
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received shutdown signal"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {e}"),
    }
}

/// Initialize the log subscriber from RUST_LOG, defaulting to info for this
/// service and the HTTP trace layer.
fn init_logging() {
    let log_level = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| format!("{}=info,tower_http=info", env!("CARGO_PKG_NAME")));

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .init();
}
