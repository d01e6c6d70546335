//! Gateway binary — thin bootstrap around [`user_gateway::GatewayServer`].
//!
//! Everything interesting lives in the library; this file only parses the
//! CLI, wires up tracing, and serves the router until SIGINT/SIGTERM.

#![forbid(unsafe_code)]

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_gateway::{GatewayConfig, GatewayServer};

/// REST gateway for the `user.v1` gRPC backend.
#[derive(Parser)]
#[command(name = "user-gateway", version, about)]
struct Cli {
    /// Address the HTTP listener binds to.
    #[arg(long, env = "GATEWAY_HTTP_ADDR", default_value = "127.0.0.1:8080")]
    http_addr: SocketAddr,

    /// URI of the user service gRPC backend.
    #[arg(long, env = "GATEWAY_BACKEND_ADDR", default_value = "http://localhost:50051")]
    backend_addr: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_gateway=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = GatewayConfig {
        http_addr: cli.http_addr,
        backend_addr: cli.backend_addr,
    };

    // A backend connection failure here is fatal; request-level failures
    // later never are.
    let server = GatewayServer::connect(&config)
        .await
        .context("gateway construction failed")?;

    let listener = TcpListener::bind(config.http_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.http_addr))?;
    tracing::info!(http = %config.http_addr, backend = %config.backend_addr, "gateway listening");

    axum::serve(listener, server.into_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server error")?;

    tracing::info!("gateway stopped");
    Ok(())
}

/// Resolve when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        _ = terminate => {}
    }
}
