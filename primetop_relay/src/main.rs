//! Entry point for the relay: resolve the coordinator, bind, serve.

use std::net::SocketAddr;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use primetop_relay::config::{coordinator_status_url, listen_port};
use primetop_relay::relay::router;
use primetop_relay::state::RelayState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let status_url = coordinator_status_url();
    let port = listen_port(std::env::args());

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent("primetop-relay")
        .build()?;

    let app = router(RelayState {
        client,
        status_url: status_url.clone(),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, upstream = %status_url, "relay listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
