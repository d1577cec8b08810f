//! StyleSwitch - Rust Implementation
//!
//! With the `server` feature this binary hosts the compiled client bundle.
//! Without it (the `dx build --features web` path) it launches the client.

#[cfg(feature = "server")]
use anyhow::Result;

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<()> {
    use std::net::SocketAddr;
    use styleswitch::{config, server};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "styleswitch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting StyleSwitch static host");

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    if !server::has_bundle() {
        tracing::warn!("No client bundle embedded; run `dx build --features web` before building the host");
    }

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, server::router()).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(styleswitch::app::App);
}
