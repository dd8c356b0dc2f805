use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::{Connection, ConnectionSettings};
use crate::routes::{self, RouteTable};

/// Binds the configured address and serves the default routes until an
/// accept fails.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;
    let routes = Arc::new(routes::default_routes(cfg.storage_dir.clone()));
    info!(
        addr = %cfg.listen_addr,
        storage = %cfg.storage_dir.display(),
        routes = routes.len(),
        "Listening"
    );

    serve(listener, routes, cfg.connection_settings()).await
}

/// Accepts connections forever, one task per connection. An accept error
/// ends the loop and is returned; the listener is dropped with it.
pub async fn serve(
    listener: TcpListener,
    routes: Arc<RouteTable>,
    settings: ConnectionSettings,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await.map_err(|e| {
            tracing::error!(error = %e, "Error accepting connection");
            anyhow::Error::new(e).context("error accepting connection")
        })?;
        info!(peer = %peer, "Accepted connection");

        let routes = Arc::clone(&routes);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, routes, settings);
            if let Err(e) = conn.run().await {
                tracing::warn!(peer = %peer, error = %e, "Connection error");
            }
        });
    }
}
