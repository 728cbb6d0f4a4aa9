use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::Config;
use crate::http::connection;

/// Pending connections the kernel queues while one is being served.
pub const BACKLOG: u32 = 10;

/// Binds the listening socket with address reuse enabled.
pub fn bind(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4(),
        SocketAddr::V6(_) => TcpSocket::new_v6(),
    }
    .context("socket failed")?;

    socket.set_reuseaddr(true).context("setsockopt failed")?;
    socket
        .bind(addr)
        .with_context(|| format!("bind failed on {addr}"))?;

    socket.listen(BACKLOG).context("listen failed")
}

/// Accepts and serves connections one at a time, forever.
///
/// Each connection is read, answered and closed before the next accept.
/// Per-connection failures are logged and never end the loop.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!(error = %e, "accept failed");
                continue;
            }
        };
        tracing::debug!(%peer, "Accepted connection");

        if let Err(e) = connection::handle(socket, cfg).await {
            tracing::warn!(%peer, error = %e, "Connection error");
        }
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let addr: SocketAddr = cfg
        .listen_addr()
        .parse()
        .with_context(|| format!("invalid listen address {}", cfg.listen_addr()))?;

    let listener = bind(addr)?;
    info!("Serving directory: {}", cfg.base_dir);
    info!("Listening on http://{}", addr);

    serve(listener, cfg).await
}
