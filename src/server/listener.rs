use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;

/// Binds the listening socket with `SO_REUSEADDR` and the configured backlog.
pub async fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = tokio::net::lookup_host(&cfg.listen_addr)
        .await
        .with_context(|| format!("invalid listen address {}", cfg.listen_addr))?
        .next()
        .with_context(|| format!("no address for {}", cfg.listen_addr))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()
    } else {
        TcpSocket::new_v6()
    }
    .context("failed to create server socket")?;

    socket
        .set_reuseaddr(true)
        .context("failed to set SO_REUSEADDR")?;
    socket
        .bind(addr)
        .with_context(|| format!("failed to bind to {}", addr))?;

    socket.listen(cfg.backlog).context("listen failed")
}

/// Accepts connections forever, at most `max_connections` in flight.
///
/// Each connection gets its own task. When every permit is taken the loop
/// waits for one to free up before accepting again, leaving the rest queued
/// in the OS backlog.
pub async fn serve(
    listener: TcpListener,
    router: Arc<Router>,
    max_connections: usize,
    read_buffer_size: usize,
) -> anyhow::Result<()> {
    let permits = Arc::new(Semaphore::new(max_connections));

    loop {
        let permit = permits.clone().acquire_owned().await?;

        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "accept failed");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let router = router.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, router, read_buffer_size);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
            drop(permit);
        });
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg).await?;
    info!(
        addr = %cfg.listen_addr,
        directory = cfg.directory.as_deref().unwrap_or(""),
        "Listening"
    );

    let router = Arc::new(Router::new(cfg.directory.clone()));
    serve(listener, router, cfg.max_connections, cfg.read_buffer_size).await
}
