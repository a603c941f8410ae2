use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::server::dispatch::Dispatcher;

/// Binds the listening socket. Failure here is fatal to the server.
pub async fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("binding {}", cfg.listen_addr))?;
    info!("Listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Accept loop. Each connection gets its own handler task and the loop
/// moves on without waiting for it.
///
/// Only returns if the process is torn down around it.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new(cfg.dispatch);

    loop {
        let slot = dispatcher.reserve().await;

        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        dispatcher.spawn(slot, socket, peer, cfg.framing);
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg).await?;
    serve(listener, cfg).await
}
