//! Graceful shutdown on Ctrl+C or SIGTERM.

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
#[error("failed to install {signal} handler: {source}")]
pub(crate) struct ShutdownError {
    signal: &'static str,
    #[source]
    source: io::Error,
}

fn install_failed(signal: &'static str) -> impl FnOnce(io::Error) -> ShutdownError {
    move |source| ShutdownError { signal, source }
}

async fn ctrl_c() -> Result<&'static str, ShutdownError> {
    signal::ctrl_c().await.map_err(install_failed("ctrl-c"))?;

    Ok("ctrl-c")
}

#[cfg(unix)]
async fn terminate() -> Result<&'static str, ShutdownError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(install_failed("SIGTERM"))?
        .recv()
        .await;

    Ok("SIGTERM")
}

#[cfg(not(unix))]
async fn terminate() -> Result<&'static str, ShutdownError> {
    std::future::pending().await
}

/// Waits for the first shutdown signal, then lets in-flight requests finish.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownError> {
    let received = tokio::select! {
        received = ctrl_c() => received?,
        received = terminate() => received?,
    };

    info!(signal = received, "shutting down, draining in-flight requests");

    handle.stop_graceful(None);

    Ok(())
}
