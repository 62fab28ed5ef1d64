//! Signal-driven graceful shutdown.

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("could not listen for Ctrl+C: {0}")]
    Interrupt(#[source] io::Error),

    #[cfg(unix)]
    #[error("could not listen for SIGTERM: {0}")]
    Terminate(#[source] io::Error),
}

#[cfg(unix)]
async fn terminate() -> Result<(), ShutdownSignalError> {
    let mut stream = signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::Terminate)?;

    stream.recv().await;

    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> Result<(), ShutdownSignalError> {
    std::future::pending().await
}

/// Waits for Ctrl+C or SIGTERM, then lets in-flight requests finish before
/// the server stops.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownSignalError::Interrupt)?;
            info!(signal = "interrupt", "shutting down");
        }
        result = terminate() => {
            result?;
            info!(signal = "terminate", "shutting down");
        }
    }

    handle.stop_graceful(None);

    Ok(())
}
