//! OS signal handling.

use crate::lifecycle::shutdown::Shutdown;

/// Wait for Ctrl+C, then trigger `shutdown`.
///
/// If the handler cannot be installed the server keeps running and can only
/// be stopped by killing the process.
pub async fn shutdown_on_interrupt(shutdown: Shutdown) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Interrupt received, shutting down");
            shutdown.trigger();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    }
}
