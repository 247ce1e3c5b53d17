//! TCP listener and the sequential accept loop.
//!
//! # Responsibilities
//! - Bind to the configured address with address reuse
//! - Accept one connection at a time
//! - Stop accepting when shutdown is signalled
//!
//! # Design Decisions
//! - The next accept starts only after the previous connection is closed
//! - Shutdown also cuts short a connection still waiting on its client
//! - Accept and per-connection errors are logged, never fatal
//! - Only bind failures end the process

use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::{TcpListener, TcpSocket};
use tokio::sync::broadcast;

use crate::config::ListenerConfig;
use crate::net::connection::{self, ConnectionId};

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The configured address could not be used.
    #[error("invalid bind address {0:?}")]
    Address(String),

    /// Failed to bind or listen.
    #[error("failed to bind: {0}")]
    Bind(#[source] std::io::Error),
}

/// A bound listening socket.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
}

impl Listener {
    /// Bind to `address:port` from the config with `SO_REUSEADDR` set.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let addr = config
            .socket_addr()
            .map_err(|_| ListenerError::Address(config.address.clone()))?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        }
        .map_err(ListenerError::Bind)?;

        socket.set_reuseaddr(true).map_err(ListenerError::Bind)?;
        socket.bind(addr).map_err(ListenerError::Bind)?;
        let inner = socket.listen(config.backlog).map_err(ListenerError::Bind)?;

        let local_addr = inner.local_addr().map_err(ListenerError::Bind)?;
        tracing::info!(address = %local_addr, backlog = config.backlog, "Listener bound");

        Ok(Self { inner })
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.inner.local_addr()
    }

    /// Serve connections one at a time until `shutdown` fires.
    ///
    /// Each connection gets a single read of at most `read_buffer_bytes`,
    /// one call to `handle`, and a full write of its output before closing.
    /// A connection still in flight when `shutdown` fires is dropped.
    /// Dropping `self` on return releases the listening socket.
    pub async fn serve<H>(self, read_buffer_bytes: usize, handle: H, mut shutdown: broadcast::Receiver<()>)
    where
        H: Fn(&[u8]) -> Vec<u8>,
    {
        loop {
            let accepted = tokio::select! {
                biased;
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown signal received, no longer accepting");
                    break;
                }
                accepted = self.inner.accept() => accepted,
            };

            let (stream, peer_addr) = match accepted {
                Ok(pair) => pair,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to accept connection");
                    continue;
                }
            };

            let id = ConnectionId::new();
            tracing::debug!(connection_id = %id, peer_addr = %peer_addr, "Connection accepted");

            // An idle client must not hold off an interrupt.
            let served = tokio::select! {
                biased;
                _ = shutdown.recv() => None,
                result = connection::serve_connection(stream, read_buffer_bytes, &handle) => Some(result),
            };

            match served {
                None => {
                    tracing::info!(connection_id = %id, "Shutdown signal received, dropping connection in flight");
                    break;
                }
                Some(Err(e)) => {
                    tracing::warn!(connection_id = %id, peer_addr = %peer_addr, error = %e, "Connection failed");
                }
                Some(Ok(())) => {}
            }

            tracing::trace!(connection_id = %id, "Connection closed");
        }
    }
}
