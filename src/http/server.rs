//! HTTP server setup.
//!
//! # Responsibilities
//! - Own the router built from the application's routing table
//! - Wire the router's byte entry point into the accept loop
//! - Run until shutdown is signalled

use std::sync::Arc;
use tokio::sync::broadcast;

use crate::config::ServerConfig;
use crate::net::listener::Listener;
use crate::routing::{Router, RoutingTable};

/// A dispatcher bound to its configuration, ready to serve.
pub struct HttpServer {
    router: Arc<Router>,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a server from a validated config and a finished routing table.
    pub fn new(config: ServerConfig, table: RoutingTable) -> Self {
        Self {
            router: Arc::new(Router::new(table)),
            config,
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: Listener, shutdown: broadcast::Receiver<()>) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.router.table().len(),
            "HTTP server starting"
        );

        let router = Arc::clone(&self.router);
        listener
            .serve(
                self.config.listener.read_buffer_bytes,
                move |bytes: &[u8]| router.handle(bytes),
                shutdown,
            )
            .await;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
