//! Shared utilities for integration tests.

use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

use http_dispatch::config::{ListenerConfig, ServerConfig};
use http_dispatch::net::listener::Listener;
use http_dispatch::{HttpServer, RoutingTable, Shutdown};

/// A server running on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

/// Bind an ephemeral port and run `table` on it in the background.
pub async fn start_server(table: RoutingTable) -> TestServer {
    let config = ServerConfig {
        listener: ListenerConfig {
            port: 0,
            ..ListenerConfig::default()
        },
        ..ServerConfig::default()
    };

    let listener = Listener::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, table);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Send raw bytes and read until the server closes the connection.
pub async fn send_raw(addr: SocketAddr, request: &[u8]) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}
