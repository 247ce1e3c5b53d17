//! http-dispatch
//!
//! Serves a single page at `/` through the dispatcher.
//!
//! ```text
//!     Client ──▶ net::listener ──▶ net::connection ──▶ routing::router
//!                  (accept)          (read/write)        (parse, resolve)
//!                                                              │
//!     Client ◀─────────────── response text ◀── handler / fallback
//! ```

use std::path::PathBuf;

use clap::Parser;

use http_dispatch::lifecycle::signals::shutdown_on_interrupt;
use http_dispatch::lifecycle::startup::{resolve_config, Overrides};
use http_dispatch::net::listener::Listener;
use http_dispatch::{observability, render, HandlerResult, HttpServer, Request, RoutingTable, Shutdown};

#[derive(Parser)]
#[command(name = "http-dispatch")]
#[command(about = "Minimal HTTP/1.1 request dispatcher", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the config file.
    #[arg(short, long)]
    address: Option<String>,

    /// Bind port, overriding the config file.
    #[arg(short, long)]
    port: Option<u16>,

    /// Page served at `/`.
    #[arg(long, default_value = "./index.html")]
    page: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(
        cli.config.as_deref(),
        Overrides {
            address: cli.address,
            port: cli.port,
        },
    )?;

    observability::logging::init(&config.observability);

    tracing::info!(
        address = %config.listener.address,
        port = config.listener.port,
        read_buffer_bytes = config.listener.read_buffer_bytes,
        "Configuration loaded"
    );

    let page = cli.page;
    let table = RoutingTable::builder()
        .get("/", move |_req: &Request| -> HandlerResult { Ok(render(&page)?) })
        .build()?;

    let listener = Listener::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    tokio::spawn(shutdown_on_interrupt(shutdown.clone()));

    let server = HttpServer::new(config, table);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
