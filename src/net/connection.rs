//! Per-connection handling.
//!
//! # Responsibilities
//! - Generate connection IDs for tracing
//! - Read one request, run the handler, write the response, close
//! - Contain handler panics to the connection that triggered them

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response;

/// Relaxed ordering is enough: IDs only need to be unique.
static CONNECTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for an accepted connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    pub fn new() -> Self {
        Self(CONNECTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Serve a single request on `stream` and close it.
///
/// Reads once into a buffer of `read_buffer_bytes`; anything beyond that is
/// never read. A panic in `handle` is answered with a 500 response.
pub async fn serve_connection<S, H>(mut stream: S, read_buffer_bytes: usize, handle: &H) -> std::io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
    H: Fn(&[u8]) -> Vec<u8>,
{
    let mut buf = vec![0u8; read_buffer_bytes];
    let n = stream.read(&mut buf).await?;
    let request = &buf[..n];

    let output = match panic::catch_unwind(AssertUnwindSafe(|| handle(request))) {
        Ok(output) => output,
        Err(_) => {
            tracing::error!("Handler panicked, answering with 500");
            response::internal_error().into_text().into_bytes()
        }
    };

    stream.write_all(&output).await?;
    stream.shutdown().await?;
    Ok(())
}
