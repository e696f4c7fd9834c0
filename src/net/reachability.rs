//! TCP reachability pre-check.

use std::future::Future;
use std::io::{self, ErrorKind};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tracing::debug;

/// Decides whether a host:port accepts TCP connections.
#[async_trait]
pub trait Reachability: Send + Sync {
    /// Never fails: any error or timeout means "not reachable".
    async fn probe(&self, host: &str, port: u16, timeout: Duration) -> bool;
}

/// Reachability check using a plain TCP connect.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpProber;

#[async_trait]
impl Reachability for TcpProber {
    async fn probe(&self, host: &str, port: u16, timeout: Duration) -> bool {
        // Accept bracketed IPv6 literals as used in URLs
        let host = host.trim_start_matches('[').trim_end_matches(']');
        connect_within(host, port, timeout, TcpStream::connect((host, port))).await
    }
}

/// Drive a pending connect, giving up after `timeout`.
async fn connect_within<F, S>(host: &str, port: u16, timeout: Duration, connect: F) -> bool
where
    F: Future<Output = io::Result<S>>,
{
    match tokio::time::timeout(timeout, connect).await {
        // Dropping the stream closes the connection right away
        Ok(Ok(_stream)) => true,
        Ok(Err(e)) => {
            if e.kind() == ErrorKind::ConnectionRefused {
                debug!(host, port, "connection refused");
            } else {
                debug!(host, port, error = %e, "connect failed");
            }
            false
        }
        Err(_) => {
            debug!(
                host,
                port,
                timeout_ms = timeout.as_millis() as u64,
                "connect timed out"
            );
            false
        }
    }
}
