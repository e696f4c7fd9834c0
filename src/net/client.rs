//! Minimal HTTP/1 client for the Logstash monitoring API.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::header::{ACCEPT, HOST, USER_AGENT};
use http::{Method, Request, Uri};
use http_body_util::{BodyExt, Empty};
use hyper::client::conn::http1;
use hyper_util::rt::TokioIo;
use serde_json::Value;
use tokio::net::TcpStream;
use tracing::{debug, trace};

use super::FetchError;

/// Source of JSON stats documents.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// GET `url` and decode the body as JSON.
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// Plain-HTTP stats client, one connection per request.
#[derive(Debug, Clone)]
pub struct HttpStatsClient {
    timeout: Duration,
}

impl HttpStatsClient {
    /// Create a client whose requests are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn get(&self, uri: Uri) -> Result<Value, FetchError> {
        let authority = uri
            .authority()
            .ok_or_else(|| FetchError::InvalidUrl(uri.to_string()))?
            .clone();
        let addr = match authority.port_u16() {
            Some(_) => authority.as_str().to_string(),
            None => format!("{}:80", authority.as_str()),
        };
        let path = uri
            .path_and_query()
            .map(|p| p.as_str())
            .unwrap_or("/")
            .to_string();

        let stream = TcpStream::connect(addr.as_str())
            .await
            .map_err(FetchError::Connect)?;
        let _ = stream.set_nodelay(true);

        let (mut sender, conn) = http1::handshake(TokioIo::new(stream)).await?;
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                trace!(error = %e, "connection closed with error");
            }
        });

        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .header(HOST, authority.as_str())
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, concat!("check_logstash/", env!("CARGO_PKG_VERSION")))
            .body(Empty::<Bytes>::new())?;

        let response = sender.send_request(request).await?;
        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.into_body().collect().await?.to_bytes();
        trace!(body = %String::from_utf8_lossy(&body), "response body");

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl StatsSource for HttpStatsClient {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        let uri: Uri = url
            .parse()
            .map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
        if uri.scheme_str() != Some("http") {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }

        debug!(url = %url, "sending GET");

        match tokio::time::timeout(self.timeout, self.get(uri)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }),
        }
    }
}
