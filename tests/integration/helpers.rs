//! Test helpers: an in-process mock of the Logstash monitoring API.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming as IncomingBody;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use check_logstash::Config;

/// How the mock answers a given path.
#[derive(Clone, Debug)]
#[allow(dead_code)]
pub enum Reply {
    /// 200 with a JSON body
    Json(Value),
    /// 200 with an arbitrary body
    Raw(&'static str),
    /// Empty response with this status
    Status(u16),
    /// Close the connection without answering
    Reset,
    /// Answer only after this delay
    Hang(Duration),
}

/// Mock Logstash node listening on 127.0.0.1.
pub struct MockLogstash {
    pub addr: SocketAddr,
    requests: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockLogstash {
    /// Start serving `routes` (path -> reply). Unknown paths get 404.
    pub async fn start(routes: Vec<(&'static str, Reply)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let routes: Arc<HashMap<&'static str, Reply>> = Arc::new(routes.into_iter().collect());
        let requests = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    return;
                };
                let routes = Arc::clone(&routes);
                let counter = Arc::clone(&counter);

                tokio::spawn(async move {
                    let service = service_fn(move |req| {
                        counter.fetch_add(1, Ordering::SeqCst);
                        let routes = Arc::clone(&routes);
                        async move { answer(req, &routes).await }
                    });
                    let io = TokioIo::new(stream);
                    let _ = http1::Builder::new().serve_connection(io, service).await;
                });
            }
        });

        Self { addr, requests }
    }

    /// Node answering both endpoints with the reference documents.
    pub async fn healthy() -> Self {
        Self::start(vec![
            (PIPELINE_PATH, Reply::Json(pipeline_document())),
            (JVM_PATH, Reply::Json(jvm_document())),
        ])
        .await
    }

    /// Config pointing at this mock.
    pub fn config(&self) -> Config {
        Config::new(self.addr.ip().to_string(), self.addr.port())
            .with_timeout(Duration::from_secs(2))
    }

    /// Number of HTTP requests served so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

async fn answer(
    req: Request<IncomingBody>,
    routes: &HashMap<&'static str, Reply>,
) -> Result<Response<Full<Bytes>>, std::io::Error> {
    let reply = routes.get(req.uri().path()).cloned();

    let response = match reply {
        Some(Reply::Json(value)) => json_response(value.to_string()),
        Some(Reply::Raw(body)) => json_response(body.to_string()),
        Some(Reply::Status(code)) => empty_response(
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        ),
        Some(Reply::Reset) => {
            // Erroring the service makes hyper drop the connection mid-request
            return Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "mock reset",
            ));
        }
        Some(Reply::Hang(delay)) => {
            tokio::time::sleep(delay).await;
            json_response("{}".to_string())
        }
        None => empty_response(StatusCode::NOT_FOUND),
    };

    Ok(response)
}

fn json_response(body: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    response.headers_mut().insert(
        hyper::header::CONTENT_TYPE,
        hyper::header::HeaderValue::from_static("application/json"),
    );
    response
}

fn empty_response(status: StatusCode) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = status;
    response
}

/// An address nobody listens on.
pub fn closed_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    addr
}

pub const PIPELINE_PATH: &str = "/_node/stats/pipeline";
pub const JVM_PATH: &str = "/_node/stats/jvm";

pub const PIPELINE_TEXT: &str = "100 IN events 90 OUT events 5 filtered events 2000 duration in ms";
pub const PIPELINE_PERFDATA: &str =
    "events_in=100c events_out=90c events_filtered=5c events_dur=2000ms";
pub const JVM_TEXT: &str = "75% of JVM heap used (750MB of max 1024MB) uptime: 2 hours";
pub const JVM_PERFDATA: &str = "heap_perc=75% heap_bytes=750MB uptime=7200s";

pub fn pipeline_document() -> Value {
    json!({
        "host": "logstash-1",
        "version": "5.6.16",
        "pipeline": {
            "events": {
                "in": 100,
                "out": 90,
                "filtered": 5,
                "duration_in_millis": 2000,
                "queue_push_duration_in_millis": 12
            }
        }
    })
}

pub fn jvm_document() -> Value {
    json!({
        "host": "logstash-1",
        "jvm": {
            "threads": {"count": 42, "peak_count": 44},
            "mem": {
                "heap_used_percent": 75,
                "heap_committed_in_bytes": 1038876672,
                "heap_max_in_bytes": 1073741824,
                "heap_used_in_bytes": 786432000
            },
            "uptime_in_millis": 7200000
        }
    })
}
