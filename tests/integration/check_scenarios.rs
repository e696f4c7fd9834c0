//! End-to-end check runs against the mock node.

use std::time::{Duration, Instant};

use check_logstash::check::{self, Severity};
use check_logstash::Config;

use crate::helpers::*;

/// Both endpoints healthy: OK summary, all perfdata, one detail line each
#[tokio::test]
async fn test_healthy_node() {
    let node = MockLogstash::healthy().await;
    let report = check::run(&node.config()).await;

    assert_eq!(report.severity, Severity::Ok);
    assert_eq!(report.text, format!("{} {} ", PIPELINE_TEXT, JVM_TEXT));
    assert_eq!(report.text, report.text_if_ok);
    assert_eq!(
        report.perfdata,
        format!("{} {} ", PIPELINE_PERFDATA, JVM_PERFDATA)
    );

    let (output, code) = check::render(&report);
    assert_eq!(
        output,
        format!(
            "{} {} |{} {} \n{}\n{}",
            PIPELINE_TEXT, JVM_TEXT, PIPELINE_PERFDATA, JVM_PERFDATA, PIPELINE_TEXT, JVM_TEXT
        )
    );
    assert_eq!(code, 0);
    assert_eq!(node.requests(), 2);
}

/// check_mk mode marks every detail line
#[tokio::test]
async fn test_checkmk_line_breaks() {
    let node = MockLogstash::healthy().await;
    let report = check::run(&node.config().with_checkmk(true)).await;

    assert_eq!(
        report.multiline,
        format!("{}</br>\n{}</br>\n", PIPELINE_TEXT, JVM_TEXT)
    );
    assert!(!report.text.contains("</br>"));
}

/// Connection reset on one endpoint degrades to WARNING, the other still reports
#[tokio::test]
async fn test_connection_reset_is_warning() {
    let node = MockLogstash::start(vec![
        (PIPELINE_PATH, Reply::Json(pipeline_document())),
        (JVM_PATH, Reply::Reset),
    ])
    .await;
    let config = node.config();
    let report = check::run(&config).await;

    assert_eq!(report.severity, Severity::Warning);
    assert!(report.text.starts_with("WARNING: Error"), "{}", report.text);
    assert!(report.text.ends_with(&format!(
        "while sending request to {}/_node/stats/jvm ",
        config.base_url()
    )));
    assert_eq!(report.perfdata, format!("{} ", PIPELINE_PERFDATA));
    assert_eq!(report.multiline, format!("{}\n", PIPELINE_TEXT));

    let (_, code) = check::render(&report);
    assert_eq!(code, 1);
}

/// Non-2xx status is a fetch failure
#[tokio::test]
async fn test_http_error_status_is_warning() {
    let node = MockLogstash::start(vec![
        (PIPELINE_PATH, Reply::Status(500)),
        (JVM_PATH, Reply::Json(jvm_document())),
    ])
    .await;
    let report = check::run(&node.config()).await;

    assert_eq!(report.severity, Severity::Warning);
    assert!(report
        .text
        .starts_with("WARNING: Error '500 Internal Server Error' while sending request to"));
    assert_eq!(report.perfdata, format!("{} ", JVM_PERFDATA));
}

/// Body that is not JSON
#[tokio::test]
async fn test_garbage_body_is_warning() {
    let node = MockLogstash::start(vec![
        (PIPELINE_PATH, Reply::Json(pipeline_document())),
        (JVM_PATH, Reply::Raw("<html>nope</html>")),
    ])
    .await;
    let report = check::run(&node.config()).await;

    assert_eq!(report.severity, Severity::Warning);
    assert!(report.text.starts_with("WARNING: Error 'invalid JSON"));
}

/// Both fetches failing still yields WARNING, never CRITICAL
#[tokio::test]
async fn test_both_fetches_failing_is_warning() {
    let node = MockLogstash::start(vec![]).await;
    let report = check::run(&node.config()).await;

    assert_eq!(report.severity, Severity::Warning);
    assert_eq!(report.text.matches("WARNING: Error '404 Not Found'").count(), 2);
    assert!(report.perfdata.is_empty());
    assert!(report.multiline.is_empty());
}

/// A hung endpoint is cut off by the timeout while the other runs concurrently
#[tokio::test]
async fn test_hung_endpoint_times_out() {
    let node = MockLogstash::start(vec![
        (PIPELINE_PATH, Reply::Hang(Duration::from_secs(30))),
        (JVM_PATH, Reply::Json(jvm_document())),
    ])
    .await;
    let config = node.config().with_timeout(Duration::from_secs(1));

    let started = Instant::now();
    let report = check::run(&config).await;

    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(report.severity, Severity::Warning);
    assert!(report
        .text
        .starts_with("WARNING: Error 'request timeout after 1000ms'"));
    assert_eq!(report.perfdata, format!("{} ", JVM_PERFDATA));
}

/// Closed port: single CRITICAL, no HTTP requests attempted
#[tokio::test]
async fn test_unreachable_node_is_critical() {
    let addr = closed_addr();
    let config = Config::new("127.0.0.1", addr.port()).with_timeout(Duration::from_secs(2));
    let report = check::run(&config).await;

    assert_eq!(report.severity, Severity::Critical);
    let (output, code) = check::render(&report);
    assert_eq!(
        output,
        format!(
            "CRITICAL: Could not connect to plain HTTP port 127.0.0.1:{} |\n",
            addr.port()
        )
    );
    assert_eq!(code, 2);
}

/// Debug mode runs sequentially but produces the same report
#[tokio::test]
async fn test_debug_mode_same_report() {
    let node = MockLogstash::start(vec![
        (PIPELINE_PATH, Reply::Status(503)),
        (JVM_PATH, Reply::Json(jvm_document())),
    ])
    .await;

    let concurrent = check::run(&node.config()).await;
    let sequential = check::run(&node.config().with_debug(true)).await;

    assert_eq!(concurrent, sequential);
    assert_eq!(node.requests(), 4);
}
