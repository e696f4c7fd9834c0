//! Check pipeline: probe, fetch, aggregate, render.
//!
//! ```text
//! Reachability ──false──> CRITICAL ─────────────┐
//!      │ true                                   v
//!      └──> pipeline ┐                      aggregate ──> render
//!      └──> jvm ─────┴── (join, fixed order) ──^
//! ```

mod coordinator;
mod render;
mod report;
mod status;

pub use coordinator::Coordinator;
pub use render::{render, write_output};
pub use report::{aggregate, Report};
pub use status::{ProbeResult, Severity};

use tracing::debug;

use crate::config::Config;
use crate::net::{HttpStatsClient, TcpProber};

/// Run a full check against the configured node.
pub async fn run(config: &Config) -> Report {
    let coordinator = Coordinator::new(TcpProber, HttpStatsClient::new(config.timeout));
    let results = coordinator.run_all(config).await;

    if config.debug {
        for result in &results {
            debug!(
                severity = %result.severity,
                result = %serde_json::to_string(result).unwrap_or_default(),
                "probe result"
            );
        }
    }

    aggregate(&results, config.checkmk)
}
