//! Runs the reachability pre-check and both metric fetchers.

use tracing::{debug, info};

use super::ProbeResult;
use crate::config::Config;
use crate::metrics::{fetch_jvm_metrics, fetch_pipeline_metrics};
use crate::net::{Reachability, StatsSource};

/// Coordinates one check run against a single node.
///
/// Results are always returned in the order pipeline, jvm, so the
/// aggregated output is deterministic regardless of completion order.
pub struct Coordinator<P, S> {
    prober: P,
    source: S,
}

impl<P, S> Coordinator<P, S>
where
    P: Reachability,
    S: StatsSource,
{
    pub fn new(prober: P, source: S) -> Self {
        Self { prober, source }
    }

    /// Probe the port, then fetch all metrics.
    ///
    /// An unreachable port yields a single CRITICAL result and no fetch
    /// is attempted.
    pub async fn run_all(&self, config: &Config) -> Vec<ProbeResult> {
        if !self
            .prober
            .probe(&config.host, config.port, config.timeout)
            .await
        {
            info!(host = %config.host, port = config.port, "port not reachable");
            return vec![ProbeResult::critical(format!(
                "CRITICAL: Could not connect to plain HTTP port {}:{}",
                config.host, config.port
            ))];
        }

        if config.debug {
            self.run_sequential(config).await
        } else {
            self.run_concurrent(config).await
        }
    }

    async fn run_concurrent(&self, config: &Config) -> Vec<ProbeResult> {
        let (pipeline, jvm) = tokio::join!(
            fetch_pipeline_metrics(&self.source, config),
            fetch_jvm_metrics(&self.source, config),
        );
        vec![pipeline, jvm]
    }

    async fn run_sequential(&self, config: &Config) -> Vec<ProbeResult> {
        let pipeline = fetch_pipeline_metrics(&self.source, config).await;
        debug!(result = ?pipeline, "pipeline metrics done");

        let jvm = fetch_jvm_metrics(&self.source, config).await;
        debug!(result = ?jvm, "jvm metrics done");

        vec![pipeline, jvm]
    }
}
