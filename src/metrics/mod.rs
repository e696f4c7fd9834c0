//! Metric fetchers for the Logstash node stats API.
//!
//! Each fetcher issues one GET against `/_node/stats/<endpoint>`, decodes
//! a fixed set of numeric fields and turns them into a [`ProbeResult`].
//! Any failure along the way becomes a WARNING result carrying the cause:
//! missing data is a degraded condition, not a node-down one.

mod jvm;
mod pipeline;

pub use jvm::{fetch_jvm_metrics, JvmStats};
pub use pipeline::{fetch_pipeline_metrics, PipelineStats};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::check::ProbeResult;
use crate::config::Config;
use crate::net::{FetchError, StatsSource};

/// URL of a node stats endpoint.
pub fn stats_url(config: &Config, endpoint: &str) -> String {
    format!("{}/_node/stats/{}", config.base_url(), endpoint)
}

/// WARNING result for a failed fetch.
pub fn fetch_failure(url: &str, error: &FetchError) -> ProbeResult {
    ProbeResult::warning(format!(
        "WARNING: Error '{}' while sending request to {}",
        error, url
    ))
}

/// Fetch `url` and decode it into `T`.
async fn fetch_stats<S, T>(source: &S, url: &str) -> Result<T, FetchError>
where
    S: StatsSource + ?Sized,
    T: DeserializeOwned + std::fmt::Debug,
{
    let document = source.fetch_json(url).await?;
    let stats: T = serde_json::from_value(document)?;
    debug!(url = %url, parsed = ?stats, "stats decoded");
    Ok(stats)
}
