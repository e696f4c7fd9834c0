//! Pipeline throughput metrics.

use serde::Deserialize;

use super::{fetch_failure, fetch_stats, stats_url};
use crate::check::ProbeResult;
use crate::config::Config;
use crate::net::StatsSource;

/// `/_node/stats/pipeline` document (only the fields we report).
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineStats {
    pub pipeline: Pipeline,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pipeline {
    pub events: EventCounters,
}

/// Event counters since node start.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EventCounters {
    #[serde(rename = "in")]
    pub input: u64,
    #[serde(rename = "out")]
    pub output: u64,
    pub filtered: u64,
    pub duration_in_millis: u64,
}

impl PipelineStats {
    /// Summary text and perfdata for these counters.
    pub fn to_result(&self) -> ProbeResult {
        let e = &self.pipeline.events;
        ProbeResult::ok(
            format!(
                "{} IN events {} OUT events {} filtered events {} duration in ms",
                e.input, e.output, e.filtered, e.duration_in_millis
            ),
            format!(
                "events_in={}c events_out={}c events_filtered={}c events_dur={}ms",
                e.input, e.output, e.filtered, e.duration_in_millis
            ),
        )
    }
}

/// Fetch pipeline event counters.
pub async fn fetch_pipeline_metrics<S>(source: &S, config: &Config) -> ProbeResult
where
    S: StatsSource + ?Sized,
{
    let url = stats_url(config, "pipeline");
    match fetch_stats::<_, PipelineStats>(source, &url).await {
        Ok(stats) => stats.to_result(),
        Err(e) => fetch_failure(&url, &e),
    }
}
