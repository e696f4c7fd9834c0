//! JVM heap and uptime metrics.

use serde::Deserialize;

use super::{fetch_failure, fetch_stats, stats_url};
use crate::check::ProbeResult;
use crate::config::Config;
use crate::net::StatsSource;

const BYTES_PER_MB: u64 = 1024 * 1024;
const MILLIS_PER_HOUR: u64 = 1000 * 60 * 60;

/// `/_node/stats/jvm` document (only the fields we report).
#[derive(Debug, Clone, Deserialize)]
pub struct JvmStats {
    pub jvm: Jvm,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Jvm {
    pub mem: HeapMemory,
    pub uptime_in_millis: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HeapMemory {
    pub heap_used_percent: u64,
    pub heap_used_in_bytes: u64,
    pub heap_max_in_bytes: u64,
}

impl JvmStats {
    /// Summary text and perfdata. Sizes in MB, uptime in hours (text) and seconds (perfdata).
    pub fn to_result(&self) -> ProbeResult {
        let mem = &self.jvm.mem;
        let used_mb = mem.heap_used_in_bytes / BYTES_PER_MB;
        let max_mb = mem.heap_max_in_bytes / BYTES_PER_MB;
        let uptime_ms = self.jvm.uptime_in_millis;

        ProbeResult::ok(
            format!(
                "{}% of JVM heap used ({}MB of max {}MB) uptime: {} hours",
                mem.heap_used_percent,
                used_mb,
                max_mb,
                uptime_ms / MILLIS_PER_HOUR
            ),
            format!(
                "heap_perc={}% heap_bytes={}MB uptime={}s",
                mem.heap_used_percent,
                used_mb,
                uptime_ms / 1000
            ),
        )
    }
}

/// Fetch JVM heap usage and uptime.
pub async fn fetch_jvm_metrics<S>(source: &S, config: &Config) -> ProbeResult
where
    S: StatsSource + ?Sized,
{
    let url = stats_url(config, "jvm");
    match fetch_stats::<_, JvmStats>(source, &url).await {
        Ok(stats) => stats.to_result(),
        Err(e) => fetch_failure(&url, &e),
    }
}
