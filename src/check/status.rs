//! Severity levels and per-probe results.

use serde::Serialize;

/// Monitoring-plugin severity.
///
/// Declaration order defines the ordering used when results are merged:
/// a higher value is always worse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Process exit status for this severity (0-3).
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Outcome of a single probe (reachability, pipeline or JVM).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub severity: Severity,
    /// Human-readable summary
    pub text: String,
    /// Space-separated `key=value[unit]` tokens, empty on failure
    pub perfdata: String,
}

impl ProbeResult {
    /// Create a successful result.
    pub fn ok(text: impl Into<String>, perfdata: impl Into<String>) -> Self {
        Self {
            severity: Severity::Ok,
            text: text.into(),
            perfdata: perfdata.into(),
        }
    }

    /// Create a degraded-data result. Newlines are stripped from the text.
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: single_line(text.into()),
            perfdata: String::new(),
        }
    }

    /// Create a node-down result.
    pub fn critical(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            text: single_line(text.into()),
            perfdata: String::new(),
        }
    }
}

/// Output lines must not break the `text|perfdata` contract.
fn single_line(text: String) -> String {
    if text.contains(['\n', '\r']) {
        text.replace(['\n', '\r'], "")
    } else {
        text
    }
}
