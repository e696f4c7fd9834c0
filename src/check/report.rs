//! Aggregation of probe results into a single plugin report.

use serde::Serialize;

use super::{ProbeResult, Severity};

/// Suffix appended to OK detail lines so check_mk renders line breaks.
const CHECKMK_LINE_BREAK: &str = "</br>";

/// Aggregated status report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Worst severity seen across all results
    pub severity: Severity,
    /// Summary line. Failed results only, unless nothing failed.
    pub text: String,
    /// Summary of OK results
    pub text_if_ok: String,
    /// One line per OK result
    pub multiline: String,
    /// Perfdata of every result, in fold order
    pub perfdata: String,
}

impl Report {
    /// Fold one result into the report.
    pub fn push(&mut self, result: &ProbeResult, checkmk: bool) {
        self.severity = self.severity.max(result.severity);

        if !result.perfdata.is_empty() {
            self.perfdata.push_str(&result.perfdata);
            self.perfdata.push(' ');
        }

        if result.severity >= Severity::Warning {
            self.text.push_str(&result.text);
            self.text.push(' ');
        } else {
            self.text_if_ok.push_str(&result.text);
            self.text_if_ok.push(' ');

            self.multiline.push_str(&result.text);
            if checkmk {
                self.multiline.push_str(CHECKMK_LINE_BREAK);
            }
            self.multiline.push('\n');
        }
    }

    /// Use the OK summary when nothing failed.
    pub fn finalize(mut self) -> Self {
        if self.text.is_empty() {
            self.text = self.text_if_ok.clone();
        }
        self
    }

    /// Process exit status for the report.
    pub fn exit_code(&self) -> i32 {
        self.severity.exit_code()
    }
}

/// Merge results left to right into a finalized report.
pub fn aggregate(results: &[ProbeResult], checkmk: bool) -> Report {
    results
        .iter()
        .fold(Report::default(), |mut report, result| {
            report.push(result, checkmk);
            report
        })
        .finalize()
}
