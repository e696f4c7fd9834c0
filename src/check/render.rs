//! Plugin output formatting.

use std::io::{self, Write};

use super::Report;

/// Format a report as plugin output and pick the exit status.
///
/// The first line is `text|perfdata`, followed by the OK detail block
/// with its final newline removed.
pub fn render(report: &Report) -> (String, i32) {
    let multiline = report
        .multiline
        .strip_suffix('\n')
        .unwrap_or(&report.multiline);

    let output = format!("{}|{}\n{}", report.text, report.perfdata, multiline);
    (output, report.exit_code())
}

/// Write rendered output so it ends with exactly one newline, then flush.
pub fn write_output(out: &mut impl Write, output: &str) -> io::Result<()> {
    if output.ends_with('\n') {
        out.write_all(output.as_bytes())?;
    } else {
        writeln!(out, "{}", output)?;
    }
    out.flush()
}
