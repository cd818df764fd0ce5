use crate::bar::render_bar;
use crate::error::{Error, Result};
use crate::format::format_size;
use crate::types::{ReportOptions, UsageEntry, UsageReport};

/// Render a usage report as output lines: a header, then one line per entry.
///
/// ```text
/// Total: 600 bytes  .
///  16% [==        ] 100 bytes ./sub1
/// ```
///
/// The percentage label is truncated while the bar rounds, so a 66.7% entry
/// reads ` 66%` next to a 7/10 bar. A report whose total is zero renders the
/// header only.
pub fn build_report(report: &UsageReport, options: &ReportOptions) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(report.entries.len() + 1);
    lines.push(header_line(report, options));

    if report.total_bytes == 0 {
        log::debug!("Total usage of {} is zero, skipping entries", report.target_path);
        return Ok(lines);
    }

    for entry in &report.entries {
        lines.push(entry_line(entry, options)?);
    }

    Ok(lines)
}

fn header_line(report: &UsageReport, options: &ReportOptions) -> String {
    format!(
        "Total: {} bytes  {}",
        format_size(report.total_bytes, options.human_readable),
        report.target_path
    )
}

fn entry_line(entry: &UsageEntry, options: &ReportOptions) -> Result<String> {
    let percent = entry.percent.ok_or_else(|| {
        Error::InvalidArgument(format!("entry {} has no percentage", entry.path))
    })?;
    let bar = render_bar(percent, options.bar_length)?;

    Ok(format!(
        "{:3}% [{}] {} bytes {}",
        percent as u64,
        bar,
        format_size(entry.size_bytes, options.human_readable),
        entry.path
    ))
}
