//! Disk usage report: scan, aggregate, render.

use anyhow::{Context as _, Result};
use std::io::{self, Write};
use usagebar::{Error as UsageError, Scanner, UsageReport, aggregate, build_report};

use crate::Context;
use crate::config::Settings;
use crate::progress;
use crate::ui;

/// Scan the target and print its report to stdout
pub fn run(ctx: &Context, settings: &Settings) -> Result<()> {
    let scanner = settings.scanner.build();
    let lines = scan(ctx, scanner.as_ref(), settings);

    let report = aggregate(settings.target.as_str(), lines);
    if report.is_empty() {
        ui::warn(&format!(
            "No output from {}. Check the target directory.",
            scanner.name()
        ));
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report, settings)?;
    out.flush()?;

    Ok(())
}

/// Run the scanner, reporting failures and degrading to an empty scan.
fn scan(ctx: &Context, scanner: &dyn Scanner, settings: &Settings) -> Vec<String> {
    let pb = progress::spinner(&format!("Scanning {}...", settings.target), ctx.quiet);
    let result = scanner.scan(settings.target_path());
    progress::finish_clear(&pb);

    match result {
        Ok(lines) => {
            log::info!("{} returned {} lines", scanner.name(), lines.len());
            lines
        }
        Err(e) => {
            ui::error(&format!("Error: {e}"));
            if matches!(e, UsageError::DuNotFound) {
                ui::dim("Use --scanner native to scan without du");
            }
            Vec::new()
        }
    }
}

/// Write the report as text lines or JSON.
pub fn write_report(out: &mut impl Write, report: &UsageReport, settings: &Settings) -> Result<()> {
    if settings.json {
        serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialize report")?;
        writeln!(out)?;
        return Ok(());
    }

    let lines = build_report(report, &settings.options).context("Failed to render report")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
