//! `du` backend implementation.
//!
//! Shells out to `du -d 1` and returns its stdout lines. GNU `du` can report
//! byte counts directly (`-B1`); BSD/macOS `du` cannot, so there we ask for
//! kilobytes and scale each line back up to bytes.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

use super::{Scanner, check_target};

#[cfg(target_os = "linux")]
const SIZE_ARGS: &[&str] = &["-B1"];
#[cfg(target_os = "linux")]
const UNIT_BYTES: u64 = 1;

#[cfg(not(target_os = "linux"))]
const SIZE_ARGS: &[&str] = &["-k"];
#[cfg(not(target_os = "linux"))]
const UNIT_BYTES: u64 = 1024;

/// Backend implementation using the system `du`.
pub struct DuScanner {
    program: OsString,
    unit_bytes: u64,
}

impl DuScanner {
    /// Create a scanner that runs `du` from PATH.
    pub fn new() -> Self {
        Self {
            program: OsString::from("du"),
            unit_bytes: UNIT_BYTES,
        }
    }

    /// Use a different `du` binary (useful for testing).
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            ..Self::new()
        }
    }

    /// Check if the configured `du` can be spawned.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .args(["-d", "0", "."])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    fn args(&self, target: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = SIZE_ARGS.iter().map(OsString::from).collect();
        args.push("-d".into());
        args.push("1".into());
        args.push(target.as_os_str().to_os_string());
        args
    }
}

impl Default for DuScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for DuScanner {
    fn name(&self) -> &'static str {
        "du"
    }

    fn scan(&self, target: &Path) -> Result<Vec<String>> {
        check_target(target)?;

        let args = self.args(target);
        log::debug!("Running {:?} {:?}", self.program, args);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::DuNotFound
                } else {
                    Error::Io(e)
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let lines: Vec<String> = stdout
            .lines()
            .map(|line| scale_line(line, self.unit_bytes))
            .collect();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();

            if lines.is_empty() {
                return Err(Error::ScanFailed(if stderr.is_empty() {
                    format!("du exited with {}", output.status)
                } else {
                    stderr.to_string()
                }));
            }

            // du keeps going past unreadable subdirectories and still prints
            // totals for everything it could read
            log::warn!("du reported errors, sizes may be incomplete: {stderr}");
        }

        log::debug!("du returned {} lines for {}", lines.len(), target.display());
        Ok(lines)
    }
}

/// Multiply the leading size field of a `du` line by `unit_bytes`.
///
/// Lines without a numeric size are returned unchanged and left for the
/// aggregator to drop.
fn scale_line(line: &str, unit_bytes: u64) -> String {
    if unit_bytes == 1 {
        return line.to_string();
    }

    match line.split_once('\t') {
        Some((size, path)) => match size.trim().parse::<u64>() {
            Ok(units) => format!("{}\t{}", units.saturating_mul(unit_bytes), path),
            Err(_) => line.to_string(),
        },
        None => line.to_string(),
    }
}
