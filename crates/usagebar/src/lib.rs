//! # usagebar
//!
//! Per-directory disk usage reports with proportional bar graphs.
//!
//! The crate turns the one-level output of a disk scan (`du -d 1` or the
//! built-in walker) into a report where every entry shows its share of the
//! total as a fixed-width bar:
//!
//! ```text
//! Total: 600 bytes  .
//!  50% [=====     ] 300 bytes .
//!  16% [==        ] 100 bytes ./sub1
//!  33% [===       ] 200 bytes ./sub2
//! ```
//!
//! ## Pipeline
//!
//! 1. A [`Scanner`](backend::Scanner) produces `<bytes>\t<path>` lines.
//! 2. [`aggregate`] parses them into an ordered [`UsageReport`].
//! 3. [`build_report`] renders the report using [`format_size`] and
//!    [`render_bar`].
//!
//! ## Example
//!
//! ```
//! use usagebar::{ReportOptions, aggregate, build_report};
//!
//! let lines = ["100\t./sub1", "200\t./sub2"];
//! let report = aggregate(".", lines);
//!
//! let options = ReportOptions { human_readable: false, bar_length: 10 };
//! let output = build_report(&report, &options).unwrap();
//!
//! assert_eq!(output[0], "Total: 300 bytes  .");
//! assert_eq!(output[1], " 33% [===       ] 100 bytes ./sub1");
//! assert_eq!(output[2], " 66% [=======   ] 200 bytes ./sub2");
//! ```
//!
//! ## Notes
//!
//! - Entries keep scan order. Nothing is sorted or deduplicated.
//! - The target's own aggregate line is counted like any other record, so
//!   children of a real `du` scan show roughly half their "true" share.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

/// Parsing scan output into usage reports.
pub mod aggregate;
/// Scan backends that produce raw usage lines.
pub mod backend;
/// Percentage bar graphs.
pub mod bar;
/// Error types for usage operations.
pub mod error;
/// Byte count formatting.
pub mod format;
/// Line-by-line report rendering.
pub mod report;
/// Report data types.
pub mod types;

pub use aggregate::aggregate;
pub use backend::{Scanner, ScannerKind};
pub use bar::render_bar;
pub use error::{Error, Result};
pub use format::format_size;
pub use report::build_report;
pub use types::{ReportOptions, UsageEntry, UsageRecord, UsageReport};
