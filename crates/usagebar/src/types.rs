use serde::{Deserialize, Serialize};

/// One parsed line of scan output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Path as reported by the scan
    pub path: String,
    /// Aggregate size in bytes
    pub size_bytes: u64,
}

impl UsageRecord {
    /// Create a new UsageRecord
    pub fn new(path: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            size_bytes,
        }
    }

    /// Parse a `<bytes>\t<path>` line.
    ///
    /// Returns `None` unless the line has exactly one tab and the leading
    /// field is a decimal byte count.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split('\t');
        let (size, path) = match (fields.next(), fields.next(), fields.next()) {
            (Some(size), Some(path), None) => (size, path),
            _ => return None,
        };

        let size_bytes = size.trim().parse::<u64>().ok()?;
        Some(Self::new(path, size_bytes))
    }
}

/// A report entry: a record plus its share of the report total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEntry {
    /// Path as reported by the scan
    pub path: String,
    /// Aggregate size in bytes
    pub size_bytes: u64,
    /// Share of the total in percent (0-100), `None` when the total is zero
    pub percent: Option<f64>,
}

/// Aggregated usage for one target directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageReport {
    /// Directory the scan was run against
    pub target_path: String,
    /// Sum of every entry's size
    pub total_bytes: u64,
    /// Entries in scan order
    pub entries: Vec<UsageEntry>,
}

impl UsageReport {
    /// Build a report from records, computing totals and percentages.
    pub fn from_records(target_path: impl Into<String>, records: Vec<UsageRecord>) -> Self {
        let total_bytes = records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.size_bytes));

        let entries = records
            .into_iter()
            .map(|r| UsageEntry {
                percent: percent_of(r.size_bytes, total_bytes),
                path: r.path,
                size_bytes: r.size_bytes,
            })
            .collect();

        Self {
            target_path: target_path.into(),
            total_bytes,
            entries,
        }
    }

    /// Returns true if no scan line was usable
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Share of `total` taken by `part`, in percent.
///
/// `None` when `total` is zero.
fn percent_of(part: u64, total: u64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(part as f64 / total as f64 * 100.0)
    }
}

/// Rendering options for [`build_report`](crate::build_report).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Print sizes as `1.5K` instead of raw byte counts
    pub human_readable: bool,
    /// Width of each bar in characters
    pub bar_length: i64,
}

impl ReportOptions {
    /// Default bar width
    pub const DEFAULT_BAR_LENGTH: i64 = 20;
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            human_readable: false,
            bar_length: Self::DEFAULT_BAR_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        assert_eq!(UsageRecord::parse("100\t/a"), Some(UsageRecord::new("/a", 100)));
        assert_eq!(
            UsageRecord::parse("4096\t./dir with spaces"),
            Some(UsageRecord::new("./dir with spaces", 4096))
        );
        assert_eq!(UsageRecord::parse(" 42 \t./x"), Some(UsageRecord::new("./x", 42)));
    }

    #[test]
    fn test_parse_record_rejects_noise() {
        assert_eq!(UsageRecord::parse(""), None);
        assert_eq!(UsageRecord::parse("garbage-no-tab"), None);
        assert_eq!(UsageRecord::parse("1\t2\t3"), None);
        assert_eq!(UsageRecord::parse("abc\t./x"), None);
        assert_eq!(UsageRecord::parse("-5\t./x"), None);
    }

    #[test]
    fn test_report_percentages() {
        let report = UsageReport::from_records(
            ".",
            vec![UsageRecord::new("./a", 25), UsageRecord::new("./b", 75)],
        );
        assert_eq!(report.total_bytes, 100);
        assert_eq!(report.entries[0].percent, Some(25.0));
        assert_eq!(report.entries[1].percent, Some(75.0));
    }

    #[test]
    fn test_report_zero_total_has_no_percentages() {
        let report = UsageReport::from_records(
            ".",
            vec![UsageRecord::new("./a", 0), UsageRecord::new(".", 0)],
        );
        assert_eq!(report.total_bytes, 0);
        assert_eq!(report.len(), 2);
        assert!(report.entries.iter().all(|e| e.percent.is_none()));
    }

    #[test]
    fn test_report_total_saturates() {
        let report = UsageReport::from_records(
            ".",
            vec![UsageRecord::new("./a", u64::MAX), UsageRecord::new("./b", 1)],
        );
        assert_eq!(report.total_bytes, u64::MAX);
        let percent = report.entries[0].percent.unwrap();
        assert!((0.0..=100.0).contains(&percent));
    }

    #[test]
    fn test_default_options() {
        let options = ReportOptions::default();
        assert!(!options.human_readable);
        assert_eq!(options.bar_length, 20);
    }
}
