use crate::types::{UsageRecord, UsageReport};

/// Parse raw scan lines into an ordered usage report.
///
/// Lines that are not `<bytes>\t<path>` are scan noise and get dropped.
/// Every other line becomes an entry, in input order, including duplicates
/// and the target's own aggregate line. With no usable lines the report is
/// empty and its total is zero.
pub fn aggregate<I, S>(target_path: impl Into<String>, raw_lines: I) -> UsageReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for line in raw_lines {
        let line = line.as_ref();
        match UsageRecord::parse(line) {
            Some(record) => records.push(record),
            None => {
                log::debug!("Skipping unparseable scan line: {line:?}");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::debug!("Kept {} scan lines, skipped {}", records.len(), skipped);
    }

    UsageReport::from_records(target_path, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(report: &UsageReport) -> Vec<(&str, u64)> {
        report
            .entries
            .iter()
            .map(|e| (e.path.as_str(), e.size_bytes))
            .collect()
    }

    #[test]
    fn test_aggregate_empty() {
        let report = aggregate(".", Vec::<String>::new());
        assert_eq!(report.total_bytes, 0);
        assert!(report.is_empty());
        assert_eq!(report.target_path, ".");
    }

    #[test]
    fn test_aggregate_skips_noise() {
        let report = aggregate("/", ["100\t/a", "garbage-no-tab", "200\t/b"]);
        assert_eq!(report.total_bytes, 300);
        assert_eq!(paths(&report), vec![("/a", 100), ("/b", 200)]);
    }

    #[test]
    fn test_aggregate_nothing_parseable() {
        let report = aggregate(".", ["du: cannot read directory", "", "x\ty\tz"]);
        assert_eq!(report.total_bytes, 0);
        assert!(report.is_empty());
    }

    #[test]
    fn test_aggregate_keeps_scan_order() {
        let report = aggregate(".", ["5\t./zeta", "500\t./alpha", "50\t./mid", "555\t."]);
        assert_eq!(
            paths(&report),
            vec![("./zeta", 5), ("./alpha", 500), ("./mid", 50), (".", 555)]
        );
    }

    #[test]
    fn test_aggregate_counts_target_line() {
        let report = aggregate(".", ["300\t.", "100\t./sub1", "200\t./sub2"]);
        assert_eq!(report.total_bytes, 600);
        assert_eq!(report.len(), 3);
        assert_eq!(report.entries[0].percent, Some(50.0));
    }

    #[test]
    fn test_aggregate_keeps_duplicate_paths() {
        let report = aggregate(".", ["10\t./a", "30\t./a"]);
        assert_eq!(report.total_bytes, 40);
        assert_eq!(paths(&report), vec![("./a", 10), ("./a", 30)]);
    }

    #[test]
    fn test_aggregate_accepts_owned_lines() {
        let lines: Vec<String> = vec!["7\t./x".to_string()];
        let report = aggregate(String::from("."), lines);
        assert_eq!(report.total_bytes, 7);
        assert_eq!(report.entries[0].percent, Some(100.0));
    }
}
