//! Native backend implementation.
//!
//! Walks the target with `walkdir` instead of spawning `du`. Sizes are
//! apparent file lengths (what `ls -l` shows), not allocated blocks, so
//! numbers differ from `du` for sparse files and tiny files.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;

use super::{Scanner, check_target, usage_line};

/// Backend implementation walking the filesystem directly.
///
/// Output mirrors `du -d 1`: one line per immediate child directory (sorted
/// by file name), then one line for the target. Files directly inside the
/// target count toward the target line only. Symlinks are not followed.
#[derive(Debug, Default)]
pub struct NativeScanner;

impl NativeScanner {
    /// Create a new NativeScanner
    pub fn new() -> Self {
        Self
    }
}

impl Scanner for NativeScanner {
    fn name(&self) -> &'static str {
        "native"
    }

    fn scan(&self, target: &Path) -> Result<Vec<String>> {
        check_target(target)?;

        let mut lines = Vec::new();
        let mut target_total = 0u64;

        let children = WalkDir::new(target)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in children {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                let size = dir_size(entry.path());
                target_total = target_total.saturating_add(size);
                lines.push(usage_line(size, entry.path()));
            } else {
                target_total = target_total.saturating_add(entry_len(&entry));
            }
        }

        lines.push(usage_line(target_total, target));
        log::debug!("Native scan of {} found {} directories", target.display(), lines.len() - 1);
        Ok(lines)
    }
}

/// Total apparent size of every non-directory entry under `path`.
fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|e| !e.file_type().is_dir())
        .fold(0u64, |acc, e| acc.saturating_add(entry_len(&e)))
}

fn entry_len(entry: &walkdir::DirEntry) -> u64 {
    entry.metadata().map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        fs::create_dir(root.join("b")).unwrap();
        fs::create_dir_all(root.join("b").join("nested")).unwrap();
        fs::write(root.join("b").join("nested").join("deep.bin"), vec![0u8; 50]).unwrap();
        fs::write(root.join("b").join("top.bin"), vec![0u8; 25]).unwrap();

        fs::create_dir(root.join("a")).unwrap();
        fs::write(root.join("a").join("data.bin"), vec![0u8; 100]).unwrap();

        fs::create_dir(root.join("empty")).unwrap();
        fs::write(root.join("loose.txt"), vec![0u8; 10]).unwrap();

        dir
    }

    #[test]
    fn test_scan_one_level() {
        let dir = fixture();
        let root = dir.path();

        let lines = NativeScanner::new().scan(root).unwrap();
        assert_eq!(
            lines,
            vec![
                format!("100\t{}", root.join("a").display()),
                format!("75\t{}", root.join("b").display()),
                format!("0\t{}", root.join("empty").display()),
                format!("185\t{}", root.display()),
            ]
        );
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let lines = NativeScanner::new().scan(dir.path()).unwrap();
        assert_eq!(lines, vec![format!("0\t{}", dir.path().display())]);
    }

    #[test]
    fn test_scan_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let result = NativeScanner::new().scan(&dir.path().join("missing"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_scan_feeds_aggregator() {
        let dir = fixture();
        let target = dir.path().display().to_string();

        let lines = NativeScanner::new().scan(dir.path()).unwrap();
        let report = crate::aggregate(target.clone(), &lines);

        assert_eq!(report.len(), 4);
        assert_eq!(report.total_bytes, 360);
        assert_eq!(report.entries.last().unwrap().path, target);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_does_not_follow_symlinks() {
        let dir = fixture();
        let root = dir.path();
        std::os::unix::fs::symlink(root.join("a"), root.join("b").join("link")).unwrap();

        let lines = NativeScanner::new().scan(root).unwrap();
        let link_len = fs::symlink_metadata(root.join("b").join("link")).unwrap().len();
        assert_eq!(lines[1], format!("{}\t{}", 75 + link_len, root.join("b").display()));
    }
}
