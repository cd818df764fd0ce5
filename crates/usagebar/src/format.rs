//! Byte count formatting.
//!
//! Human-readable sizes use single-letter binary units (`B`, `K`, `M`, `G`,
//! `T`) with one fractional digit, the same shape `du -h` prints. Anything
//! past terabytes is reported in `P` without a further threshold check.

/// Unit letters stepped through while the value is at least 1024.
const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];

/// Unit used once every entry in [`UNITS`] has been exhausted.
const OVERFLOW_UNIT: &str = "P";

const STEP: f64 = 1024.0;

/// Format a byte count for display.
///
/// Without `human_readable` this is the plain decimal count; callers append
/// the "bytes" label themselves.
pub fn format_size(size_bytes: u64, human_readable: bool) -> String {
    if !human_readable {
        return size_bytes.to_string();
    }

    let mut value = size_bytes as f64;
    for unit in UNITS {
        if value < STEP {
            return format!("{value:.1}{unit}");
        }
        value /= STEP;
    }
    format!("{value:.1}{OVERFLOW_UNIT}")
}
