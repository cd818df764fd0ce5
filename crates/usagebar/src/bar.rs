use crate::error::{Error, Result};

const FILL: char = '=';
const EMPTY: char = ' ';

/// Render a percentage as a fixed-width bar of `=` and spaces.
///
/// The filled width is `percent / 100 * total_chars` rounded half away from
/// zero, so 2.5 filled characters render as 3. A non-positive `total_chars`
/// yields an empty bar.
///
/// # Errors
///
/// `InvalidArgument` when `percent` is outside `0..=100` (or NaN). Callers
/// pass percentages computed from a usage total, so an out-of-range value
/// points at broken aggregation and is never clamped here.
pub fn render_bar(percent: f64, total_chars: i64) -> Result<String> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(Error::InvalidArgument(format!(
            "percent must be between 0 and 100, got {percent}"
        )));
    }

    if total_chars <= 0 {
        return Ok(String::new());
    }

    let width = total_chars as usize;
    let filled = ((percent / 100.0 * total_chars as f64).round() as usize).min(width);

    let mut bar = String::with_capacity(width);
    bar.extend(std::iter::repeat_n(FILL, filled));
    bar.extend(std::iter::repeat_n(EMPTY, width - filled));
    Ok(bar)
}
