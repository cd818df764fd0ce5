//! Progress indicators for duim.
//!
//! Spinners draw on stderr and disappear when it is not a terminal, so
//! piping the report stays clean.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Start a spinner with a message. Returns a hidden bar when `quiet`.
pub fn spinner(msg: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Stop a spinner and erase it.
pub fn finish_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}
