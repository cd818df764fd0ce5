pub mod completions;
pub mod report;
