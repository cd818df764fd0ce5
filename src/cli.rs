use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use usagebar::ScannerKind;

#[derive(Parser)]
#[command(name = "duim")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "DU Improved -- See Disk Usage Report with Bar Charts", long_about = None)]
pub struct Cli {
    /// The directory to scan
    #[arg(default_value = ".")]
    pub target: String,

    /// Print sizes in human-readable format
    #[arg(short = 'H', long)]
    pub human_readable: bool,

    /// Length of the bar graph [default: 20]
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Scan backend [default: du]
    #[arg(short, long, value_enum)]
    pub scanner: Option<ScannerArg>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Config file (defaults to ~/.config/duim/config.toml)
    #[arg(long, env = "DUIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScannerArg {
    /// External `du -d 1`
    Du,
    /// Built-in directory walker
    Native,
}

impl From<ScannerArg> for ScannerKind {
    fn from(arg: ScannerArg) -> Self {
        match arg {
            ScannerArg::Du => ScannerKind::Du,
            ScannerArg::Native => ScannerKind::Native,
        }
    }
}
