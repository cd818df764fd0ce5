use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use usagebar::{ReportOptions, ScannerKind};

use crate::cli::Cli;

/// Get the config directory path
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("duim"))
}

// ============================================================================
// Config File
// ============================================================================

/// Optional defaults from `config.toml`. Every key may be omitted.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub length: Option<i64>,
    pub human_readable: Option<bool>,
    pub scanner: Option<ScannerKind>,
}

impl Config {
    /// Load config from an explicit path, or from the default location.
    ///
    /// A missing default file yields an empty config; a missing explicit
    /// file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = config_dir()?.join("config.toml");
                if !path.exists() {
                    log::debug!("No config at {}, using defaults", path.display());
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Self::parse(&content).with_context(|| format!("Invalid config format in {}", path.display()))
    }

    /// Parse config TOML
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

// ============================================================================
// Resolved Settings
// ============================================================================

/// Effective settings for one run: CLI flags over config over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub target: String,
    pub options: ReportOptions,
    pub scanner: ScannerKind,
    pub json: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let target = shellexpand::tilde(&cli.target).into_owned();

        let options = ReportOptions {
            human_readable: cli.human_readable || config.human_readable.unwrap_or(false),
            bar_length: cli
                .length
                .or(config.length)
                .unwrap_or(ReportOptions::DEFAULT_BAR_LENGTH),
        };

        let scanner = cli
            .scanner
            .map(ScannerKind::from)
            .or(config.scanner)
            .unwrap_or_default();

        Self {
            target,
            options,
            scanner,
            json: cli.json,
        }
    }

    pub fn target_path(&self) -> &Path {
        Path::new(&self.target)
    }
}
