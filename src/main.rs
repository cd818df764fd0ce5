mod cli;
mod commands;
mod config;
mod progress;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::{Config, Settings};

/// Global context for the application
pub struct Context {
    pub quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    if let Some(shell) = cli.completions {
        commands::completions::run(shell);
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, &config);
    log::debug!("Resolved settings: {settings:?}");

    let ctx = Context { quiet: cli.quiet };

    commands::report::run(&ctx, &settings)
}
