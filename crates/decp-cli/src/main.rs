//! decp explorer CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use decp_cli::logging::{LogConfig, LogFormat, init_logging};
use decp_client::{ApiSettings, Settings};

mod cli;
mod commands;
mod preview;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(2);
        }
    };
    let result = match &cli.command {
        Command::Marches(args) => commands::run_marches(&settings, args).await,
        Command::Concessions(args) => commands::run_concessions(&settings, args).await,
        Command::Acheteurs(args) => commands::run_structures(&settings, args, true).await,
        Command::Vendeurs(args) => commands::run_structures(&settings, args, false).await,
        Command::Structure(args) => commands::run_structure(&settings, args).await,
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Deployment settings: a JSON file, an API base override, or both.
fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::from_file(path)
            .map_err(|error| anyhow::anyhow!("read {}: {error}", path.display()))?,
        None => Settings {
            api: ApiSettings {
                base: String::new(),
            },
            date_min: None,
            opsn: String::new(),
            region: String::new(),
            departements: vec![],
        },
    };
    if let Some(base) = &cli.api_base {
        settings.api.base = base.clone();
    }
    if settings.api.base.is_empty() {
        anyhow::bail!("no API base configured; pass --settings <file> or --api-base <url>");
    }
    Ok(settings)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
