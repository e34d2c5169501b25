use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod builder;
mod cli;
mod commands;
mod config;
mod export;
mod indexer;
mod persona;
mod render;
mod vocab;

use cli::{Cli, Commands, OutputFormat};
use config::{Config, LogLevel};

fn setup_logging(log_level: &LogLevel) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("persona-engine")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("persona.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(log_level.as_filter());
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!(
        "Log level: {} (from {})",
        log_level,
        if std::env::var("RUST_LOG").is_ok() { "RUST_LOG env" } else { "config" }
    );
    Ok(())
}

/// `--verbose` and `--quiet` adjust the configured level
fn effective_level(cli: &Cli, config: &Config) -> LogLevel {
    if cli.verbose {
        LogLevel::Debug
    } else if cli.quiet {
        LogLevel::Error
    } else {
        config.log_level
    }
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Render {
            profile,
            format,
            download,
            html,
        } => commands::render::run(profile, format, download, html, &config),
        Commands::Random {
            vocab,
            format,
            seed,
            download,
            save,
        } => commands::random::run(vocab, format, seed, download, save, &config),
        Commands::Options {
            field,
            vocab,
            profile,
            search,
            all,
            output,
        } => commands::options::run(&field, vocab, profile, search, all, OutputFormat::resolve(output), &config),
        Commands::Fields { output } => commands::fields::run(OutputFormat::resolve(output)),
        Commands::Session { vocab, format, profile } => commands::session::run(vocab, format, profile, &config),
        Commands::Index { input, output, format } => {
            commands::index::run(input, output, OutputFormat::resolve(format), &config)
        }
        Commands::Clean { input, output, format } => {
            commands::clean::run(input, output, OutputFormat::resolve(format), &config)
        }
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&effective_level(&cli, &config)).context("Failed to setup logging")?;

    info!("Starting persona with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
