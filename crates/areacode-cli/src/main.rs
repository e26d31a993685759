mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{list, resolve, show, Context};
use crate::error::{exit_code_for, report_error};
use areacode_config as config;
use areacode_config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "areacode", version, about = "Look up the location of a phone number's area code")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve phone numbers to their area-code location
    Resolve(resolve::ResolveArgs),
    /// Show the table entry for an area code
    Show(show::ShowArgs),
    /// List table entries
    List(list::ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
            Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
            Err(err) => debug!(error = %err, "config unavailable"),
        }
    }

    let table = app_config.location_table();
    debug!(
        entries = table.len(),
        overrides = app_config.areas.len(),
        removed = app_config.removed.len(),
        "location table ready"
    );

    let ctx = Context {
        table: &table,
        json: json || app_config.default_format == OutputFormat::Json,
    };

    match command {
        Command::Resolve(args) => resolve::resolve_numbers(&ctx, args),
        Command::Show(args) => show::show_area(&ctx, args),
        Command::List(args) => list::list_areas(&ctx, args),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
