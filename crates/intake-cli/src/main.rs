mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{backup, completions, follow_ups, inquiries, list, transfer, Context};
use crate::error::{exit_code_for, report_error};
use intake_config as config;
use intake_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "intake", version, about = "Track sales inquiries and follow-ups")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
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
    /// Record a new inquiry, optionally with its first follow-up details
    #[command(name = "add-inquiry")]
    AddInquiry(inquiries::AddInquiryArgs),
    /// Record a standalone follow-up
    #[command(name = "add-follow-up")]
    AddFollowUp(follow_ups::AddFollowUpArgs),
    /// List inquiries and follow-ups
    List(list::ListArgs),
    /// Show one inquiry in full
    Show(inquiries::ShowArgs),
    #[command(name = "delete-inquiry")]
    DeleteInquiry(inquiries::DeleteArgs),
    #[command(name = "delete-follow-up")]
    DeleteFollowUp(follow_ups::DeleteArgs),
    Backup(backup::BackupArgs),
    /// Write all records as a JSON snapshot
    Export(transfer::ExportArgs),
    /// Append records from a JSON snapshot
    Import(transfer::ImportArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
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
        db_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
            Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
            Err(err) => debug!(error = %err, "config unavailable"),
        }
    }

    let db_path = paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;
    debug!(path = %db_path.display(), "database path resolved");

    let store =
        Store::open(&db_path).with_context(|| format!("open database {}", db_path.display()))?;
    store.migrate().with_context(|| "run migrations")?;

    let ctx = Context {
        store: &store,
        json,
        config: &app_config,
        display: app_config.display_options(),
    };

    match command {
        Command::AddInquiry(args) => inquiries::add_inquiry(&ctx, args),
        Command::AddFollowUp(args) => follow_ups::add_follow_up(&ctx, args),
        Command::List(args) => list::list(&ctx, args),
        Command::Show(args) => inquiries::show_inquiry(&ctx, args),
        Command::DeleteInquiry(args) => inquiries::delete_inquiry(&ctx, args),
        Command::DeleteFollowUp(args) => follow_ups::delete_follow_up(&ctx, args),
        Command::Backup(args) => backup::backup(&ctx, args),
        Command::Export(args) => transfer::export(&ctx, args),
        Command::Import(args) => transfer::import(&ctx, args),
        Command::Completions(_) => {
            unreachable!("completions command handled before store initialization")
        }
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
