//! Storable CLI - typed values in a durable or session-scoped key-value store
//!
//! This is the command-line interface for Storable. It stores JSON objects and
//! arrays through the record and sequence wrappers and reads them back.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod output;

use clap::Parser;
use storable_core::StorableError;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ConfigSubcommand};
use crate::commands::{config as config_cmd, misc, values};
use crate::constants::{exit_codes, LOG_ENV};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        eprintln!("Error: {}", e);
        if let Some(hint) = error_hint(&e) {
            eprintln!("{}", hint);
        }
        std::process::exit(exit_code(&e));
    }
}

/// Logs go to stderr so stdout stays clean for JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<StorableError>() {
        Some(StorableError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(StorableError::InvalidArgument(_)) => exit_codes::INVALID_INPUT,
        Some(StorableError::Deserialization(_)) => exit_codes::CORRUPT_VALUE,
        _ => 1,
    }
}

fn error_hint(error: &anyhow::Error) -> Option<&'static str> {
    match error.downcast_ref::<StorableError>()? {
        StorableError::NotFound(_) => {
            Some("Hint: Run `storable list` to see stored keys in both tiers.")
        }
        StorableError::Deserialization(_) => {
            Some("Hint: Try `--shape record` or `--shape sequence`, or overwrite the key.")
        }
        _ => None,
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Store(args) => values::handle_store(ctx, args),
        Commands::Retrieve(args) => values::handle_retrieve(ctx, args),
        Commands::Remove(args) => values::handle_remove(ctx, args),
        Commands::List(args) => values::handle_list(ctx, args),
        Commands::Config { command } => match command {
            ConfigSubcommand::Show { json } => config_cmd::handle_show(ctx, *json),
            ConfigSubcommand::Init { force } => config_cmd::handle_init(ctx, *force),
        },
        Commands::Completions { shell } => misc::handle_completions(*shell),
    }
}
