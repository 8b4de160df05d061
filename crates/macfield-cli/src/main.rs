mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{admin, backup, checkout, completions, email, fields, orders, Context};
use crate::error::{exit_code_for, report_error};
use macfield_config as config;
use macfield_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "macfield", version, about = "macfield CLI")]
pub(crate) struct Cli {
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
    /// Show the checkout fields for the configured placement
    Fields(fields::FieldsArgs),
    /// Simulate a storefront checkout submission
    Checkout(checkout::CheckoutArgs),
    /// Admin order screen operations
    #[command(subcommand)]
    Admin(admin::AdminCommand),
    Show(orders::ShowArgs),
    List(orders::ListArgs),
    Search(orders::SearchArgs),
    /// Preview the order confirmation email
    Email(email::EmailArgs),
    Backup(backup::BackupArgs),
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

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }
            let db_path =
                paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;

            if verbose {
                debug!(path = %db_path.display(), "database path resolved");
            }

            let store = Store::open(&db_path)
                .with_context(|| format!("open database {}", db_path.display()))?;
            store.migrate().with_context(|| "run migrations")?;

            let ctx = Context {
                store: &store,
                json,
                config: &app_config,
            };

            match command {
                Command::Fields(args) => fields::show_fields(&ctx, args),
                Command::Checkout(args) => checkout::checkout(&ctx, args),
                Command::Admin(cmd) => match cmd {
                    admin::AdminCommand::Edit(args) => admin::edit_order(&ctx, args),
                },
                Command::Show(args) => orders::show_order(&ctx, args),
                Command::List(args) => orders::list_orders(&ctx, args),
                Command::Search(args) => orders::search_orders(&ctx, args),
                Command::Email(args) => email::preview_email(&ctx, args),
                Command::Backup(args) => backup::backup(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before store initialization")
                }
            }
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
        .try_init();
}
