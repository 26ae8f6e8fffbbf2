//! player-stats CLI
//!
//! Command-line front end for the Player Stats API.

mod cli_types;
mod client;
mod commands;
mod error;
mod spinner;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands};
use client::ApiClient;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    match run(cli) {
        Ok(()) => {}
        Err(CliError::Cancelled) => log::info!("Cancelled."),
        Err(CliError::Api { status, message }) => {
            log::debug!("API responded with HTTP {status}");
            log::error!("{message}");
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let client = ApiClient::new(&cli.api)?;
    log::debug!("Using API at {}", client.base());
    let quiet = cli.quiet;

    match cli.command {
        Commands::List { filter } => commands::run_list(&client, &filter, quiet),
        Commands::Options => commands::run_options(&client, quiet),
        Commands::Show { id } => commands::run_show(&client, id, quiet),
        Commands::Add { player } => commands::run_add(&client, player, quiet),
        Commands::Edit { id, changes } => commands::run_edit(&client, id, &changes, quiet),
        Commands::Remove { id, yes } => commands::run_remove(&client, id, yes, quiet),
        Commands::Health => commands::run_health(&client, quiet),
    }
}

/// Plain messages on stdout; `--verbose` adds level and target.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("player_stats", level)
        .target(env_logger::Target::Stdout);
    if verbose {
        builder.format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.parse_default_env().init();
}
