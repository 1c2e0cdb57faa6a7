//! carportctl - replay and inspect car interface sessions
//!
//! Feeds recorded bus views and planner decisions through the same interface
//! session a vehicle runs, printing the frames it would send each cycle.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use anyhow::Result;
use carport_errors::CarportError;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::ReplayArgs;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "carportctl")]
#[command(about = "Car interface tools - replay recorded sessions and inspect variants")]
#[command(version)]
#[command(long_about = "
carportctl runs recorded signal frames through a Chrysler/FCA car interface
session and prints the frames the session would put on the bus.

Use --json for one JSON object per line, suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay recorded frames through an interface session
    Replay(ReplayArgs),

    /// List supported variants, or show one in full
    Variants {
        /// Variant name, e.g. PACIFICA_2020
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "carportctl={log_level},carport_interface={log_level},can_chrysler_protocol={log_level}"
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            std::process::exit(exit_code(&e));
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Replay(args) => commands::replay::execute(args, cli.json),
        Commands::Variants { name } => commands::variants::execute(name.as_deref(), cli.json),
    }
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<CliError>() {
        Some(CliError::Carport(CarportError::Config(_) | CarportError::Validation(_))) => 2,
        Some(CliError::NoVariant) | Some(CliError::UnknownVariant { .. }) => 3,
        Some(CliError::InvalidRecord { .. }) | Some(CliError::JsonError(_)) => 4,
        _ => 1,
    }
}
