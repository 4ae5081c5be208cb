//! gyrofeed - 3-axis sensor record delivery
//!
//! Streams synthetic or supplied gyro readings to a receiver over TCP, or
//! writes them into the receiver's settings file.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{FileArgs, ReadArgs, SocketArgs};

#[derive(Parser)]
#[command(name = "gyrofeed")]
#[command(about = "Deliver 3-axis gyro sensor records over a socket or a settings file")]
#[command(version)]
#[command(long_about = "
gyrofeed injects gyroscope readings into a downstream application. The socket
channel sends one `x,y,z` line per record to a listening receiver; the file
channel overwrites the receiver's settings file with a single record.

Use --json for machine-readable output suitable for scripting.
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

    /// YAML configuration file layered over the built-in defaults
    #[arg(long, global = true, env = "GYROFEED_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send records to a listening receiver
    Socket(SocketArgs),

    /// Overwrite the receiver's settings file with one record
    File(FileArgs),

    /// Print the record stored in a settings file
    Read(ReadArgs),

    /// Print the effective configuration
    Config,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = error::exit_code(&e);
            if cli.json {
                output::print_error_json(&e, code);
            } else {
                output::print_error_human(&e);
            }
            ExitCode::from(code)
        }
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "gyrofeed={log_level},gyrofeed_core={log_level},\
                     gyrofeed_stream={log_level},gyrofeed_settings={log_level}"
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
}

fn execute_command(cli: &Cli) -> Result<()> {
    if let Commands::Completion { shell } = &cli.command {
        completion::generate_completion(*shell);
        return Ok(());
    }

    let config = commands::load_config(cli.config.as_deref())?;
    match &cli.command {
        Commands::Socket(args) => commands::socket::execute(args, config, cli.json),
        Commands::File(args) => commands::file::execute(args, config, cli.json),
        Commands::Read(args) => commands::read::execute(args, config, cli.json),
        Commands::Config => commands::config::execute(&config, cli.json),
        Commands::Completion { .. } => Ok(()),
    }
}
