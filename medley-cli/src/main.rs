//! Medley CLI - menu-driven access to the demo media catalog.

mod commands;

use clap::Parser;
use medley_core::MedleyConfig;
use medley_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "medley")]
#[command(about = "An in-memory media catalog")]
struct Cli {
    /// Console log verbosity
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,

    #[command(subcommand)]
    command: Option<commands::Commands>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = MedleyConfig::from_env();
    if let Some(level) = cli.log_level {
        config.logging.console_level = level;
    }
    init_tracing(&config.logging)?;

    commands::handle_command(cli.command.unwrap_or_default())
}
