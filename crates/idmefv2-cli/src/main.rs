//! # idmefv2 CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// IDMEFv2 message toolchain.
///
/// Validates JSON message files against their governing schema and
/// converts payloads between registered content types.
#[derive(Parser, Debug)]
#[command(name = "idmefv2", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate message files.
    Validate(idmefv2_cli::validate::ValidateArgs),
    /// Convert a payload from one content type to another.
    Convert(idmefv2_cli::convert::ConvertArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => idmefv2_cli::validate::run(&args),
        Commands::Convert(args) => idmefv2_cli::convert::run(&args),
    }
}
