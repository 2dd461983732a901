//! # Convert Subcommand
//!
//! Decodes a payload with the codec registered for its content type and
//! re-encodes it with another, validating the message on both crossings.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use idmefv2_core::APPLICATION_JSON;
use idmefv2_message::{Message, SerializedMessage};

/// Arguments for the convert subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input payload file.
    pub file: PathBuf,

    /// Content type of the input payload.
    #[arg(long, default_value = APPLICATION_JSON)]
    pub from: String,

    /// Content type to re-encode with.
    #[arg(long, default_value = APPLICATION_JSON)]
    pub to: String,

    /// Output file; stdout when omitted.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ConvertArgs) -> anyhow::Result<()> {
    let raw = std::fs::read(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;

    let message = Message::deserialize(&SerializedMessage::new(args.from.as_str(), raw))
        .with_context(|| format!("cannot decode {} as '{}'", args.file.display(), args.from))?;

    let converted = message
        .serialize(&args.to)
        .with_context(|| format!("cannot re-encode as '{}'", args.to))?;

    match &args.output {
        Some(path) => std::fs::write(path, converted.payload())
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => std::io::stdout()
            .write_all(converted.payload())
            .context("cannot write to stdout")?,
    }

    tracing::info!(
        from = %args.from,
        to = %args.to,
        bytes = converted.payload().len(),
        "converted message"
    );
    Ok(())
}
