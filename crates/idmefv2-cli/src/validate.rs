//! # Validate Subcommand
//!
//! Runs each input file through the full deserialize path — codec
//! resolution, decode, schema validation — and reports per-file results.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use idmefv2_core::APPLICATION_JSON;
use idmefv2_message::{Message, SerializedMessage};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Message files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Content type the files are encoded with.
    #[arg(long, default_value = APPLICATION_JSON)]
    pub content_type: String,
}

pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    let mut failures = 0usize;

    for path in &args.files {
        let raw = std::fs::read(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let payload = SerializedMessage::new(args.content_type.as_str(), raw);

        match Message::deserialize(&payload) {
            Ok(_) => println!("{}: OK", path.display()),
            Err(e) => {
                failures += 1;
                eprintln!("{}: {e}", path.display());
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} file(s) failed validation", args.files.len());
    }
    Ok(())
}
