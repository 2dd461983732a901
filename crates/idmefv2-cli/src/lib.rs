//! # idmefv2-cli — Command Modules
//!
//! Handler modules for the `idmefv2` binary. Each subcommand gets its
//! own module with a clap `Args` struct and a `run` entry point.

pub mod convert;
pub mod validate;
