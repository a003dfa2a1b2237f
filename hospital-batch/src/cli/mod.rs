//! Command-line interface

pub mod commands;

use clap::Parser;

use commands::generate::GenerateArgs;

/// Generate a YAML template for the next batch of hospitals from the tracking spreadsheet
#[derive(Parser, Debug)]
#[command(name = "hospital-batch", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,
}
