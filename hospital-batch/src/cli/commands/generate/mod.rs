//! Arguments for generating the next batch template

mod handler;

pub use handler::handle_generate_command;

use std::path::PathBuf;

use clap::Args;

use crate::config::ConfigOverrides;

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Workbook containing the hospital tracking sheet
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Template file to write (overwritten if it exists)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Name of the sheet with the FAC, Hospital and done columns
    #[arg(short, long)]
    pub sheet: Option<String>,

    /// Maximum number of hospitals in the batch
    #[arg(short = 'n', long)]
    pub batch_size: Option<usize>,

    /// TOML file with input, output, sheet, batch_size and skip_invalid_fac keys
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip rows whose FAC is not a whole number instead of aborting
    #[arg(long)]
    pub skip_invalid_fac: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl GenerateArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input: self.input.clone(),
            output: self.output.clone(),
            sheet: self.sheet.clone(),
            batch_size: self.batch_size,
            skip_invalid_fac: self.skip_invalid_fac,
        }
    }
}
