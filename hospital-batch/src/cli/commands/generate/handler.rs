//! Generate command handler

use anyhow::Result;
use chrono::Local;

use super::GenerateArgs;
use crate::batch::{ConsoleReporter, GenerationSummary, generate};
use crate::config::GeneratorConfig;

/// Resolve configuration and run one generation pass
pub fn handle_generate_command(
    args: &GenerateArgs,
    reporter: &ConsoleReporter,
) -> Result<GenerationSummary> {
    // Handle --no-color flag
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = GeneratorConfig::resolve(args.config.as_deref(), args.overrides())?;

    reporter.banner();
    let summary = generate(&config, reporter, Local::now().naive_local())?;

    log::info!(
        "Batch of {} written to {} ({} data rows, {} not done, {} remaining)",
        summary.batch_len,
        summary.output.display(),
        summary.data_rows,
        summary.candidates,
        summary.remaining
    );
    Ok(summary)
}
