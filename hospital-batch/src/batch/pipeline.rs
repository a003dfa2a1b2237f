//! Spreadsheet → filtered list → template file

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use super::excel::read_sheet;
use super::filter::{FilterOutcome, filter_rows};
use super::header::HeaderMap;
use super::report::ConsoleReporter;
use super::select::Batch;
use super::template::{TemplateDocument, TemplateRecord};
use crate::config::GeneratorConfig;

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub output: PathBuf,
    /// Rows below the header, whatever their content
    pub data_rows: usize,
    pub candidates: usize,
    pub batch_len: usize,
    pub remaining: usize,
}

/// Build the template document for a selected batch
pub fn build_document(batch: &Batch, generated_at: NaiveDateTime) -> TemplateDocument {
    let records = batch
        .hospitals
        .iter()
        .map(TemplateRecord::from_candidate)
        .collect();
    TemplateDocument::new(generated_at, records, batch.remaining())
}

/// Run the whole generation pass
///
/// Every failure happens before the output file is touched, so an aborted
/// run never leaves a partial template behind.
pub fn generate(
    config: &GeneratorConfig,
    reporter: &ConsoleReporter,
    generated_at: NaiveDateTime,
) -> Result<GenerationSummary> {
    reporter.loading(&config.input);
    let sheet = read_sheet(&config.input, &config.sheet)?;
    reporter.reading_sheet(&sheet.name);

    let headers = HeaderMap::from_row(sheet.header());
    reporter.found_columns(&headers);
    let layout = headers.resolve()?;
    log::debug!("Column layout: {:?}", layout);

    let FilterOutcome {
        candidates,
        skipped_blank,
        skipped_done,
        skipped_invalid,
    } = filter_rows(&sheet, layout, config.invalid_fac)?;
    log::debug!(
        "Filtered {} rows: {} kept, {} without FAC, {} done, {} invalid",
        sheet.data_row_count(),
        candidates.len(),
        skipped_blank,
        skipped_done,
        skipped_invalid
    );

    let batch = Batch::select(candidates, config.batch_size);
    for hospital in &batch.hospitals {
        log::debug!("Batch entry: FAC {} from row {}", hospital.fac, hospital.row);
    }
    reporter.counts(sheet.data_row_count(), &batch, skipped_invalid);

    let document = build_document(&batch, generated_at);
    fs::write(&config.output, document.render()).with_context(|| {
        format!(
            "Failed to write template to: {}",
            config.output.display()
        )
    })?;
    log::info!("Template written to: {}", config.output.display());

    reporter.generated(&config.output, &batch);

    Ok(GenerationSummary {
        output: config.output.clone(),
        data_rows: sheet.data_row_count(),
        candidates: batch.total_candidates,
        batch_len: batch.len(),
        remaining: batch.remaining(),
    })
}
