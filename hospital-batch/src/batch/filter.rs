//! Select the hospitals that still need a template

use calamine::Data;

use super::GenerateError;
use super::excel::{FacCell, SheetData, cell_text, get_cell, normalize_done, parse_fac};
use super::header::ColumnLayout;

/// Done-flag value that marks a hospital as already processed
pub const DONE_MARKER: &str = "y";

/// What to do with a FAC cell that is not a whole number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidFacPolicy {
    /// Stop the run with an error naming the row
    #[default]
    Abort,
    /// Log a warning and leave the row out
    Skip,
}

/// A hospital that passed the filter
#[derive(Debug, Clone, PartialEq)]
pub struct HospitalCandidate {
    /// 1-based sheet row the candidate came from
    pub row: usize,
    pub fac: i64,
    /// Hospital cell exactly as read from the sheet
    pub hospital: Data,
}

impl HospitalCandidate {
    /// The hospital name as written in the sheet
    pub fn raw_name(&self) -> String {
        cell_text(&self.hospital)
    }
}

/// Candidates in sheet order plus counts of what was left out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    pub candidates: Vec<HospitalCandidate>,
    pub skipped_blank: usize,
    pub skipped_done: usize,
    pub skipped_invalid: usize,
}

/// Walk every data row and keep those with a FAC that are not marked done
pub fn filter_rows(
    sheet: &SheetData,
    layout: ColumnLayout,
    policy: InvalidFacPolicy,
) -> Result<FilterOutcome, GenerateError> {
    let mut outcome = FilterOutcome::default();

    for (row_num, row) in sheet.data_rows() {
        let fac = match parse_fac(get_cell(row, layout.fac)) {
            FacCell::Blank => {
                outcome.skipped_blank += 1;
                continue;
            }
            FacCell::Code(code) => code,
            FacCell::Invalid(value) => {
                // A done row is skipped before its FAC would ever be formatted
                if is_done(row, layout) {
                    outcome.skipped_done += 1;
                    continue;
                }
                match policy {
                    InvalidFacPolicy::Abort => {
                        return Err(GenerateError::InvalidFac {
                            row: row_num,
                            value,
                        });
                    }
                    InvalidFacPolicy::Skip => {
                        log::warn!("Row {}: skipping invalid FAC value '{}'", row_num, value);
                        outcome.skipped_invalid += 1;
                        continue;
                    }
                }
            }
        };

        if is_done(row, layout) {
            log::debug!("Row {}: FAC {} already done", row_num, fac);
            outcome.skipped_done += 1;
            continue;
        }

        outcome.candidates.push(HospitalCandidate {
            row: row_num,
            fac,
            hospital: get_cell(row, layout.hospital).clone(),
        });
    }

    Ok(outcome)
}

fn is_done(row: &[Data], layout: ColumnLayout) -> bool {
    normalize_done(get_cell(row, layout.done)) == DONE_MARKER
}
