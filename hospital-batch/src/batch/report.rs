//! Console progress and summary output

use std::path::Path;

use colored::*;

use super::header::HeaderMap;
use super::select::Batch;
use super::template::format_fac;

const BANNER_WIDTH: usize = 70;

const NEXT_STEPS: &[&str] = &[
    "1. Review the generated YAML file",
    "2. For each hospital, find the leadership page URL",
    "3. Copy entries to enhanced_hospitals.yaml for testing",
    "4. Use quick_test(FAC) to test each hospital",
    "5. Mark done='y' in Excel when complete",
];

/// Prints each pipeline stage to stdout; never affects the written file
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn banner(&self) {
        println!("{}", rule());
        println!("{}", "HOSPITAL YAML TEMPLATE GENERATOR".bold());
        println!("{}", rule());
        println!();
    }

    pub fn loading(&self, path: &Path) {
        println!("Loading {}...", path.display().to_string().cyan());
    }

    pub fn reading_sheet(&self, sheet: &str) {
        println!("Reading from sheet: {}", sheet.cyan());
    }

    pub fn found_columns(&self, headers: &HeaderMap) {
        println!(
            "Found columns: {}",
            headers.names().collect::<Vec<_>>().join(", ")
        );
    }

    pub fn counts(&self, data_rows: usize, batch: &Batch, skipped_invalid: usize) {
        println!();
        println!("Total hospitals in file: {}", data_rows);
        println!(
            "Hospitals NOT marked done: {}",
            batch.total_candidates.to_string().bright_green()
        );
        if skipped_invalid > 0 {
            println!(
                "{}",
                format!("Skipped {} row(s) with an invalid FAC", skipped_invalid).yellow()
            );
        }
        if batch.is_empty() {
            println!("{}", "No hospitals left to configure".yellow());
        }
        println!("Generating template for {} hospitals", batch.len());
        println!();
    }

    pub fn generated(&self, output: &Path, batch: &Batch) {
        println!("{}", rule());
        println!(
            "{} Generated {}",
            "✓".bright_green().bold(),
            output.display().to_string().bright_green()
        );
        println!("{}", rule());
        println!();
        println!("{}", "NEXT STEPS:".bold());
        for step in NEXT_STEPS {
            println!("{}", step);
        }
        println!();
        println!("Hospitals in this batch: {}", batch.len());
        for line in batch_listing(batch) {
            println!("{}", line);
        }
    }

    /// Report a failed run on stderr
    pub fn error(&self, err: &anyhow::Error) {
        eprintln!("{} {:#}", "ERROR:".bright_red().bold(), err);
    }
}

fn rule() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Numbered `FAC-<code>: <name>` lines, with the name as written in the sheet
pub fn batch_listing(batch: &Batch) -> Vec<String> {
    batch
        .hospitals
        .iter()
        .enumerate()
        .map(|(idx, hospital)| {
            format!(
                "  {:2}. FAC-{}: {}",
                idx + 1,
                format_fac(hospital.fac),
                hospital.raw_name()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::filter::HospitalCandidate;
    use calamine::Data;

    fn candidate(fac: i64, name: &str) -> HospitalCandidate {
        HospitalCandidate {
            row: 2,
            fac,
            hospital: Data::String(name.to_string()),
        }
    }

    #[test]
    fn test_batch_listing_numbers_and_raw_names() {
        let batch = Batch::select(
            vec![candidate(7, " st. mary's "), candidate(5, "Rural Clinic")],
            30,
        );
        assert_eq!(
            batch_listing(&batch),
            vec![
                "   1. FAC-007:  st. mary's ".to_string(),
                "   2. FAC-005: Rural Clinic".to_string(),
            ]
        );
    }

    #[test]
    fn test_batch_listing_two_digit_numbers_align() {
        let candidates = (1..=10).map(|fac| candidate(fac, "X")).collect();
        let listing = batch_listing(&Batch::select(candidates, 30));
        assert_eq!(listing[8], "   9. FAC-009: X");
        assert_eq!(listing[9], "  10. FAC-010: X");
    }
}
