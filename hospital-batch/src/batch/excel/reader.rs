//! Load a named worksheet into memory

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Reader, Xlsx, open_workbook};

use crate::batch::GenerateError;

/// A worksheet copied out of the workbook
///
/// Rows are anchored at `A1`: `rows[0]` is sheet row 1 and `rows[r][0]` is
/// column A, even when the used range starts further down or right.
#[derive(Debug, Clone, Default)]
pub struct SheetData {
    pub name: String,
    pub rows: Vec<Vec<Data>>,
}

impl SheetData {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Data>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// The header row (sheet row 1), empty if the sheet has no cells
    pub fn header(&self) -> &[Data] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every row below the header, paired with its 1-based sheet row number
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[Data])> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(idx, row)| (idx + 1, row.as_slice()))
    }

    /// Number of rows below the header
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}

/// Open an Excel workbook and read the sheet named `sheet_name`
pub fn read_sheet(path: &Path, sheet_name: &str) -> Result<SheetData> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet_name) {
        return Err(GenerateError::SheetNotFound {
            sheet: sheet_name.to_string(),
            available,
        }
        .into());
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    let (start_row, start_col) = match range.start() {
        Some((row, col)) => (row as usize, col as usize),
        None => return Ok(SheetData::new(sheet_name, Vec::new())),
    };

    log::debug!(
        "Sheet '{}' used range starts at row {}, column {} ({} rows)",
        sheet_name,
        start_row + 1,
        start_col + 1,
        range.height()
    );

    let mut rows: Vec<Vec<Data>> = vec![Vec::new(); start_row];
    for row in range.rows() {
        let mut anchored = vec![Data::Empty; start_col];
        anchored.extend(row.iter().cloned());
        rows.push(anchored);
    }

    Ok(SheetData::new(sheet_name, rows))
}
