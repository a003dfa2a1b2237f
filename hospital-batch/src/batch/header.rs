//! Resolve required columns from the header row by name

use calamine::Data;

use super::GenerateError;
use super::excel::{cell_text, is_blank};

pub const FAC_COLUMN: &str = "FAC";
pub const HOSPITAL_COLUMN: &str = "Hospital";
pub const DONE_COLUMN: &str = "done";

/// Headers that must be present, in the order they are reported when missing
pub const REQUIRED_COLUMNS: [&str; 3] = [FAC_COLUMN, HOSPITAL_COLUMN, DONE_COLUMN];

/// Header text mapped to its 0-based column offset
///
/// Names keep the position of their first appearance, but a repeated name
/// points at its last column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, usize)>,
}

impl HeaderMap {
    /// Scan a header row left to right, skipping blank cells
    pub fn from_row(header: &[Data]) -> Self {
        let mut map = Self::default();
        for (col, cell) in header.iter().enumerate() {
            if is_blank(cell) {
                continue;
            }
            map.insert(cell_text(cell), col);
        }
        map
    }

    fn insert(&mut self, name: String, col: usize) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = col,
            None => self.entries.push((name, col)),
        }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, col)| *col)
    }

    /// Header names in order of first appearance
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Look up the three required columns, failing with every missing name
    pub fn resolve(&self) -> Result<ColumnLayout, GenerateError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| self.get(name).is_none())
            .map(|name| name.to_string())
            .collect();

        match (
            self.get(FAC_COLUMN),
            self.get(HOSPITAL_COLUMN),
            self.get(DONE_COLUMN),
        ) {
            (Some(fac), Some(hospital), Some(done)) => Ok(ColumnLayout {
                fac,
                hospital,
                done,
            }),
            _ => Err(GenerateError::MissingColumns { missing }),
        }
    }
}

/// 0-based offsets of the required columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub fac: usize,
    pub hospital: usize,
    pub done: usize,
}
