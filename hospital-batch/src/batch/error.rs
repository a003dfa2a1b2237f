//! Errors that abort a generation run before anything is written

/// Failure while turning the spreadsheet into a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The configured sheet is not in the workbook
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },
    /// One or more required header names are absent from the header row
    MissingColumns { missing: Vec<String> },
    /// A FAC cell holds a value that is not an integer
    InvalidFac { row: usize, value: String },
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::SheetNotFound { sheet, available } => {
                write!(
                    f,
                    "Sheet '{}' not found! Available sheets: {}",
                    sheet,
                    available.join(", ")
                )
            }
            GenerateError::MissingColumns { missing } => {
                write!(f, "Missing required columns: {}", missing.join(", "))
            }
            GenerateError::InvalidFac { row, value } => {
                write!(
                    f,
                    "Row {}: FAC value '{}' is not a whole number (use --skip-invalid-fac to skip such rows)",
                    row, value
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_names_columns() {
        let err = GenerateError::MissingColumns {
            missing: vec!["Hospital".to_string(), "done".to_string()],
        };
        assert_eq!(err.to_string(), "Missing required columns: Hospital, done");
    }

    #[test]
    fn test_sheet_not_found_lists_available() {
        let err = GenerateError::SheetNotFound {
            sheet: "LookupTypeFAC".to_string(),
            available: vec!["Sheet1".to_string(), "Archive".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Sheet 'LookupTypeFAC' not found! Available sheets: Sheet1, Archive"
        );
    }
}
