//! Cell value helpers shared by the header resolver and the row filter

use calamine::Data;

/// Outcome of reading a FAC cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacCell {
    /// Blank, empty text, zero or `false`: the row carries no facility code
    Blank,
    /// A usable facility code
    Code(i64),
    /// Non-empty but not convertible to an integer (raw text kept for diagnostics)
    Invalid(String),
}

/// Render a cell as text, empty for blank cells
///
/// Whole floats drop their fractional part so `7.0` reads as `"7"`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.is_finite() && f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Whether a cell counts as "no value": blank, empty text, zero or `false`
pub fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        Data::Int(i) => *i == 0,
        Data::Float(f) => *f == 0.0,
        Data::Bool(b) => !b,
        _ => false,
    }
}

/// Read a cell from a row, treating cells past the end of a short row as blank
pub fn get_cell(row: &[Data], col: usize) -> &Data {
    const EMPTY: &Data = &Data::Empty;
    row.get(col).unwrap_or(EMPTY)
}

/// Convert a FAC cell to an integer code
pub fn parse_fac(cell: &Data) -> FacCell {
    if is_blank(cell) {
        return FacCell::Blank;
    }

    match cell {
        Data::Int(i) => FacCell::Code(*i),
        Data::Float(f) if f.is_finite() && f.abs() < i64::MAX as f64 => {
            FacCell::Code(f.trunc() as i64)
        }
        Data::Bool(true) => FacCell::Code(1),
        Data::String(s) => match s.trim().parse::<i64>() {
            Ok(code) => FacCell::Code(code),
            Err(_) => FacCell::Invalid(s.clone()),
        },
        other => FacCell::Invalid(cell_text(other)),
    }
}

/// Normalize a done-flag: trimmed and lower-cased, empty when blank
pub fn normalize_done(cell: &Data) -> String {
    if is_blank(cell) {
        return String::new();
    }
    cell_text(cell).trim().to_lowercase()
}

/// Normalize a hospital name: trimmed and upper-cased, empty when blank
pub fn normalize_name(cell: &Data) -> String {
    if is_blank(cell) {
        return String::new();
    }
    cell_text(cell).trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_whole_float() {
        assert_eq!(cell_text(&Data::Float(7.0)), "7");
        assert_eq!(cell_text(&Data::Float(7.5)), "7.5");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn test_is_blank_follows_truthiness() {
        assert!(is_blank(&Data::Empty));
        assert!(is_blank(&Data::String(String::new())));
        assert!(is_blank(&Data::Int(0)));
        assert!(is_blank(&Data::Float(0.0)));
        assert!(is_blank(&Data::Bool(false)));

        assert!(!is_blank(&Data::String(" ".to_string())));
        assert!(!is_blank(&Data::Int(3)));
        assert!(!is_blank(&Data::Bool(true)));
    }

    #[test]
    fn test_get_cell_short_row() {
        let row = vec![Data::Int(1)];
        assert_eq!(get_cell(&row, 0), &Data::Int(1));
        assert_eq!(get_cell(&row, 5), &Data::Empty);
    }

    #[test]
    fn test_parse_fac_numeric() {
        assert_eq!(parse_fac(&Data::Int(7)), FacCell::Code(7));
        assert_eq!(parse_fac(&Data::Float(12.0)), FacCell::Code(12));
        assert_eq!(parse_fac(&Data::Float(7.9)), FacCell::Code(7));
        assert_eq!(parse_fac(&Data::Bool(true)), FacCell::Code(1));
    }

    #[test]
    fn test_parse_fac_text() {
        assert_eq!(parse_fac(&Data::String(" 42 ".to_string())), FacCell::Code(42));
        assert_eq!(parse_fac(&Data::String("007".to_string())), FacCell::Code(7));
        assert_eq!(
            parse_fac(&Data::String("abc".to_string())),
            FacCell::Invalid("abc".to_string())
        );
        assert_eq!(
            parse_fac(&Data::String("7.5".to_string())),
            FacCell::Invalid("7.5".to_string())
        );
        assert_eq!(
            parse_fac(&Data::String("  ".to_string())),
            FacCell::Invalid("  ".to_string())
        );
    }

    #[test]
    fn test_parse_fac_blank() {
        assert_eq!(parse_fac(&Data::Empty), FacCell::Blank);
        assert_eq!(parse_fac(&Data::Int(0)), FacCell::Blank);
        assert_eq!(parse_fac(&Data::String(String::new())), FacCell::Blank);
    }

    #[test]
    fn test_parse_fac_non_finite() {
        assert!(matches!(parse_fac(&Data::Float(f64::NAN)), FacCell::Invalid(_)));
        assert!(matches!(
            parse_fac(&Data::Float(f64::INFINITY)),
            FacCell::Invalid(_)
        ));
    }

    #[test]
    fn test_normalize_done() {
        assert_eq!(normalize_done(&Data::String(" Y ".to_string())), "y");
        assert_eq!(normalize_done(&Data::String("n".to_string())), "n");
        assert_eq!(normalize_done(&Data::Empty), "");
        assert_eq!(normalize_done(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(
            normalize_name(&Data::String(" st. mary's ".to_string())),
            "ST. MARY'S"
        );
        assert_eq!(normalize_name(&Data::Empty), "");
    }
}
