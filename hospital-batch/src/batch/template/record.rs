//! One hospital entry of the batch template

use std::fmt::Write;

use crate::batch::excel::normalize_name;
use crate::batch::filter::HospitalCandidate;

/// Placeholder values every new entry starts with
pub mod defaults {
    pub const URL: &str = "";
    pub const PATTERN: &str = "combined_h2";
    pub const EXPECTED_EXECUTIVES: u32 = 5;
    pub const COMBINED_ELEMENT: &str = "";
    pub const SEPARATOR: &str = "";
    pub const NOTES: &str = "";
    pub const STATUS: &str = "needs_configuration";
}

/// Inline hints telling the editor what to do with each placeholder
mod hints {
    pub const URL: &str = "← REQUIRED: Add leadership page URL";
    pub const PATTERN: &str = "← UPDATE: Change to match actual pattern";
    pub const EXPECTED_EXECUTIVES: &str = "← UPDATE: Change based on website";
    pub const COMBINED_ELEMENT: &str = "← CUSTOMIZABLE ";
    pub const SEPARATOR: &str = "← CUSTOMIZABLE";
    pub const NOTES: &str = "← OPTIONAL: Add any special notes";
    pub const STATUS: &str = "← UPDATE: Change to 'needs_testing' once URL added";
}

const ITEM_INDENT: &str = "   ";
const NESTED_INDENT: &str = "     ";

/// Fields that describe how executives are laid out on the leadership page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlStructure {
    pub combined_element: String,
    pub separator: String,
    pub notes: String,
}

impl Default for HtmlStructure {
    fn default() -> Self {
        Self {
            combined_element: defaults::COMBINED_ELEMENT.to_string(),
            separator: defaults::SEPARATOR.to_string(),
            notes: defaults::NOTES.to_string(),
        }
    }
}

/// A hospital entry with its placeholder configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRecord {
    pub fac: i64,
    pub name: String,
    pub url: String,
    pub pattern: String,
    pub expected_executives: u32,
    pub html_structure: HtmlStructure,
    pub status: String,
}

impl TemplateRecord {
    pub fn new(fac: i64, name: impl Into<String>) -> Self {
        Self {
            fac,
            name: name.into(),
            url: defaults::URL.to_string(),
            pattern: defaults::PATTERN.to_string(),
            expected_executives: defaults::EXPECTED_EXECUTIVES,
            html_structure: HtmlStructure::default(),
            status: defaults::STATUS.to_string(),
        }
    }

    pub fn from_candidate(candidate: &HospitalCandidate) -> Self {
        Self::new(candidate.fac, normalize_name(&candidate.hospital))
    }

    /// The FAC as written in the template, e.g. `"007"`
    pub fn fac_code(&self) -> String {
        format_fac(self.fac)
    }

    /// Render the entry as a YAML list item
    ///
    /// The block starts with a blank line and ends with a newline so entries
    /// joined by `\n` are separated by an empty line.
    pub fn render(&self) -> String {
        let mut out = String::from("\n");
        let hs = &self.html_structure;

        // Writing to a String cannot fail
        let _ = writeln!(out, " - FAC: {}", quote(&self.fac_code()));
        let _ = writeln!(out, "{}name: {}", ITEM_INDENT, quote(&self.name));
        push_field(&mut out, ITEM_INDENT, "url", &quote(&self.url), hints::URL);
        push_field(
            &mut out,
            ITEM_INDENT,
            "pattern",
            &quote(&self.pattern),
            hints::PATTERN,
        );
        push_field(
            &mut out,
            ITEM_INDENT,
            "expected_executives",
            &self.expected_executives.to_string(),
            hints::EXPECTED_EXECUTIVES,
        );
        let _ = writeln!(out, "{}html_structure:", ITEM_INDENT);
        push_field(
            &mut out,
            NESTED_INDENT,
            "combined_element",
            &quote(&hs.combined_element),
            hints::COMBINED_ELEMENT,
        );
        push_field(
            &mut out,
            NESTED_INDENT,
            "separator",
            &quote(&hs.separator),
            hints::SEPARATOR,
        );
        push_field(
            &mut out,
            NESTED_INDENT,
            "notes",
            &quote(&hs.notes),
            hints::NOTES,
        );
        push_field(
            &mut out,
            ITEM_INDENT,
            "status",
            &quote(&self.status),
            hints::STATUS,
        );

        out
    }
}

/// Zero-pad a facility code to at least three digits
pub fn format_fac(fac: i64) -> String {
    format!("{:03}", fac)
}

fn push_field(out: &mut String, indent: &str, key: &str, value: &str, hint: &str) {
    let _ = writeln!(out, "{}{}: {}  # {}", indent, key, value, hint);
}

/// Wrap a value in YAML double quotes
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    #[test]
    fn test_format_fac() {
        assert_eq!(format_fac(7), "007");
        assert_eq!(format_fac(42), "042");
        assert_eq!(format_fac(123), "123");
        assert_eq!(format_fac(4567), "4567");
    }

    #[test]
    fn test_render_exact_block() {
        let record = TemplateRecord::new(7, "ST. MARY'S");
        let expected = concat!(
            "\n",
            " - FAC: \"007\"\n",
            "   name: \"ST. MARY'S\"\n",
            "   url: \"\"  # ← REQUIRED: Add leadership page URL\n",
            "   pattern: \"combined_h2\"  # ← UPDATE: Change to match actual pattern\n",
            "   expected_executives: 5  # ← UPDATE: Change based on website\n",
            "   html_structure:\n",
            "     combined_element: \"\"  # ← CUSTOMIZABLE \n",
            "     separator: \"\"  # ← CUSTOMIZABLE\n",
            "     notes: \"\"  # ← OPTIONAL: Add any special notes\n",
            "   status: \"needs_configuration\"  # ← UPDATE: Change to 'needs_testing' once URL added\n",
        );
        assert_eq!(record.render(), expected);
    }

    #[test]
    fn test_from_candidate_normalizes_name() {
        let candidate = HospitalCandidate {
            row: 2,
            fac: 5,
            hospital: Data::String("  Rural Clinic ".to_string()),
        };
        let record = TemplateRecord::from_candidate(&candidate);
        assert_eq!(record.name, "RURAL CLINIC");
        assert_eq!(record.fac_code(), "005");
    }

    #[test]
    fn test_missing_name_renders_empty_quotes() {
        let candidate = HospitalCandidate {
            row: 2,
            fac: 11,
            hospital: Data::Empty,
        };
        let rendered = TemplateRecord::from_candidate(&candidate).render();
        assert!(rendered.contains("   name: \"\"\n"));
    }

    #[test]
    fn test_quotes_in_name_are_escaped() {
        let rendered = TemplateRecord::new(1, "THE \"NEW\" C:\\ HOSPITAL").render();
        assert!(rendered.contains(r#"   name: "THE \"NEW\" C:\\ HOSPITAL""#));
    }
}
