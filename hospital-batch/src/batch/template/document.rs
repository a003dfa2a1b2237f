//! Assemble the full batch template file

use chrono::NaiveDateTime;

use super::record::TemplateRecord;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Top-level key holding the list of entries
pub const ROOT_KEY: &str = "hospitals:";

const INSTRUCTIONS: &[&str] = &[
    "#",
    "# Instructions:",
    "#   1. Fill in the 'url' field with the leadership page URL",
    "#   2. Update 'pattern' to match the HTML structure (see pattern guide)",
    "#   3. Set 'expected_executives' based on website inspection",
    "#   4. Update 'status' from 'needs_configuration' to 'needs_testing' once URL added",
    "#   5. Add any notes about the hospital's structure",
    "#   6. Once tested and working, copy to enhanced_hospitals.yaml and mark done='y' in Excel",
    "#",
    "# Common patterns:",
    "#   - h2_name_h3_title: Names in <h2>, titles in <h3>",
    "#   - combined_h2: Name and title together with separator",
    "#   - div_classes: CSS class-based extraction",
    "#   - table_rows: Table structure",
    "#   - list_items: List with separators",
    "#",
    "# See PATTERN_REGISTRY.md for all 13 patterns and examples",
];

const RULE: &str =
    "# ============================================================================";

const WORKFLOW: &[&str] = &[
    "#",
    "# WORKFLOW:",
    "# 1. For each hospital, find the leadership page URL",
    "# 2. Inspect the page structure in browser DevTools",
    "# 3. Update pattern, expected_executives, and html_structure fields",
    "# 4. Change status to 'needs_testing'",
    "# 5. Copy entry to enhanced_hospitals.yaml",
    "# 6. Test with: quick_test(FAC)",
    "# 7. If successful, change status to 'ok' or 'configured'",
    "# 8. Mark as done='y' in the LeadershipURLYAMLNotes.xlsx file",
    "#",
    "# Remember: Work directly in enhanced_hospitals.yaml for testing!",
    "# This file is just a reference/tracking list.",
];

/// The batch template: header comments, entries and a summary footer
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDocument {
    pub generated_at: NaiveDateTime,
    pub records: Vec<TemplateRecord>,
    /// Candidates left after this batch
    pub remaining: usize,
}

impl TemplateDocument {
    pub fn new(generated_at: NaiveDateTime, records: Vec<TemplateRecord>, remaining: usize) -> Self {
        Self {
            generated_at,
            records,
            remaining,
        }
    }

    /// Render the whole file; output depends only on the fields
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = vec![
            "# NEXT BATCH TEMPLATE".to_string(),
            format!(
                "# Generated: {}",
                self.generated_at.format(TIMESTAMP_FORMAT)
            ),
        ];
        parts.extend(INSTRUCTIONS.iter().map(|line| line.to_string()));
        parts.push(String::new());
        parts.push(ROOT_KEY.to_string());

        parts.extend(self.records.iter().map(TemplateRecord::render));

        parts.push(String::new());
        parts.push(RULE.to_string());
        parts.push("# BATCH SUMMARY".to_string());
        parts.push(RULE.to_string());
        parts.push(format!(
            "# Total active hospitals in this batch: {}",
            self.records.len()
        ));
        parts.push(format!("# Remaining after this batch: {}", self.remaining));
        parts.extend(WORKFLOW.iter().map(|line| line.to_string()));
        parts.push(RULE.to_string());
        parts.push(String::new());

        parts.join("\n")
    }
}
