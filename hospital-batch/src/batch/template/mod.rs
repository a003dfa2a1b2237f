//! YAML template rendering for a batch of hospitals

mod document;
mod record;

pub use document::TemplateDocument;
pub use record::{TemplateRecord, format_fac};
