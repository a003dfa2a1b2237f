//! Next-batch template generation
//!
//! Reads the hospital tracking sheet, drops rows without a facility code or
//! already marked done, and writes the first batch as a YAML template for
//! manual configuration.

pub mod error;
pub mod excel;
pub mod filter;
pub mod header;
pub mod pipeline;
pub mod report;
pub mod select;
pub mod template;

pub use error::GenerateError;
pub use filter::InvalidFacPolicy;
pub use pipeline::{GenerationSummary, generate};
pub use report::ConsoleReporter;
