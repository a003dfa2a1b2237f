//! Generator configuration
//!
//! Built once at startup from built-in defaults, an optional TOML file and
//! command-line overrides, in that order of precedence (last wins).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::batch::InvalidFacPolicy;

pub const DEFAULT_INPUT: &str = "LeadershipURLYAMLNotes.xlsx";
pub const DEFAULT_OUTPUT: &str = "next_batch_template.yaml";
pub const DEFAULT_SHEET: &str = "LookupTypeFAC";
pub const DEFAULT_BATCH_SIZE: usize = 30;

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Workbook to read hospitals from
    pub input: PathBuf,
    /// Template file to write (overwritten if present)
    pub output: PathBuf,
    /// Worksheet holding the FAC / Hospital / done columns
    pub sheet: String,
    /// Maximum number of hospitals per batch
    pub batch_size: usize,
    pub invalid_fac: InvalidFacPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sheet: DEFAULT_SHEET.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            invalid_fac: InvalidFacPolicy::Abort,
        }
    }
}

/// Optional settings read from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub sheet: Option<String>,
    pub batch_size: Option<usize>,
    pub skip_invalid_fac: Option<bool>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Values given on the command line; `None` leaves the setting untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub sheet: Option<String>,
    pub batch_size: Option<usize>,
    pub skip_invalid_fac: bool,
}

impl GeneratorConfig {
    /// Layer an optional config file and command-line overrides over the defaults
    pub fn resolve(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = config_path {
            config.apply_file(ConfigFile::load(path)?);
        }
        config.apply_overrides(overrides);
        log::debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }

    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(input) = file.input {
            self.input = input;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if let Some(sheet) = file.sheet {
            self.sheet = sheet;
        }
        if let Some(batch_size) = file.batch_size {
            self.batch_size = batch_size;
        }
        if let Some(skip) = file.skip_invalid_fac {
            self.invalid_fac = policy_for(skip);
        }
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(sheet) = overrides.sheet {
            self.sheet = sheet;
        }
        if let Some(batch_size) = overrides.batch_size {
            self.batch_size = batch_size;
        }
        // A bare flag can only turn skipping on
        if overrides.skip_invalid_fac {
            self.invalid_fac = InvalidFacPolicy::Skip;
        }
    }
}

fn policy_for(skip: bool) -> InvalidFacPolicy {
    if skip {
        InvalidFacPolicy::Skip
    } else {
        InvalidFacPolicy::Abort
    }
}
