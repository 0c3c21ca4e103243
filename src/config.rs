//! Run configuration: JSON config file layered under command-line flags.
//!
//! JSON shape (every field optional):
//! {
//!   "machine_name": "AS33",
//!   "default_type": "W",
//!   "operations": ["Op115: CIO4012-4019, W4021", "Op120: H6000-6005, 6010"]
//! }
//!
//! `operations` may also be one multi-line string.

use crate::Result;
use crate::addr::AddressType;

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub machine_name: Option<String>,

    #[serde(default)]
    pub default_type: Option<AddressType>,

    #[serde(default)]
    pub operations: Option<OperationsSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OperationsSpec {
    Lines(Vec<String>),
    Text(String),
}

impl OperationsSpec {
    pub fn into_text(self) -> String {
        match self {
            OperationsSpec::Lines(lines) => lines.join("\n"),
            OperationsSpec::Text(text) => text,
        }
    }
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        serde_json::from_str(&strip_bom(text))
            .with_context(|| format!("parse config file {}", path.display()))
    }
}

/// Where the operation text for a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationsSource {
    /// `-` reads standard input.
    File(String),
    /// Individual `OpName: spec` lines.
    Lines(Vec<String>),
}

/// Values supplied on the command line; `None` falls through to the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub machine_name: Option<String>,
    pub default_type: Option<AddressType>,
    pub operations: Option<OperationsSource>,
}

/// Fully resolved inputs of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateConfig {
    pub machine_name: String,
    pub default_type: AddressType,
    pub operations: String,
}

impl GenerateConfig {
    /// Flags win over the config file, which wins over defaults.
    pub fn resolve(file: ConfigFile, overrides: Overrides) -> Result<Self> {
        let operations = match overrides.operations {
            Some(source) => read_operations(&source)?,
            None => file
                .operations
                .map(OperationsSpec::into_text)
                .unwrap_or_default(),
        };

        Ok(Self {
            machine_name: overrides
                .machine_name
                .or(file.machine_name)
                .unwrap_or_default(),
            default_type: overrides
                .default_type
                .or(file.default_type)
                .unwrap_or_default(),
            operations,
        })
    }
}

fn read_operations(source: &OperationsSource) -> Result<String> {
    match source {
        OperationsSource::File(path) if path == "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read operations from stdin")?;
            Ok(strip_bom(text))
        }
        OperationsSource::File(path) => fs::read_to_string(path)
            .map(strip_bom)
            .with_context(|| format!("read operations file {}", path)),
        OperationsSource::Lines(lines) => Ok(lines.join("\n")),
    }
}

/// Drop a leading UTF-8 byte order mark; `str::trim` keeps U+FEFF.
fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}
