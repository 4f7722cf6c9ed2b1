//! Pulls workshop mods out of an exported launcher preset.
//!
//! A preset is an HTML table where every mod is a `<tr data-type="ModContainer">`
//! row holding a `DisplayName` cell and a cell linking to the mod's workshop
//! page. See [`crate::config::ExtractionConfig`] for the exact strings.

pub mod extractor;
pub mod output;

#[cfg(test)]
mod extractor_test;

use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::config::ExtractionConfig;
use crate::dom::parser;
use crate::errors::PresetError;

pub use extractor::extract;

/// One mod referenced by a preset. Either field may be empty when the
/// document leaves it out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModEntry {
    #[serde(rename = "modName")]
    pub name: String,
    #[serde(rename = "modID")]
    pub id: String,
}

/// Everything derived from a single preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    #[serde(rename = "results")]
    pub entries: Vec<ModEntry>,
    #[serde(rename = "steamcmd")]
    pub download_command: String,
    #[serde(rename = "run")]
    pub launch_mod_string: String,
}

impl ExtractionResult {
    pub fn from_entries(entries: Vec<ModEntry>, pattern: &ExtractionConfig) -> Self {
        let download_command = output::download_command(&entries, pattern);
        let launch_mod_string = output::launch_mod_string(&entries, pattern);
        Self {
            entries,
            download_command,
            launch_mod_string,
        }
    }
}

pub fn extract_from_bytes(
    bytes: &[u8],
    pattern: &ExtractionConfig,
) -> Result<ExtractionResult, PresetError> {
    let dom = parser::parse_bytes(bytes)?;
    Ok(extract(&dom, pattern))
}

/// Reads and extracts the preset stored at `path`.
pub fn parse_file(path: &Path, pattern: &ExtractionConfig) -> Result<ExtractionResult, PresetError> {
    let file = File::open(path).map_err(|source| PresetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let dom = parser::parse_reader(file)?;
    Ok(extract(&dom, pattern))
}
