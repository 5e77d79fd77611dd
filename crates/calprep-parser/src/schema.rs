use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ParserError;

/// Suffix appended to a CSV path to locate its schema sidecar
/// (`operators.csv` -> `operators.csv.json`).
pub const SIDECAR_SUFFIX: &str = ".json";

/// Schema sidecar of one calibration CSV export: the ordered column names
/// and the field separator. The raw CSV itself carries no header row.
///
/// Sidecars may contain additional bookkeeping fields (chunk sizes, type
/// hints); everything beyond the column names and separator is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CsvSchema {
    pub columns: Vec<ColumnSpec>,
    pub config: CsvConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CsvConfig {
    pub separator: String,
}

impl CsvSchema {
    pub fn sidecar_path(csv_path: &Path) -> PathBuf {
        let mut raw = csv_path.as_os_str().to_owned();
        raw.push(SIDECAR_SUFFIX);
        PathBuf::from(raw)
    }

    /// Reads and validates the sidecar belonging to `csv_path`. A missing
    /// or malformed sidecar is fatal; nothing is recovered.
    pub fn from_sidecar(csv_path: &Path) -> Result<Self, ParserError> {
        let sidecar = Self::sidecar_path(csv_path);
        let raw = fs::read_to_string(&sidecar).map_err(|source| ParserError::SidecarIo {
            path: sidecar.clone(),
            source,
        })?;
        let schema: CsvSchema =
            serde_json::from_str(&raw).map_err(|source| ParserError::SidecarJson {
                path: sidecar.clone(),
                source,
            })?;

        if schema.columns.is_empty() {
            return Err(ParserError::EmptySchema { path: sidecar });
        }
        if schema.separator_byte().is_none() {
            return Err(ParserError::Separator {
                path: sidecar,
                separator: schema.config.separator.clone(),
            });
        }

        Ok(schema)
    }

    /// Column names in file order.
    pub fn header_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.name.as_str())
            .collect()
    }

    /// The separator as a single byte, or `None` if the sidecar declared
    /// something the CSV reader cannot use.
    pub fn separator_byte(&self) -> Option<u8> {
        match self.config.separator.as_bytes() {
            [byte] => Some(*byte),
            _ => None,
        }
    }
}
