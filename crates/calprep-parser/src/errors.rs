use std::path::PathBuf;

use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("failed to read schema sidecar {}: {source}", .path.display())]
    SidecarIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema sidecar {} is not valid JSON: {source}", .path.display())]
    SidecarJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("schema sidecar {} declares no columns", .path.display())]
    EmptySchema { path: PathBuf },

    #[error("schema sidecar {} separator {separator:?} is not a single byte", .path.display())]
    Separator { path: PathBuf, separator: String },

    #[error("{} declares {expected} columns but the file has {found}", .path.display())]
    ColumnCount {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("failed to load CSV {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
}
