use std::path::PathBuf;

use calprep_parser::read_run_csv;
use polars::prelude::*;

use crate::error::Result;

pub const OPERATORS_CSV: &str = "operators.csv";
pub const JOINS_CSV: &str = "joins.csv";
pub const JOIN_STAGES_CSV: &str = "join_stages.csv";
pub const TABLE_META_CSV: &str = "table_meta.csv";
pub const COLUMN_META_CSV: &str = "column_meta.csv";
pub const SEGMENT_META_CSV: &str = "segment_meta.csv";

/// Handle on one calibration-run directory of CSV exports.
#[derive(Debug, Clone)]
pub struct RunDirectory {
    root: PathBuf,
}

impl RunDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Loads one export by file name, schema resolved from its sidecar.
    pub fn csv(&self, file_name: &str) -> Result<DataFrame> {
        Ok(read_run_csv(&self.root.join(file_name))?)
    }

    /// Loads the table, column, and segment metadata tables. Segment
    /// metadata is reduced to the chunk-0 rows as the representative
    /// sample; after that filter `CHUNK_ID` is a constant and is removed
    /// here so it never reaches a joined frame.
    pub fn load_metadata(&self) -> Result<RunMetadata> {
        let table_meta = self.csv(TABLE_META_CSV)?;
        let column_meta = self.csv(COLUMN_META_CSV)?;
        let segment_meta = self.csv(SEGMENT_META_CSV)?;

        let first_chunk = segment_meta
            .lazy()
            .filter(col("CHUNK_ID").eq(lit(0)))
            .collect()?
            .drop_many(["CHUNK_ID"]);

        Ok(RunMetadata {
            table_meta,
            column_meta,
            first_chunk,
        })
    }
}

/// Static table/column/segment attributes of one calibration run, ready to
/// be denormalized onto operator rows.
#[derive(Debug, Clone)]
pub struct RunMetadata {
    pub table_meta: DataFrame,
    pub column_meta: DataFrame,
    pub first_chunk: DataFrame,
}
