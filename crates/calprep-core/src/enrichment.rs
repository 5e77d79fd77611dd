use polars::prelude::*;

use crate::error::Result;
use crate::run::RunMetadata;

/// Columns that only exist to drive the metadata joins (or that duplicate
/// denormalized table attributes) and are removed from per-operator-file
/// datasets once enrichment is done. One explicit list per dataset shape.
pub const SINGLE_INPUT_DROP: &[&str] = &["TABLE_NAME", "COLUMN_NAME", "ROW_COUNT"];
pub const DUAL_INPUT_DROP: &[&str] = &[
    "LEFT_TABLE_NAME",
    "RIGHT_TABLE_NAME",
    "LEFT_COLUMN_NAME",
    "RIGHT_COLUMN_NAME",
    "ROW_COUNT_LEFT",
    "ROW_COUNT_RIGHT",
];

const SINGLE_RENAME_FROM: &[&str] = &["CHUNK_SIZE", "COLUMN_DATA_TYPE", "ENCODING_TYPE"];
const SINGLE_RENAME_TO: &[&str] = &["MAX_CHUNK_SIZE", "DATA_TYPE", "ENCODING"];

/// Left-joins table metadata on `TABLE_NAME`, then column metadata on
/// (`TABLE_NAME`, `COLUMN_NAME`).
pub fn join_table_and_column_meta(
    operators: DataFrame,
    metadata: &RunMetadata,
) -> Result<DataFrame> {
    let joined = operators
        .lazy()
        .join(
            metadata.table_meta.clone().lazy(),
            [col("TABLE_NAME")],
            [col("TABLE_NAME")],
            JoinArgs::new(JoinType::Left),
        )
        .join(
            metadata.column_meta.clone().lazy(),
            [col("TABLE_NAME"), col("COLUMN_NAME")],
            [col("TABLE_NAME"), col("COLUMN_NAME")],
            JoinArgs::new(JoinType::Left),
        )
        .collect()?;
    Ok(joined)
}

/// Left-joins the chunk-0 segment attributes on (`TABLE_NAME`,
/// `COLUMN_NAME`) and applies the canonical renames (`CHUNK_SIZE` becomes
/// `MAX_CHUNK_SIZE`, `COLUMN_DATA_TYPE` becomes `DATA_TYPE`,
/// `ENCODING_TYPE` becomes `ENCODING`). Rename sources that are absent
/// from the run's schemas are skipped.
pub fn join_first_chunk(frame: DataFrame, metadata: &RunMetadata) -> Result<DataFrame> {
    let joined = frame
        .lazy()
        .join(
            metadata.first_chunk.clone().lazy(),
            [col("TABLE_NAME"), col("COLUMN_NAME")],
            [col("TABLE_NAME"), col("COLUMN_NAME")],
            JoinArgs::new(JoinType::Left),
        )
        .rename(SINGLE_RENAME_FROM, SINGLE_RENAME_TO, false)
        .collect()?;
    Ok(joined)
}

/// Full single-key enrichment: table, column, and chunk-0 segment
/// attributes denormalized onto operator rows keyed by one
/// (`TABLE_NAME`, `COLUMN_NAME`) pair.
pub fn enrich_single_input(operators: DataFrame, metadata: &RunMetadata) -> Result<DataFrame> {
    let joined = join_table_and_column_meta(operators, metadata)?;
    join_first_chunk(joined, metadata)
}

/// Enrichment for dual-input operator rows (joins): the three metadata
/// joins run once per side against `LEFT_TABLE_NAME`/`LEFT_COLUMN_NAME`
/// and then `RIGHT_…`. Each metadata frame is renamed up front so its key
/// lines up with the side being joined and every carried attribute already
/// has its side suffix; no column ever collides.
pub fn enrich_dual_input(operators: DataFrame, metadata: &RunMetadata) -> Result<DataFrame> {
    let mut joined = operators.lazy();

    for side in ["LEFT", "RIGHT"] {
        let table_key = format!("{side}_TABLE_NAME");
        let column_key = format!("{side}_COLUMN_NAME");

        let table_meta = side_qualified(&metadata.table_meta, side, &table_key, None)?;
        let column_meta =
            side_qualified(&metadata.column_meta, side, &table_key, Some(&column_key))?;
        let first_chunk =
            side_qualified(&metadata.first_chunk, side, &table_key, Some(&column_key))?;

        joined = joined
            .join(
                table_meta.lazy(),
                [col(table_key.as_str())],
                [col(table_key.as_str())],
                JoinArgs::new(JoinType::Left),
            )
            .join(
                column_meta.lazy(),
                [col(table_key.as_str()), col(column_key.as_str())],
                [col(table_key.as_str()), col(column_key.as_str())],
                JoinArgs::new(JoinType::Left),
            )
            .join(
                first_chunk.lazy(),
                [col(table_key.as_str()), col(column_key.as_str())],
                [col(table_key.as_str()), col(column_key.as_str())],
                JoinArgs::new(JoinType::Left),
            );
    }

    Ok(joined.collect()?)
}

/// Renames a metadata frame for one side of a dual-input join: keys take
/// the side prefix, known attributes take their canonical side-suffixed
/// names, and any other attribute is suffixed with the side.
fn side_qualified(
    frame: &DataFrame,
    side: &str,
    table_key: &str,
    column_key: Option<&str>,
) -> Result<DataFrame> {
    let mut from: Vec<String> = Vec::with_capacity(frame.width());
    let mut to: Vec<String> = Vec::with_capacity(frame.width());

    for name in frame.get_column_names() {
        let name = name.as_str();
        let renamed = match name {
            "TABLE_NAME" => table_key.to_string(),
            "COLUMN_NAME" => match column_key {
                Some(key) => key.to_string(),
                None => continue,
            },
            "CHUNK_SIZE" => format!("MAX_CHUNK_SIZE_{side}"),
            "COLUMN_DATA_TYPE" => format!("DATA_TYPE_{side}"),
            "ENCODING_TYPE" => format!("ENCODING_{side}"),
            "SORTED" => format!("{side}_SORTED"),
            other => format!("{other}_{side}"),
        };
        from.push(name.to_string());
        to.push(renamed);
    }

    Ok(frame.clone().lazy().rename(&from, &to, true).collect()?)
}
