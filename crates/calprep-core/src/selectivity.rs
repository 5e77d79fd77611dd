use polars::prelude::*;

use crate::error::Result;

pub const SELECTIVITY_LEFT: &str = "SELECTIVITY_LEFT";
pub const SELECTIVITY_RIGHT: &str = "SELECTIVITY_RIGHT";

/// Appends a selectivity column: `OUTPUT_ROWS / input_rows`. Wherever the
/// denominator is zero, negative, or missing, or the numerator is missing,
/// the result is exactly 0 — never infinite, never null.
pub fn with_selectivity(frame: DataFrame, name: &str, input_rows: &str) -> Result<DataFrame> {
    let denominator = col(input_rows).cast(DataType::Float64);
    let defined = col(input_rows)
        .is_not_null()
        .and(denominator.clone().gt(lit(0.0)));
    let ratio = col("OUTPUT_ROWS").cast(DataType::Float64) / denominator;

    let out = frame
        .lazy()
        .with_column(
            when(defined)
                .then(ratio)
                .otherwise(lit(0.0))
                .fill_null(lit(0.0))
                .alias(name),
        )
        .collect()?;
    Ok(out)
}

/// Whole-table cleanup for the joined dataset: every remaining missing
/// value becomes 0 in numeric columns and "0" in string columns.
pub fn fill_missing_with_zero(frame: DataFrame) -> Result<DataFrame> {
    fill_missing(frame, Some(lit(0)), Some(lit("0")))
}

/// Mid-pipeline fill used on the single-input per-file path: string
/// columns only, missing values become the empty string.
pub fn fill_missing_strings(frame: DataFrame) -> Result<DataFrame> {
    fill_missing(frame, None, Some(lit("")))
}

fn fill_missing(
    frame: DataFrame,
    numeric_fill: Option<Expr>,
    string_fill: Option<Expr>,
) -> Result<DataFrame> {
    let mut exprs: Vec<Expr> = Vec::with_capacity(frame.width());

    for column in frame.get_columns() {
        let name = column.name().as_str();
        let expr = match column.dtype() {
            DataType::String => match &string_fill {
                Some(fill) => col(name).fill_null(fill.clone()),
                None => col(name),
            },
            dtype if numeric_dtype(dtype) => match &numeric_fill {
                Some(fill) => col(name).fill_null(fill.clone()),
                None => col(name),
            },
            _ => col(name),
        };
        exprs.push(expr);
    }

    Ok(frame.lazy().with_columns(exprs).collect()?)
}

fn numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}
