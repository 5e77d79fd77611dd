use std::path::Path;

use polars::prelude::*;

use crate::errors::ParserError;
use crate::schema::CsvSchema;

/// Loads one calibration CSV export into a DataFrame, resolving column
/// names and the separator from the `<file>.json` sidecar.
pub fn read_run_csv(csv_path: &Path) -> Result<DataFrame, ParserError> {
    let schema = CsvSchema::from_sidecar(csv_path)?;
    read_run_csv_with_schema(csv_path, &schema)
}

/// Loads a headerless CSV with an already-resolved schema. Dtypes are left
/// to the reader's inference; no row validation happens here.
pub fn read_run_csv_with_schema(
    csv_path: &Path,
    schema: &CsvSchema,
) -> Result<DataFrame, ParserError> {
    let separator = schema
        .separator_byte()
        .ok_or_else(|| ParserError::Separator {
            path: CsvSchema::sidecar_path(csv_path),
            separator: schema.config.separator.clone(),
        })?;

    let parse_options = CsvParseOptions::default().with_separator(separator);
    let mut df = CsvReadOptions::default()
        .with_has_header(false)
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(csv_path.to_path_buf()))
        .map_err(|source| ParserError::Csv {
            path: csv_path.to_path_buf(),
            source,
        })?
        .finish()
        .map_err(|source| ParserError::Csv {
            path: csv_path.to_path_buf(),
            source,
        })?;

    let names = schema.header_names();
    if df.width() != names.len() {
        return Err(ParserError::ColumnCount {
            path: csv_path.to_path_buf(),
            expected: names.len(),
            found: df.width(),
        });
    }

    df.set_column_names(names)
        .map_err(|source| ParserError::Csv {
            path: csv_path.to_path_buf(),
            source,
        })?;

    Ok(df)
}
