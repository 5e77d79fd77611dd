use std::path::PathBuf;

use crate::errors::ParserError;
use crate::read_run_csv;
use crate::schema::CsvSchema;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn loads_operator_export_with_sidecar_names() {
    let df = read_run_csv(&fixture("operators.csv")).expect("operators.csv should load");

    assert_eq!(
        df.get_column_names(),
        [
            "OPERATOR_NAME",
            "OPERATOR_IMPLEMENTATION",
            "TABLE_NAME",
            "COLUMN_NAME",
            "INPUT_ROWS",
            "OUTPUT_ROWS",
            "RUNTIME_NS",
        ],
    );
    assert_eq!(df.height(), 3);

    let tables = df.column("TABLE_NAME").unwrap().str().unwrap();
    assert_eq!(tables.get(0), Some("customer"));

    let runtimes = df.column("RUNTIME_NS").unwrap().i64().unwrap();
    assert_eq!(runtimes.get(1), Some(8120933));
}

#[test]
fn honors_declared_separator() {
    let df = read_run_csv(&fixture("segment_meta.csv")).expect("segment_meta.csv should load");

    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 6);

    let encodings = df.column("ENCODING_TYPE").unwrap().str().unwrap();
    assert_eq!(encodings.get(2), Some("RunLength"));

    let chunk_ids = df.column("CHUNK_ID").unwrap().i64().unwrap();
    assert_eq!(chunk_ids.get(1), Some(1));
}

#[test]
fn missing_sidecar_is_fatal() {
    let err = read_run_csv(&fixture("orphan.csv")).unwrap_err();
    assert!(matches!(err, ParserError::SidecarIo { .. }), "{err}");
}

#[test]
fn malformed_sidecar_json_is_fatal() {
    let err = read_run_csv(&fixture("bad_json.csv")).unwrap_err();
    assert!(matches!(err, ParserError::SidecarJson { .. }), "{err}");
}

#[test]
fn sidecar_without_columns_is_rejected() {
    let err = read_run_csv(&fixture("empty_columns.csv")).unwrap_err();
    assert!(matches!(err, ParserError::EmptySchema { .. }), "{err}");
}

#[test]
fn multi_byte_separator_is_rejected() {
    let err = read_run_csv(&fixture("multichar_sep.csv")).unwrap_err();
    match err {
        ParserError::Separator { separator, .. } => assert_eq!(separator, "||"),
        other => panic!("expected separator error, got {other}"),
    }
}

#[test]
fn column_count_mismatch_is_fatal() {
    let err = read_run_csv(&fixture("short.csv")).unwrap_err();
    match err {
        ParserError::ColumnCount {
            expected, found, ..
        } => {
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("expected column count error, got {other}"),
    }
}

#[test]
fn sidecar_path_appends_json_suffix() {
    let path = CsvSchema::sidecar_path(&PathBuf::from("/run/operators.csv"));
    assert_eq!(path, PathBuf::from("/run/operators.csv.json"));
}
