pub mod errors;
mod reader;
pub mod schema;

pub use errors::ParserError;
pub use reader::{read_run_csv, read_run_csv_with_schema};
pub use schema::{ColumnSpec, CsvConfig, CsvSchema};

#[cfg(test)]
mod tests;
