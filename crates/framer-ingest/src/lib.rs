//! Legacy data ingestion: table extraction, CSV parsing and Polars helpers.

pub mod csv_table;
pub mod error;
pub mod polars_utils;
pub mod source;

pub use csv_table::{CsvTable, parse_csv_table, read_table};
pub use error::{IngestError, Result};
pub use polars_utils::{
    any_to_value, cell_value, column_text, column_values, format_numeric, values_to_column,
};
pub use source::{CsvDirectory, MDB_EXPORT, MdbExport, TableSource};
