//! Raw legacy tables into typed frames.

use framer_ingest::{CsvTable, values_to_column};
use framer_model::{RawLayout, Value};
use polars::prelude::DataFrame;
use tracing::{debug, warn};

use crate::error::{Result, TransformError};
use crate::frame::{TableFrame, TableFrameMeta};
use crate::normalization::convert;

/// Concatenate exported tables into one frame named after the layout.
///
/// Columns are named by position from the layout; the exported header is
/// ignored apart from a width check. Short rows are padded with missing
/// values and extra fields are dropped. Each column passes through its
/// load converter.
pub fn build_raw_frame(layout: &RawLayout, tables: &[CsvTable]) -> Result<TableFrame> {
    let name = layout.table.name();
    for table in tables {
        if table.headers.len() != layout.columns.len() {
            warn!(
                table = %table.name,
                expected = layout.columns.len(),
                found = table.headers.len(),
                "column count differs from layout"
            );
        }
    }
    let columns = layout
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let values: Vec<Option<Value>> = tables
                .iter()
                .flat_map(|table| table.rows.iter())
                .map(|row| {
                    let raw = row.get(idx).cloned().flatten().map(Value::Text);
                    convert(column.load, raw.as_ref())
                })
                .collect();
            values_to_column(column.name, values)
        })
        .collect();
    let data = DataFrame::new(columns).map_err(TransformError::frame(name))?;
    debug!(table = name, rows = data.height(), "built raw frame");
    Ok(TableFrame::new(name, data).with_meta(TableFrameMeta {
        source_tables: tables.iter().map(|table| table.name.clone()).collect(),
    }))
}
