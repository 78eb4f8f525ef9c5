use std::collections::BTreeMap;
use std::path::PathBuf;

use framer_model::SchemaVersion;
use framer_transform::TableFrame;

#[derive(Debug)]
pub struct MigrationResult {
    pub schema: SchemaVersion,
    /// Description of the legacy source.
    pub source: String,
    /// `None` for a dry run.
    pub output_dir: Option<PathBuf>,
    pub loaded: RowCounts,
    /// Rows left after the epoch filter and the join.
    pub kept: RowCounts,
    pub tables: Vec<TableSummary>,
    /// Written tables in output order.
    pub frames: Vec<TableFrame>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCounts {
    pub customers: usize,
    pub orders: usize,
}

#[derive(Debug, Clone)]
pub struct TableSummary {
    pub name: String,
    pub source_tables: Vec<String>,
    pub records: usize,
    pub columns: usize,
    /// Values present in the legacy data that did not convert, per column.
    pub unmapped: BTreeMap<String, usize>,
    pub output: Option<PathBuf>,
}

impl TableSummary {
    pub fn unmapped_total(&self) -> usize {
        self.unmapped.values().sum()
    }
}
