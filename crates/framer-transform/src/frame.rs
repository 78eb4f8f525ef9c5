//! Named table frames.
//!
//! [`TableFrame`] wraps a Polars DataFrame with the output table name and
//! the legacy tables it was built from.

use polars::prelude::DataFrame;

/// Provenance of a table frame.
#[derive(Debug, Clone, Default)]
pub struct TableFrameMeta {
    /// Legacy tables that contributed rows, in load order.
    pub source_tables: Vec<String>,
}

/// A raw or derived table with its name and optional provenance.
#[derive(Debug, Clone)]
pub struct TableFrame {
    /// Table name, also the output file stem (e.g. "Accounts").
    pub name: String,
    pub data: DataFrame,
    pub meta: Option<TableFrameMeta>,
}

impl TableFrame {
    pub fn new(name: impl Into<String>, data: DataFrame) -> Self {
        Self {
            name: name.into(),
            data,
            meta: None,
        }
    }

    #[must_use]
    pub fn with_meta(mut self, meta: TableFrameMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    pub fn column_count(&self) -> usize {
        self.data.width()
    }

    /// Output file name, `<name>.csv`.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }

    pub fn source_tables(&self) -> &[String] {
        self.meta
            .as_ref()
            .map_or(&[], |meta| meta.source_tables.as_slice())
    }

    /// Same provenance, new name and data.
    pub fn derive(&self, name: impl Into<String>, data: DataFrame) -> Self {
        Self {
            name: name.into(),
            data,
            meta: self.meta.clone(),
        }
    }
}
