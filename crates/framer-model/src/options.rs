//! Configuration options for a migration run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schema::{OrderLinkStrategy, OrderTable, SchemaVersion};

/// Rendering of cells when derived tables are written as CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Text written for a missing value.
    pub missing: String,
    pub true_value: String,
    pub false_value: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing: String::new(),
            true_value: "True".to_string(),
            false_value: "False".to_string(),
        }
    }
}

impl OutputOptions {
    pub fn with_missing(mut self, missing: impl Into<String>) -> Self {
        self.missing = missing.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Options controlling which records are migrated and how they are linked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationOptions {
    pub schema: SchemaVersion,
    /// Order sub-tables to concatenate, in this order.
    pub order_tables: Vec<OrderTable>,
    /// Earliest order date kept (inclusive).
    pub epoch: Option<NaiveDate>,
    /// Restrict customers and orders to customers that have orders.
    pub join: bool,
    /// Overrides the link strategy when set.
    pub link_strategy: Option<OrderLinkStrategy>,
    pub output: OutputOptions,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            schema: SchemaVersion::default(),
            order_tables: OrderTable::ALL.to_vec(),
            epoch: None,
            join: true,
            link_strategy: None,
            output: OutputOptions::default(),
        }
    }
}

impl MigrationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, schema: SchemaVersion) -> Self {
        self.schema = schema;
        self
    }

    /// Select order sub-tables; an empty selection means all of them.
    pub fn with_order_tables(mut self, tables: Vec<OrderTable>) -> Self {
        self.order_tables = if tables.is_empty() {
            OrderTable::ALL.to_vec()
        } else {
            tables
        };
        self
    }

    pub fn with_epoch(mut self, epoch: Option<NaiveDate>) -> Self {
        self.epoch = epoch;
        self
    }

    pub fn with_join(mut self, join: bool) -> Self {
        self.join = join;
        self
    }

    pub fn with_link_strategy(mut self, strategy: OrderLinkStrategy) -> Self {
        self.link_strategy = Some(strategy);
        self
    }

    pub fn link_strategy(&self) -> OrderLinkStrategy {
        self.link_strategy.unwrap_or_default()
    }
}
