//! Data model for the legacy frame-shop migration.
//!
//! - **schema**: schema versions, raw layouts and declarative table plans
//! - **vocabulary**: controlled vocabularies for legacy codes
//! - **value**: scalar cell values
//! - **options**: run and output configuration

pub mod error;
pub mod options;
pub mod schema;
pub mod value;
pub mod vocabulary;

pub use error::{FramerError, Result};
pub use options::{MigrationOptions, OutputOptions};
pub use schema::{
    CUSTOMERS_TABLE, ColumnSource, Converter, Derivation, FieldRef, FractionStyle,
    OrderLinkStrategy, OrderTable, RawColumn, RawExport, RawLayout, RawTable, Schema,
    SchemaVersion, TablePlan, TargetColumn, field,
};
pub use value::Value;
pub use vocabulary::{Entry, KeyPreparation, Vocabulary};
