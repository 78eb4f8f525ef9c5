//! Frame-shop data transformation.
//!
//! - **normalization**: single-value converters (text, flags, timestamps,
//!   vocabularies, dimensions)
//! - **record**: row-level derivations (legacy record blob, order link,
//!   account type)
//! - **loader**: raw legacy tables into typed frames
//! - **reshape**: table plans evaluated over raw frames
//! - **join**: epoch filter and customer/order join

pub mod error;
pub mod frame;
pub mod join;
pub mod loader;
pub mod normalization;
pub mod record;
pub mod reshape;

pub use error::{Result, TransformError};
pub use frame::{TableFrame, TableFrameMeta};
pub use join::{join_records, time_filter};
pub use loader::build_raw_frame;
pub use reshape::{ReshapeContext, ReshapeResult, raw_export, reshape};
