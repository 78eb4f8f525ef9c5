//! Epoch filter and customer/order join.
//!
//! Both stages only drop rows. Row order is preserved and the filtered
//! frames are renumbered from zero, so positional order links computed
//! afterwards refer to the joined table.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use framer_ingest::column_values;
use polars::prelude::{BooleanChunked, NewChunkedArray};

use crate::error::{Result, TransformError};
use crate::frame::TableFrame;
use crate::normalization::parse_timestamp;

fn filter_rows(frame: &TableFrame, keep: &[bool]) -> Result<TableFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    let data = frame
        .data
        .filter(&mask)
        .map_err(TransformError::frame(&frame.name))?;
    Ok(frame.derive(frame.name.clone(), data))
}

fn key_values(frame: &TableFrame, column: &str) -> Result<Vec<Option<String>>> {
    let values = column_values(&frame.data, column).map_err(|_| TransformError::MissingColumn {
        table: frame.name.clone(),
        column: column.to_string(),
    })?;
    Ok(values
        .into_iter()
        .map(|value| value.map(|v| v.to_string()))
        .collect())
}

/// Keep orders dated on or after `epoch`.
///
/// Orders whose date is missing or unparseable are dropped.
pub fn time_filter(orders: &TableFrame, date_column: &str, epoch: NaiveDate) -> Result<TableFrame> {
    let keep: Vec<bool> = key_values(orders, date_column)?
        .iter()
        .map(|value| {
            value
                .as_deref()
                .and_then(parse_timestamp)
                .is_some_and(|stamp| stamp.date() >= epoch)
        })
        .collect();
    filter_rows(orders, &keep)
}

/// Restrict customers and orders to customer identifiers present in both.
///
/// Missing identifiers never match.
pub fn join_records(
    customers: &TableFrame,
    orders: &TableFrame,
    customer_key: &str,
    order_key: &str,
) -> Result<(TableFrame, TableFrame)> {
    let customer_ids = key_values(customers, customer_key)?;
    let order_ids = key_values(orders, order_key)?;
    let from_customers: BTreeSet<&str> = customer_ids.iter().flatten().map(String::as_str).collect();
    let from_orders: BTreeSet<&str> = order_ids.iter().flatten().map(String::as_str).collect();
    let shared: BTreeSet<&str> = from_customers.intersection(&from_orders).copied().collect();
    let keep = |ids: &[Option<String>]| -> Vec<bool> {
        ids.iter()
            .map(|id| id.as_deref().is_some_and(|id| shared.contains(id)))
            .collect()
    };
    Ok((
        filter_rows(customers, &keep(&customer_ids))?,
        filter_rows(orders, &keep(&order_ids))?,
    ))
}
