//! Table plans evaluated over raw frames.
//!
//! A [`TablePlan`] lists output columns in order. Each column is either a
//! fallback chain of `(raw column, converter)` pairs, where the first
//! non-missing converted value wins, or a row-level derivation. Raw columns
//! the plan does not mention are ignored.

use std::collections::{BTreeMap, HashMap};

use framer_ingest::{column_values, values_to_column};
use framer_model::{
    ColumnSource, Derivation, FieldRef, OrderLinkStrategy, RawExport, TablePlan, Value,
};
use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::frame::TableFrame;
use crate::normalization::convert;
use crate::record::{OrderLinkInput, account_type, legacy_record_blob, synthetic_order_link};

/// Run-level settings the plans do not carry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReshapeContext {
    pub link_strategy: OrderLinkStrategy,
}

/// A derived table and its conversion losses.
#[derive(Debug, Clone)]
pub struct ReshapeResult {
    pub frame: TableFrame,
    /// Per output column: rows whose source value was present but did not
    /// convert. Columns without losses are absent.
    pub unmapped: BTreeMap<String, usize>,
}

impl ReshapeResult {
    pub fn unmapped_total(&self) -> usize {
        self.unmapped.values().sum()
    }
}

/// Raw columns by name, read once per plan.
struct RawColumns<'a> {
    table: &'a str,
    order: Vec<&'a str>,
    values: HashMap<&'a str, Vec<Option<Value>>>,
    height: usize,
}

impl<'a> RawColumns<'a> {
    fn read(frame: &'a TableFrame) -> Result<Self> {
        let mut order = Vec::new();
        let mut values = HashMap::new();
        for column in frame.data.get_columns() {
            let name = column.name().as_str();
            let cells = column_values(&frame.data, name).map_err(TransformError::frame(&frame.name))?;
            order.push(name);
            values.insert(name, cells);
        }
        Ok(Self {
            table: &frame.name,
            order,
            values,
            height: frame.data.height(),
        })
    }

    fn column(&self, name: &str) -> Result<&[Option<Value>]> {
        self.values
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| TransformError::MissingColumn {
                table: self.table.to_string(),
                column: name.to_string(),
            })
    }

    fn cell(&self, name: &str, idx: usize) -> Result<Option<&Value>> {
        Ok(self.column(name)?.get(idx).and_then(Option::as_ref))
    }

    fn row(&self, idx: usize) -> Vec<(&'a str, Option<Value>)> {
        self.order
            .iter()
            .map(|name| {
                let value = self
                    .values
                    .get(name)
                    .and_then(|cells| cells.get(idx).cloned().flatten());
                (*name, value)
            })
            .collect()
    }
}

/// First non-missing converted value of a chain, and whether any source
/// value was present.
fn evaluate_chain(
    raw: &RawColumns<'_>,
    fields: &[FieldRef],
    idx: usize,
) -> Result<(Option<Value>, bool)> {
    let mut present = false;
    for field in fields {
        let cell = raw.cell(field.column, idx)?;
        present |= cell.is_some();
        if let Some(value) = convert(field.convert, cell) {
            return Ok((Some(value), present));
        }
    }
    Ok((None, present))
}

fn evaluate_derivation(
    raw: &RawColumns<'_>,
    derivation: Derivation,
    idx: usize,
    context: &ReshapeContext,
) -> Result<Option<Value>> {
    match derivation {
        Derivation::AccountType { flags } => {
            let values = flags
                .iter()
                .map(|flag| raw.cell(flag, idx))
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(Value::text(account_type(&values))))
        }
        Derivation::LegacyRecord => Ok(Some(Value::Text(legacy_record_blob(&raw.row(idx))))),
        Derivation::OrderLink { order, customer } => {
            let row = raw.row(idx);
            let input = OrderLinkInput {
                order: raw.cell(order, idx)?,
                customer: raw.cell(customer, idx)?,
                index: idx,
                row: &row,
            };
            Ok(Some(Value::Text(synthetic_order_link(
                &input,
                context.link_strategy,
            ))))
        }
    }
}

/// Evaluate `plan` over `raw`, producing exactly the plan's columns.
pub fn reshape(
    plan: &TablePlan,
    raw: &TableFrame,
    context: &ReshapeContext,
) -> Result<ReshapeResult> {
    let columns = RawColumns::read(raw)?;
    let mut output = Vec::with_capacity(plan.columns.len());
    let mut unmapped = BTreeMap::new();
    for target in plan.columns {
        let mut values = Vec::with_capacity(columns.height);
        let mut lost = 0;
        for idx in 0..columns.height {
            let value = match target.source {
                ColumnSource::Chain(fields) => {
                    let (value, present) = evaluate_chain(&columns, fields, idx)?;
                    if value.is_none() && present {
                        lost += 1;
                    }
                    value
                }
                ColumnSource::Derived(derivation) => {
                    evaluate_derivation(&columns, derivation, idx, context)?
                }
            };
            values.push(value);
        }
        if lost > 0 {
            debug!(table = plan.name, column = target.name, unmapped = lost, "unmapped values");
            unmapped.insert(target.name.to_string(), lost);
        }
        output.push(values_to_column(target.name, values));
    }
    let data = DataFrame::new(output).map_err(TransformError::frame(plan.name))?;
    Ok(ReshapeResult {
        frame: raw.derive(plan.name, data),
        unmapped,
    })
}

/// A raw legacy table written out under its export name.
pub fn raw_export(export: &RawExport, raw: &TableFrame) -> TableFrame {
    raw.derive(export.name, raw.data.clone())
}
