//! Migration pipeline stages.
//!
//! Load → TimeFilter → Join → Export (one per table plan) → Export legacy
//! tables → Write. Each stage runs inside its own `info_span!` and logs its
//! row counts and `duration_ms` on completion. Extraction and write failures
//! abort the run; conversion failures only show up as unmapped counts.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use framer_ingest::{TableSource, read_table};
use framer_model::{CUSTOMERS_TABLE, MigrationOptions, OrderTable, OutputOptions, RawTable, Schema};
use framer_output::write_csv_outputs;
use framer_transform::{
    ReshapeContext, ReshapeResult, TableFrame, build_raw_frame, join_records, raw_export,
    reshape, time_filter,
};
use tracing::{debug, info, info_span};

use crate::types::{MigrationResult, RowCounts, TableSummary};

/// Export and load the legacy customer table.
pub fn load_customers(source: &dyn TableSource, schema: &Schema) -> Result<TableFrame> {
    info_span!("load_customers").in_scope(|| -> Result<TableFrame> {
        let start = Instant::now();
        let table = read_table(source, CUSTOMERS_TABLE)
            .with_context(|| format!("load {CUSTOMERS_TABLE}"))?;
        let frame = build_raw_frame(&schema.customers, &[table])
            .with_context(|| format!("load {CUSTOMERS_TABLE}"))?;
        info!(
            rows = frame.record_count(),
            duration_ms = start.elapsed().as_millis(),
            "customers loaded"
        );
        Ok(frame)
    })
}

/// Export the selected order sub-tables and concatenate them in order.
pub fn load_orders(
    source: &dyn TableSource,
    schema: &Schema,
    tables: &[OrderTable],
) -> Result<TableFrame> {
    info_span!("load_orders").in_scope(|| -> Result<TableFrame> {
        let start = Instant::now();
        let mut exported = Vec::with_capacity(tables.len());
        for table in tables {
            let name = table.table_name();
            let loaded = read_table(source, name).with_context(|| format!("load {name}"))?;
            debug!(table = name, rows = loaded.len(), "order table exported");
            exported.push(loaded);
        }
        let frame = build_raw_frame(&schema.orders, &exported).context("load orders")?;
        info!(
            tables = exported.len(),
            rows = frame.record_count(),
            duration_ms = start.elapsed().as_millis(),
            "orders loaded"
        );
        Ok(frame)
    })
}

/// Drop orders dated before the epoch; passes through without one.
pub fn time_filter_stage(
    orders: TableFrame,
    schema: &Schema,
    epoch: Option<NaiveDate>,
) -> Result<TableFrame> {
    let Some(epoch) = epoch else {
        return Ok(orders);
    };
    info_span!("time_filter", %epoch).in_scope(|| -> Result<TableFrame> {
        let start = Instant::now();
        let before = orders.record_count();
        let filtered = time_filter(&orders, schema.order_date, epoch).context("time filter")?;
        info!(
            before,
            after = filtered.record_count(),
            duration_ms = start.elapsed().as_millis(),
            "orders filtered by date"
        );
        Ok(filtered)
    })
}

/// Keep customers with orders and orders with customers; passes through when disabled.
pub fn join_stage(
    customers: TableFrame,
    orders: TableFrame,
    schema: &Schema,
    join: bool,
) -> Result<(TableFrame, TableFrame)> {
    if !join {
        return Ok((customers, orders));
    }
    info_span!("join_records").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let joined = join_records(
            &customers,
            &orders,
            schema.customer_key,
            schema.order_customer_key,
        )
        .context("join records")?;
        info!(
            customers_before = customers.record_count(),
            customers_after = joined.0.record_count(),
            orders_before = orders.record_count(),
            orders_after = joined.1.record_count(),
            duration_ms = start.elapsed().as_millis(),
            "records joined"
        );
        Ok(joined)
    })
}

/// Evaluate every table plan of the schema.
pub fn export_stage(
    schema: &Schema,
    customers: &TableFrame,
    orders: &TableFrame,
    context: &ReshapeContext,
) -> Result<Vec<ReshapeResult>> {
    let mut results = Vec::with_capacity(schema.plans.len());
    for plan in schema.plans {
        let raw = match plan.source {
            RawTable::Customers => customers,
            RawTable::Orders => orders,
        };
        let result = info_span!("export", table = plan.name).in_scope(|| -> Result<ReshapeResult> {
            let start = Instant::now();
            let result = reshape(plan, raw, context)
                .with_context(|| format!("export {}", plan.name))?;
            info!(
                rows = result.frame.record_count(),
                columns = result.frame.column_count(),
                unmapped = result.unmapped_total(),
                duration_ms = start.elapsed().as_millis(),
                "table exported"
            );
            Ok(result)
        })?;
        results.push(result);
    }
    Ok(results)
}

/// Raw legacy tables the schema writes alongside the derived ones.
pub fn raw_export_stage(
    schema: &Schema,
    customers: &TableFrame,
    orders: &TableFrame,
) -> Vec<TableFrame> {
    schema
        .raw_exports
        .iter()
        .map(|export| {
            let raw = match export.source {
                RawTable::Customers => customers,
                RawTable::Orders => orders,
            };
            debug!(table = export.name, rows = raw.record_count(), "legacy table exported");
            raw_export(export, raw)
        })
        .collect()
}

pub fn write_stage(
    frames: &[TableFrame],
    output_dir: &Path,
    options: &OutputOptions,
) -> Result<Vec<PathBuf>> {
    info_span!("write_csv", output_dir = %output_dir.display()).in_scope(|| -> Result<Vec<PathBuf>> {
        let start = Instant::now();
        let outputs = write_csv_outputs(output_dir, frames, options)?;
        info!(
            files = outputs.len(),
            duration_ms = start.elapsed().as_millis(),
            "outputs written"
        );
        Ok(outputs)
    })
}

/// Run the full migration. Nothing is written when `output_dir` is `None`.
pub fn migrate(
    source: &dyn TableSource,
    options: &MigrationOptions,
    output_dir: Option<&Path>,
) -> Result<MigrationResult> {
    let schema = options.schema.schema();
    let span = info_span!("migration", schema = %options.schema, source = %source.describe());
    let _guard = span.enter();
    let start = Instant::now();

    let customers = load_customers(source, schema)?;
    let orders = load_orders(source, schema, &options.order_tables)?;
    let loaded = RowCounts {
        customers: customers.record_count(),
        orders: orders.record_count(),
    };

    let orders = time_filter_stage(orders, schema, options.epoch)?;
    let (customers, orders) = join_stage(customers, orders, schema, options.join)?;
    let kept = RowCounts {
        customers: customers.record_count(),
        orders: orders.record_count(),
    };

    let context = ReshapeContext {
        link_strategy: options.link_strategy(),
    };
    let derived = export_stage(schema, &customers, &orders, &context)?;
    let mut tables = Vec::new();
    let mut frames = Vec::new();
    for result in derived {
        tables.push(summarize(&result.frame, result.unmapped));
        frames.push(result.frame);
    }
    for frame in raw_export_stage(schema, &customers, &orders) {
        tables.push(summarize(&frame, BTreeMap::new()));
        frames.push(frame);
    }

    if let Some(dir) = output_dir {
        let outputs = write_stage(&frames, dir, &options.output)?;
        for (summary, path) in tables.iter_mut().zip(outputs) {
            summary.output = Some(path);
        }
    }

    info!(
        tables = frames.len(),
        duration_ms = start.elapsed().as_millis(),
        "migration complete"
    );
    Ok(MigrationResult {
        schema: options.schema,
        source: source.describe(),
        output_dir: output_dir.map(Path::to_path_buf),
        loaded,
        kept,
        tables,
        frames,
    })
}

fn summarize(frame: &TableFrame, unmapped: BTreeMap<String, usize>) -> TableSummary {
    TableSummary {
        name: frame.name.clone(),
        source_tables: frame.source_tables().to_vec(),
        records: frame.record_count(),
        columns: frame.column_count(),
        unmapped,
        output: None,
    }
}
