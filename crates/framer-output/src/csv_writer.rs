//! CSV output.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use framer_ingest::cell_value;
use framer_model::{OutputOptions, Value};
use framer_transform::TableFrame;
use tracing::info;

/// Render one cell the way the import tool expects it.
pub fn render_cell(value: Option<&Value>, options: &OutputOptions) -> String {
    match value {
        None => options.missing.clone(),
        Some(Value::Flag(true)) => options.true_value.clone(),
        Some(Value::Flag(false)) => options.false_value.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))
}

/// Write a single table to `path`.
pub fn write_csv(path: &Path, frame: &TableFrame, options: &OutputOptions) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_writer(BufWriter::new(file));

    let columns = frame.data.get_columns();
    writer
        .write_record(columns.iter().map(|column| column.name().as_str()))
        .with_context(|| format!("write header of {}", frame.name))?;
    for idx in 0..frame.record_count() {
        let record = columns
            .iter()
            .map(|column| render_cell(cell_value(column, idx).as_ref(), options));
        writer
            .write_record(record)
            .with_context(|| format!("write row {idx} of {}", frame.name))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Write every table into `output_dir` as `<name>.csv`.
pub fn write_csv_outputs(
    output_dir: &Path,
    frames: &[TableFrame],
    options: &OutputOptions,
) -> Result<Vec<PathBuf>> {
    ensure_output_dir(output_dir)?;
    let mut outputs = Vec::with_capacity(frames.len());
    for frame in frames {
        let path = output_dir.join(frame.file_name());
        write_csv(&path, frame, options)?;
        info!(
            table = %frame.name,
            rows = frame.record_count(),
            path = %path.display(),
            "wrote table"
        );
        outputs.push(path);
    }
    Ok(outputs)
}
