use std::path::PathBuf;

use anyhow::{Result, bail};
use framer_cli::config::{FileConfig, load_config};
use framer_cli::pipeline::migrate;
use framer_cli::types::MigrationResult;
use framer_ingest::{CsvDirectory, MdbExport, TableSource};
use framer_model::MigrationOptions;

use crate::cli::Cli;

const DEFAULT_OUTPUT_DIR: &str = "output";

/// Resolved settings: config file values with flags applied on top.
struct RunSettings {
    source: Box<dyn TableSource>,
    output_dir: PathBuf,
    options: MigrationOptions,
}

fn resolve(cli: &Cli) -> Result<RunSettings> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FileConfig::default(),
    };
    let mut options = config.options;
    if let Some(schema) = cli.schema {
        options.schema = schema.into();
    }
    let selected = cli.order_tables();
    if !selected.is_empty() || options.order_tables.is_empty() {
        options = options.with_order_tables(selected);
    }
    if cli.epoch.is_some() {
        options.epoch = cli.epoch;
    }
    if cli.no_join {
        options.join = false;
    }
    if let Some(strategy) = cli.link_strategy {
        options = options.with_link_strategy(strategy.into());
    }

    let source_dir = cli.source_dir.clone().or(config.source_dir);
    let database = cli.database.clone().or(config.database);
    let source: Box<dyn TableSource> = match (source_dir, database) {
        (Some(dir), _) => Box::new(CsvDirectory::new(dir)),
        (None, Some(database)) => {
            let export = MdbExport::new(database);
            match config.export_program {
                Some(program) => Box::new(export.with_program(program)),
                None => Box::new(export),
            }
        }
        (None, None) => bail!("no legacy source: pass --database or --source-dir"),
    };
    let output_dir = cli
        .output_dir
        .clone()
        .or(config.output_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    Ok(RunSettings {
        source,
        output_dir,
        options,
    })
}

pub fn run_migration(cli: &Cli) -> Result<MigrationResult> {
    let settings = resolve(cli)?;
    let output_dir = (!cli.dry_run).then_some(settings.output_dir.as_path());
    let result = migrate(settings.source.as_ref(), &settings.options, output_dir)?;
    if cli.interactive {
        preview(&result);
    }
    Ok(result)
}

fn preview(result: &MigrationResult) {
    for frame in &result.frames {
        println!("{} ({} rows)", frame.name, frame.record_count());
        println!("{}", frame.data.head(Some(10)));
        println!();
    }
}
