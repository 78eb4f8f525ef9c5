//! CLI argument definitions for the frame-shop migration.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use framer_model::{OrderLinkStrategy, OrderTable, SchemaVersion};

#[derive(Parser)]
#[command(
    name = "framer-migrate",
    version,
    about = "Migrate the legacy frame-shop database to import-ready CSV files",
    long_about = "Migrate customers and frame orders from the legacy desktop database.\n\n\
                  Writes Accounts, Contacts, Orders and Treatments as CSV files for import.\n\
                  Selecting no order table migrates all three."
)]
pub struct Cli {
    /// Migrate FrameOrders-Working.
    #[arg(short = 'o', long = "opened")]
    pub opened: bool,

    /// Migrate FrameOrders-Closed.
    #[arg(short = 'c', long = "closed")]
    pub closed: bool,

    /// Migrate FrameOrders-Archive.
    #[arg(short = 'a', long = "archived")]
    pub archived: bool,

    /// Earliest migrated order date (YYYY-MM-DD).
    #[arg(short = 'e', long = "epoch", value_name = "DATE")]
    pub epoch: Option<NaiveDate>,

    /// Keep customers without orders and orders without customers.
    #[arg(long = "no-join")]
    pub no_join: bool,

    /// Print a preview of every migrated table.
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Target schema version.
    #[arg(long = "schema", value_enum)]
    pub schema: Option<SchemaArg>,

    /// How order links tell repeated order numbers apart.
    #[arg(long = "link-strategy", value_enum)]
    pub link_strategy: Option<LinkStrategyArg>,

    /// Legacy database read with mdb-export.
    #[arg(long = "database", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Directory of pre-dumped <TABLE>.csv files (overrides --database).
    #[arg(long = "source-dir", value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Output directory for generated files (default: output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON file with default settings; flags override it.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run every stage and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Order tables selected by flags, in migration order.
    pub fn order_tables(&self) -> Vec<OrderTable> {
        [
            (self.opened, OrderTable::Working),
            (self.closed, OrderTable::Closed),
            (self.archived, OrderTable::Archive),
        ]
        .into_iter()
        .filter_map(|(selected, table)| selected.then_some(table))
        .collect()
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaArg {
    V1,
    V2,
}

impl From<SchemaArg> for SchemaVersion {
    fn from(value: SchemaArg) -> Self {
        match value {
            SchemaArg::V1 => SchemaVersion::V1,
            SchemaArg::V2 => SchemaVersion::V2,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LinkStrategyArg {
    RowIndex,
    CustomerNumber,
    Digest,
}

impl From<LinkStrategyArg> for OrderLinkStrategy {
    fn from(value: LinkStrategyArg) -> Self {
        match value {
            LinkStrategyArg::RowIndex => OrderLinkStrategy::RowIndex,
            LinkStrategyArg::CustomerNumber => OrderLinkStrategy::CustomerNumber,
            LinkStrategyArg::Digest => OrderLinkStrategy::Digest,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn order_flags_select_tables_in_order() {
        let cli = Cli::parse_from(["framer-migrate", "-a", "-o"]);
        assert_eq!(
            cli.order_tables(),
            vec![OrderTable::Working, OrderTable::Archive]
        );
        let cli = Cli::parse_from(["framer-migrate"]);
        assert!(cli.order_tables().is_empty());
    }

    #[test]
    fn epoch_parses_iso_dates() {
        let cli = Cli::parse_from(["framer-migrate", "-e", "2015-01-01", "--schema", "v1"]);
        assert_eq!(cli.epoch, NaiveDate::from_ymd_opt(2015, 1, 1));
        assert!(matches!(cli.schema, Some(SchemaArg::V1)));
    }
}
