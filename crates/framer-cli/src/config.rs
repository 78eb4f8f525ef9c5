//! JSON run configuration.
//!
//! A config file supplies defaults for a migration run; command-line flags
//! override whatever it sets.
//!
//! ```json
//! {
//!   "database": "/data/frames.mdb",
//!   "output_dir": "/data",
//!   "options": { "schema": "v2", "epoch": "2015-01-01" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use framer_model::MigrationOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Legacy database read through `mdb-export`.
    pub database: Option<PathBuf>,
    /// Directory of pre-dumped `<table>.csv` files, used instead of the database.
    pub source_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// Export tool to run instead of `mdb-export` on the `PATH`.
    pub export_program: Option<PathBuf>,
    pub options: MigrationOptions,
}

pub fn load_config(path: &Path) -> Result<FileConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}
