//! Legacy table extraction.
//!
//! The legacy database is only reachable through an external export tool
//! that dumps one named table as CSV. Each call is a scoped, synchronous
//! process invocation: spawn, capture stdout fully, wait.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Default export tool from mdbtools.
pub const MDB_EXPORT: &str = "mdb-export";

/// Supplies the raw delimited text of a named legacy table.
pub trait TableSource {
    /// Human-readable description for logs.
    fn describe(&self) -> String;

    /// Export one table; the first line of the result is its header.
    fn export(&self, table: &str) -> Result<Vec<u8>>;
}

/// Runs `mdb-export <database> <table>`.
#[derive(Debug, Clone)]
pub struct MdbExport {
    program: PathBuf,
    database: PathBuf,
}

impl MdbExport {
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            program: PathBuf::from(MDB_EXPORT),
            database: database.into(),
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn database(&self) -> &Path {
        &self.database
    }
}

impl TableSource for MdbExport {
    fn describe(&self) -> String {
        format!("{} {}", self.program.display(), self.database.display())
    }

    fn export(&self, table: &str) -> Result<Vec<u8>> {
        let program = self.program.display().to_string();
        debug!(program = %program, database = %self.database.display(), table, "exporting table");
        let output = Command::new(&self.program)
            .arg(&self.database)
            .arg(table)
            .output()
            .map_err(|source| IngestError::Spawn {
                program: program.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(IngestError::Exit {
                program,
                table: table.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }
}

/// Reads `<dir>/<table>.csv` files dumped ahead of time.
#[derive(Debug, Clone)]
pub struct CsvDirectory {
    dir: PathBuf,
}

impl CsvDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{table}.csv"))
    }
}

impl TableSource for CsvDirectory {
    fn describe(&self) -> String {
        self.dir.display().to_string()
    }

    fn export(&self, table: &str) -> Result<Vec<u8>> {
        let path = self.table_path(table);
        debug!(path = %path.display(), table, "reading table dump");
        fs::read(&path).map_err(|source| IngestError::Read { path, source })
    }
}
