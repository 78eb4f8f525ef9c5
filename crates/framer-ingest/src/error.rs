use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to run {program}: {source}")]
    Spawn { program: String, source: io::Error },
    #[error("{program} exited with {status} exporting {table}: {stderr}")]
    Exit {
        program: String,
        table: String,
        status: String,
        stderr: String,
    },
    #[error("read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("parse {table}: {source}")]
    Csv { table: String, source: csv::Error },
}

pub type Result<T> = std::result::Result<T, IngestError>;
