use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("{table}: missing column {column}")]
    MissingColumn { table: String, column: String },
    #[error("{table}: {source}")]
    Frame { table: String, source: PolarsError },
}

impl TransformError {
    pub(crate) fn frame(table: &str) -> impl FnOnce(PolarsError) -> Self + '_ {
        move |source| TransformError::Frame {
            table: table.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
