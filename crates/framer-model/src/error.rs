use thiserror::Error;

#[derive(Debug, Error)]
pub enum FramerError {
    #[error("unknown schema version: {0}")]
    UnknownSchema(String),
    #[error("unknown order table: {0}")]
    UnknownOrderTable(String),
}

pub type Result<T> = std::result::Result<T, FramerError>;
