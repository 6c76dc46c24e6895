use thiserror::Error;

/// Errors raised while reading or writing calculator files.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected CSV header {0:?}, expected \"Parameter,Value\"")]
    UnexpectedHeader(Vec<String>),

    #[error("unknown parameter {0:?}")]
    UnknownParameter(String),

    #[error("invalid value {value:?} for {parameter}")]
    InvalidValue { parameter: String, value: String },
}
