use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    // Display is the bare message: these strings are part of the tool
    // contract and must reach the caller unprefixed.
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExportError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
