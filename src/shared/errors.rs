use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;
