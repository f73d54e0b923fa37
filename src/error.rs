use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("keystore file {} not found", .path.display())]
    KeystoreNotFound { path: PathBuf },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read keystore file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse keystore: {0}")]
    Parse(#[source] serde_json::Error),
}

/// File download errors.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("failed to download {url}: {reason}")]
    Download { url: String, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    File(#[from] FileError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
