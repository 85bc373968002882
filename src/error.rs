// std imports
use std::io;

// third-party imports
use config::ConfigError;
use thiserror::Error;

// ---

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read {name}: {source}")]
    ReadInput { name: String, source: io::Error },
    #[error("{name}: {source}")]
    Document { name: String, source: adoc::Error },
    #[error("failed to serialize output: {0}")]
    Json(#[from] json::Error),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
