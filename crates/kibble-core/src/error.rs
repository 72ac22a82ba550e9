//! Core error handling for Kibble.

use thiserror::Error;

/// Errors raised by the shared core layer.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
