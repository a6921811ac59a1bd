//! Error types for catalog preparation

use thiserror::Error;

/// Errors that can occur while preparing catalog rows
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Price column could not be parsed as a number
    #[error("invalid price '{0}'")]
    InvalidPrice(String),

    /// Stock column could not be parsed as an integer
    #[error("invalid stock '{0}'")]
    InvalidStock(String),

    /// A required column is empty
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
