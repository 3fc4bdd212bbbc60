//! Unified error types for the Financial Roadmap service.
//!
//! Every fallible operation in the crate returns [`Result`], and the HTTP layer maps
//! each variant onto a status code and a `{"detail": ...}` payload.

use thiserror::Error;

/// All errors produced by the storage, configuration and API layers.
#[derive(Debug, Error)]
pub enum Error {
    /// A lookup, update or delete targeted an identifier that does not exist
    #[error("{entity} not found")]
    NotFound {
        /// Display name of the missing record, e.g. `"Income entry"`
        entity: &'static str,
    },

    /// An amount was negative, NaN or infinite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// A request body could not be parsed into the expected shape
    #[error("{message}")]
    Validation {
        /// Human-readable reason reported back to the client
        message: String,
        /// HTTP status the rejection should surface with
        status: u16,
    },

    /// Configuration file or environment could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Underlying `SeaORM` failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Socket or filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing or not unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
