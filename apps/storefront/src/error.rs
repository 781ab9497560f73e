//! # App Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  storefront.toml unreadable / invalid ───► ConfigLoad / InvalidConfig   │
//! │  basket file missing ────────────────────► BasketRead                   │
//! │  basket file malformed ──────────────────► BasketParse                  │
//! │  cart / checkout rule violated ──────────► Core(CoreError)              │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                               main: log + stderr + exit_code()          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use ebook_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors surfaced by the storefront binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Business rule violation from ebook-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration parsed but failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read or parsed.
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    /// Basket file could not be read.
    #[error("Failed to read basket {path:?}: {source}")]
    BasketRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Basket file is not valid JSON or has the wrong shape.
    #[error("Invalid basket file: {0}")]
    BasketParse(#[from] serde_json::Error),

    /// Output could not be rendered.
    #[error("Failed to render output: {0}")]
    Render(String),
}

impl AppError {
    /// Process exit code for this error (sysexits.h values).
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Core(_) | AppError::BasketParse(_) => 65, // EX_DATAERR
            AppError::BasketRead { .. } => 66,                  // EX_NOINPUT
            AppError::Render(_) => 70,                          // EX_SOFTWARE
            AppError::InvalidConfig(_) | AppError::ConfigLoad(_) => 78, // EX_CONFIG
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::ConfigLoad(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
