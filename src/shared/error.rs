use serde::Serialize;
use thiserror::Error;

/// Typed failures of the conversion engine itself.
///
/// Returned as values, never raised through panics, so callers can
/// pattern-match and surface a precise message. A failed conversion is
/// never fatal to the wider process.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum ConversionError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Quantity must be a finite, non-negative number")]
    InvalidQuantity,

    #[error("Density must be a finite, positive number")]
    InvalidDensity,
}

impl ConversionError {
    /// Wire code for the `{ "error": ..., "detail": ... }` error shape.
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::UnknownUnit(_) => "UnknownUnit",
            ConversionError::InvalidQuantity => "InvalidQuantity",
            ConversionError::InvalidDensity => "InvalidDensity",
        }
    }
}

#[derive(Error, Debug, Serialize)]
pub enum AppError {
    #[error("Network Error: {0}")]
    Network(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conversion Error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("System Error: {0}")]
    System(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("Serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
