//! Centralized error handling for climate_anomalies
//!
//! Every fallible operation in the crate returns [`Result`], so a failure in
//! any pipeline stage propagates unchanged up to `main`.

use thiserror::Error;

/// Main error type for climate_anomalies operations
#[derive(Debug, Error)]
pub enum ClimateError {
    /// NetCDF file operation errors (missing file, unreadable format)
    #[error("NetCDF error: {0}")]
    NetCDFError(#[from] netcdf::Error),

    /// Array shape or dimension error
    #[error("Array error: {0}")]
    ArrayError(#[from] ndarray::ShapeError),

    /// Variable not found in the dataset
    #[error("Variable '{var}' not found in dataset")]
    VariableNotFound { var: String },

    /// Dimension not found in file or variable
    #[error("Dimension '{dim}' not found in variable '{var}'")]
    DimensionNotFound { var: String, dim: String },

    /// Time coordinate could not be decoded
    #[error("Time coordinate error: {0}")]
    TimeError(String),

    /// Time index is malformed or does not line up with the data
    #[error("Alignment error: {0}")]
    AlignmentError(String),

    /// An observation falls in a calendar month with no climatology entry
    #[error("No climatology available for month {month}")]
    MissingClimatology { month: u32 },

    /// Chart rendering or display failure
    #[error("Render error: {0}")]
    RenderError(String),

    /// Thread pool configuration error
    #[error("Thread pool error: {0}")]
    ThreadPoolError(String),
}

impl From<chrono::ParseError> for ClimateError {
    fn from(error: chrono::ParseError) -> Self {
        ClimateError::TimeError(error.to_string())
    }
}

/// Result type alias for climate_anomalies operations
pub type Result<T> = std::result::Result<T, ClimateError>;
