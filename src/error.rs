//! Unified error hierarchy for fitcalc
//!
//! Record-level errors are recoverable: the driver reports them and moves on
//! to the next record. Everything else is fatal for the current invocation.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all fitcalc operations
#[derive(Debug, Error)]
pub enum FitCalcError {
    /// Label is not present in the workout registry
    #[error("Unknown workout type {label}")]
    UnknownWorkoutType { label: String },

    /// Record data does not fit the matched workout variant
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),

    /// Input loading errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems with a single measurement record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Wrong number of positional values for the workout type
    #[error("{label} expects {expected} values, got {actual}")]
    ArityMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },

    /// NaN or infinite value
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// Divisor fields (duration, height) must be above zero
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// Counters must be non-negative whole numbers
    #[error("{field} must be a non-negative integer, got {value}")]
    InvalidCount { field: &'static str, value: f64 },
}

/// Errors raised while reading record batches from disk
#[derive(Debug, Error)]
pub enum InputError {
    /// File extension or requested format is not supported
    #[error("Unsupported input format: {format}")]
    UnsupportedFormat { format: String },

    /// A single line could not be turned into a record
    #[error("Parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Malformed JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed CSV document
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },
}

/// Result type alias for fitcalc operations
pub type Result<T> = std::result::Result<T, FitCalcError>;

impl FitCalcError {
    /// Record-level errors are reported and skipped instead of aborting a batch
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            FitCalcError::UnknownWorkoutType { .. } | FitCalcError::InvalidRecord(_)
        )
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitCalcError::Input(InputError::FileNotFound { path }) => {
                format!("Could not find input file: {}", path.display())
            }
            FitCalcError::Input(InputError::UnsupportedFormat { format }) => {
                format!(
                    "Cannot read '{}' input. Use a .csv or .json file, or pass --format.",
                    format
                )
            }
            _ => self.to_string(),
        }
    }
}
