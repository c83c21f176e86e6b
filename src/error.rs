//! Error types for the payroll export library.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving mappings and
//! producing export files.

use thiserror::Error;

use crate::models::{FileFormat, PayrollSystem};

/// The main error type for the payroll export library.
///
/// All operations in the library return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_export::error::ExportError;
///
/// let error = ExportError::MappingFileNotFound {
///     path: "/missing/employee_ids.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Mapping file not found: /missing/employee_ids.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ExportError {
    /// Mapping file was not found at the specified path.
    #[error("Mapping file not found: {path}")]
    MappingFileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Mapping file could not be parsed.
    #[error("Failed to parse mapping file '{path}': {message}")]
    MappingFileParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested payroll system has no registered adapter.
    #[error("Unsupported payroll system: {system}")]
    UnsupportedSystem {
        /// The system identifier that was requested.
        system: String,
    },

    /// The requested file format name is not recognized.
    #[error("Unknown file format: {format}")]
    UnknownFormat {
        /// The format identifier that was requested.
        format: String,
    },

    /// The adapter does not declare the requested file format.
    #[error("Format '{format}' is not supported by payroll system '{system}'")]
    UnsupportedFormat {
        /// The payroll system whose adapter rejected the request.
        system: PayrollSystem,
        /// The format that is not in the adapter's declared set.
        format: FileFormat,
    },

    /// Direct API submission has no working implementation yet.
    #[error("API submission for payroll system '{system}' is not yet implemented")]
    ApiSubmissionNotImplemented {
        /// The payroll system the submission was attempted against.
        system: PayrollSystem,
    },

    /// The mapping store failed to answer a lookup.
    #[error("Mapping lookup failed: {message}")]
    MappingLookup {
        /// A description of the lookup failure.
        message: String,
    },

    /// Export content could not be serialized.
    #[error("Failed to serialize export content: {message}")]
    Serialization {
        /// A description of the serialization failure.
        message: String,
    },
}

/// A type alias for Results that return ExportError.
pub type ExportResult<T> = Result<T, ExportError>;
