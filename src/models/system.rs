//! Payroll system and file format identifiers.
//!
//! This module defines the closed set of supported target systems and the
//! file formats an adapter can declare for its exports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// A payroll system with a registered export adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayrollSystem {
    /// Tripletex payroll import.
    Tripletex,
    /// PowerOffice Go payroll import.
    PowerOffice,
}

impl PayrollSystem {
    /// All payroll systems known to the library, in registration order.
    pub const ALL: [PayrollSystem; 2] = [PayrollSystem::Tripletex, PayrollSystem::PowerOffice];

    /// Returns the canonical lowercase identifier for the system.
    ///
    /// This is the identifier used in filenames, configuration files and
    /// adapter lookups.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_export::models::PayrollSystem;
    ///
    /// assert_eq!(PayrollSystem::PowerOffice.as_str(), "poweroffice");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PayrollSystem::Tripletex => "tripletex",
            PayrollSystem::PowerOffice => "poweroffice",
        }
    }
}

impl fmt::Display for PayrollSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PayrollSystem {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tripletex" => Ok(PayrollSystem::Tripletex),
            "poweroffice" => Ok(PayrollSystem::PowerOffice),
            _ => Err(ExportError::UnsupportedSystem {
                system: s.trim().to_string(),
            }),
        }
    }
}

/// A file format an export adapter can produce.
///
/// Adapters declare the subset of formats they support; requesting a format
/// outside that subset fails with [`ExportError::UnsupportedFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Semicolon-delimited text for spreadsheet-based import tooling.
    Csv,
    /// Pretty-printed JSON.
    Json,
    /// Excel workbook.
    Xlsx,
}

impl FileFormat {
    /// All file formats a caller can request.
    pub const ALL: [FileFormat; 3] = [FileFormat::Csv, FileFormat::Json, FileFormat::Xlsx];

    /// Returns the filename extension for the format, without a leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Json => "json",
            FileFormat::Xlsx => "xlsx",
        }
    }

    /// Returns the MIME type reported alongside exported content.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_export::models::FileFormat;
    ///
    /// assert_eq!(FileFormat::Csv.mime_type(), "text/csv");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        match self {
            FileFormat::Csv => "text/csv",
            FileFormat::Json => "application/json",
            FileFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for FileFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(FileFormat::Csv),
            "json" => Ok(FileFormat::Json),
            "xlsx" => Ok(FileFormat::Xlsx),
            _ => Err(ExportError::UnknownFormat {
                format: s.trim().to_string(),
            }),
        }
    }
}
