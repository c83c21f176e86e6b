//! File rendering and naming for payroll exports.
//!
//! This module turns transformed records into file content and builds the
//! conventional filenames the adapters attach to their output.

mod delimited;
mod json;

pub use delimited::{DELIMITER, DelimitedRecord, to_delimited};
pub use json::to_pretty_json;

use chrono::NaiveDate;

use crate::models::{FileFormat, PayrollSystem};

/// The subject segment used in every export filename.
pub const EXPORT_SUBJECT: &str = "payroll-lines";

/// Builds the conventional filename for an export.
///
/// The pattern is `{system}_{subject}_{date}.{extension}` with the date in
/// ISO form, e.g. `tripletex_payroll-lines_2025-03-31.csv`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_export::export::build_filename;
/// use payroll_export::models::{FileFormat, PayrollSystem};
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
/// let filename = build_filename(PayrollSystem::PowerOffice, date, FileFormat::Json);
/// assert_eq!(filename, "poweroffice_payroll-lines_2025-03-31.json");
/// ```
pub fn build_filename(system: PayrollSystem, date: NaiveDate, format: FileFormat) -> String {
    format!(
        "{}_{}_{}.{}",
        system,
        EXPORT_SUBJECT,
        date,
        format.extension()
    )
}
