//! Delimited text rendering.
//!
//! This module renders transformed records as semicolon-delimited text, the
//! convention expected by Norwegian spreadsheet-based payroll import
//! tooling.

use crate::error::{ExportError, ExportResult};

/// The field delimiter used by all delimited exports.
pub const DELIMITER: u8 = b';';

/// A record that can be rendered as one row of delimited text.
pub trait DelimitedRecord {
    /// Column headers, in output order.
    const HEADERS: &'static [&'static str];

    /// Renders the record as one row of fields, in header order.
    ///
    /// Absent optional values render as empty fields.
    fn to_row(&self) -> Vec<String>;
}

/// Renders records as semicolon-delimited text.
///
/// The header row is always written, even for an empty record slice, so a
/// zero-line export is still a well-formed file. Fields containing the
/// delimiter, a double quote or a line break are quoted, with embedded
/// quotes doubled.
pub fn to_delimited<R: DelimitedRecord>(records: &[R]) -> ExportResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(Vec::new());

    writer.write_record(R::HEADERS).map_err(serialization_error)?;
    for record in records {
        writer
            .write_record(record.to_row())
            .map_err(serialization_error)?;
    }

    let bytes = writer.into_inner().map_err(serialization_error)?;
    String::from_utf8(bytes).map_err(serialization_error)
}

fn serialization_error<E: std::fmt::Display>(error: E) -> ExportError {
    ExportError::Serialization {
        message: error.to_string(),
    }
}
