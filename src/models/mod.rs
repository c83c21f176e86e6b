//! Core data models for the payroll export library.
//!
//! This module contains the normalized input shape, the supported-system and
//! file-format identifiers, and the export output shape.

mod export_file;
mod payroll_line;
mod system;

pub use export_file::ExportFile;
pub use payroll_line::PayrollLine;
pub use system::{FileFormat, PayrollSystem};
