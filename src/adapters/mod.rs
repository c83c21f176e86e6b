//! Per-system export adapters.
//!
//! Each payroll system gets one adapter owning the transformation from
//! normalized payroll lines to that system's import records. Adapters share
//! a single mapping store and declare their supported operations through
//! [`AdapterCapabilities`], so callers can check what an adapter offers
//! before invoking it.

mod poweroffice;
mod tripletex;

pub use poweroffice::{PowerOfficeAdapter, PowerOfficeRecord};
pub use tripletex::{TripletexAdapter, TripletexRecord};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};
use crate::mapping::{IdentityResolver, SalaryCodeResolver};
use crate::models::{ExportFile, FileFormat, PayrollLine, PayrollSystem};

/// The operations and formats one adapter declares.
///
/// Callers consult the capability set before invoking an adapter; requesting
/// an undeclared format or operation fails with a capability error rather
/// than producing partial output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterCapabilities {
    /// The payroll system the adapter targets.
    pub system: PayrollSystem,
    /// Whether the adapter can render export files.
    pub supports_file_export: bool,
    /// Whether the adapter can submit lines directly to the system's API.
    pub supports_api_submission: bool,
    /// File formats the adapter can render, in preference order.
    pub supported_formats: Vec<FileFormat>,
}

impl AdapterCapabilities {
    /// Returns true if the adapter declares the given file format.
    pub fn supports_format(&self, format: FileFormat) -> bool {
        self.supported_formats.contains(&format)
    }
}

/// The outcome of transforming payroll lines for one system.
///
/// `records` preserves the input line order. Lines for employees without an
/// active id mapping produce no record; their ids are reported in
/// `skipped_employee_ids` for diagnostics, which file export logs but never
/// treats as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed<R> {
    /// Transformed records, in input line order.
    pub records: Vec<R>,
    /// Distinct employee ids skipped for lack of an active mapping, in
    /// first-occurrence order.
    pub skipped_employee_ids: Vec<String>,
}

/// A payroll export adapter for one target system.
///
/// Implementations transform normalized payroll lines into the target
/// system's import representation and render them as export files. Use
/// [`capabilities`](PayrollExportAdapter::capabilities) to discover what an
/// adapter supports.
pub trait PayrollExportAdapter: Send + Sync {
    /// The payroll system this adapter targets.
    fn system(&self) -> PayrollSystem;

    /// The operations and formats this adapter declares.
    fn capabilities(&self) -> AdapterCapabilities;

    /// Renders payroll lines as a complete export file.
    ///
    /// Lines for employees without an active id mapping are excluded from
    /// the output. Requesting a format the adapter does not declare fails
    /// with [`ExportError::UnsupportedFormat`].
    fn export_to_file(&self, lines: &[PayrollLine], format: FileFormat)
    -> ExportResult<ExportFile>;

    /// Submits payroll lines directly to the target system's API.
    ///
    /// No adapter implements direct submission yet; the default body fails
    /// with [`ExportError::ApiSubmissionNotImplemented`].
    fn submit_via_api(&self, _lines: &[PayrollLine]) -> ExportResult<()> {
        Err(ExportError::ApiSubmissionNotImplemented {
            system: self.system(),
        })
    }
}

/// A payroll line paired with its resolved external identifiers.
pub(crate) struct ResolvedLine<'a> {
    pub line: &'a PayrollLine,
    pub external_employee_id: String,
    pub external_salary_code: String,
}

/// Resolves a batch of payroll lines against the mapping store.
///
/// One identity lookup and one code map build cover the whole batch. The
/// resolved lines come back in input order; the second element lists the
/// distinct employee ids that had no active mapping, in first-occurrence
/// order.
pub(crate) fn resolve_lines<'a>(
    system: PayrollSystem,
    identity: &IdentityResolver,
    salary_codes: &SalaryCodeResolver,
    lines: &'a [PayrollLine],
) -> ExportResult<(Vec<ResolvedLine<'a>>, Vec<String>)> {
    let employee_ids: Vec<String> = lines.iter().map(|line| line.employee_id.clone()).collect();
    let external_ids = identity.resolve_many(system, &employee_ids)?;
    let code_map = salary_codes.build_code_map(system)?;

    let mut resolved = Vec::with_capacity(lines.len());
    let mut skipped = Vec::new();
    let mut seen_skipped = HashSet::new();

    for line in lines {
        match external_ids.get(&line.employee_id) {
            Some(external_employee_id) => resolved.push(ResolvedLine {
                line,
                external_employee_id: external_employee_id.clone(),
                external_salary_code: code_map.resolve(&line.salary_type_code).to_string(),
            }),
            None => {
                if seen_skipped.insert(line.employee_id.as_str()) {
                    skipped.push(line.employee_id.clone());
                }
            }
        }
    }

    Ok((resolved, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_format_checks_declared_formats() {
        let capabilities = AdapterCapabilities {
            system: PayrollSystem::PowerOffice,
            supports_file_export: true,
            supports_api_submission: false,
            supported_formats: vec![FileFormat::Csv, FileFormat::Json],
        };

        assert!(capabilities.supports_format(FileFormat::Csv));
        assert!(capabilities.supports_format(FileFormat::Json));
        assert!(!capabilities.supports_format(FileFormat::Xlsx));
    }
}
