//! PowerOffice export adapter.
//!
//! Transforms normalized payroll lines into PowerOffice Go salary import
//! records and renders them as semicolon-delimited or JSON files.

use std::sync::Arc;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{ExportError, ExportResult};
use crate::export::{self, DelimitedRecord};
use crate::mapping::{IdentityResolver, MappingStore, SalaryCodeResolver};
use crate::models::{ExportFile, FileFormat, PayrollLine, PayrollSystem};

use super::{AdapterCapabilities, PayrollExportAdapter, ResolvedLine, Transformed, resolve_lines};

const SYSTEM: PayrollSystem = PayrollSystem::PowerOffice;

/// One salary import record in PowerOffice Go's schema.
///
/// Field names follow PowerOffice's camelCase import layout; dates render
/// in ISO form in both delimited and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerOfficeRecord {
    /// Employee code in PowerOffice.
    pub employee_code: String,
    /// Salary code in PowerOffice.
    pub salary_code: String,
    /// Human-readable description of the salary type.
    pub description: String,
    /// Quantity the record covers.
    pub quantity: Decimal,
    /// Rate per unit, when rate-based.
    pub rate: Option<Decimal>,
    /// Total monetary amount.
    pub amount: Decimal,
    /// First day of the covered period.
    pub from_date: NaiveDate,
    /// Last day of the covered period.
    pub to_date: NaiveDate,
    /// Department attribution, if any.
    pub department: Option<String>,
    /// Project attribution, if any.
    pub project: Option<String>,
}

impl PowerOfficeRecord {
    pub(crate) fn from_resolved(resolved: ResolvedLine<'_>) -> Self {
        let line = resolved.line;
        Self {
            employee_code: resolved.external_employee_id,
            salary_code: resolved.external_salary_code,
            description: line.salary_type_name.clone(),
            quantity: line.quantity,
            rate: line.rate,
            amount: line.amount,
            from_date: line.period_start,
            to_date: line.period_end,
            department: line.department.clone(),
            project: line.project.clone(),
        }
    }
}

impl DelimitedRecord for PowerOfficeRecord {
    const HEADERS: &'static [&'static str] = &[
        "employeeCode",
        "salaryCode",
        "description",
        "quantity",
        "rate",
        "amount",
        "fromDate",
        "toDate",
        "department",
        "project",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.employee_code.clone(),
            self.salary_code.clone(),
            self.description.clone(),
            self.quantity.to_string(),
            self.rate.map(|rate| rate.to_string()).unwrap_or_default(),
            self.amount.to_string(),
            self.from_date.to_string(),
            self.to_date.to_string(),
            self.department.clone().unwrap_or_default(),
            self.project.clone().unwrap_or_default(),
        ]
    }
}

/// Export adapter for PowerOffice Go.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use payroll_export::adapters::{PayrollExportAdapter, PowerOfficeAdapter};
/// use payroll_export::mapping::InMemoryMappingStore;
/// use payroll_export::models::FileFormat;
///
/// let store = Arc::new(InMemoryMappingStore::from_dir("./config/mappings")?);
/// let adapter = PowerOfficeAdapter::new(store);
/// let file = adapter.export_to_file(&[], FileFormat::Json)?;
/// assert_eq!(file.mime_type, "application/json");
/// # Ok::<(), payroll_export::error::ExportError>(())
/// ```
pub struct PowerOfficeAdapter {
    identity: IdentityResolver,
    salary_codes: SalaryCodeResolver,
}

impl PowerOfficeAdapter {
    /// File formats this adapter declares.
    pub const SUPPORTED_FORMATS: &'static [FileFormat] = &[FileFormat::Csv, FileFormat::Json];

    /// Creates an adapter over the given mapping store.
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self {
            identity: IdentityResolver::new(store.clone()),
            salary_codes: SalaryCodeResolver::new(store),
        }
    }

    /// Transforms payroll lines into PowerOffice records.
    ///
    /// One batch identity lookup and one salary code map build cover the
    /// whole input. Lines for employees without an active PowerOffice
    /// mapping produce no record and are reported through
    /// [`Transformed::skipped_employee_ids`].
    pub fn transform(&self, lines: &[PayrollLine]) -> ExportResult<Transformed<PowerOfficeRecord>> {
        let (resolved, skipped_employee_ids) =
            resolve_lines(SYSTEM, &self.identity, &self.salary_codes, lines)?;
        let records = resolved
            .into_iter()
            .map(PowerOfficeRecord::from_resolved)
            .collect();

        Ok(Transformed {
            records,
            skipped_employee_ids,
        })
    }
}

impl PayrollExportAdapter for PowerOfficeAdapter {
    fn system(&self) -> PayrollSystem {
        SYSTEM
    }

    fn capabilities(&self) -> AdapterCapabilities {
        AdapterCapabilities {
            system: SYSTEM,
            supports_file_export: true,
            supports_api_submission: false,
            supported_formats: Self::SUPPORTED_FORMATS.to_vec(),
        }
    }

    fn export_to_file(
        &self,
        lines: &[PayrollLine],
        format: FileFormat,
    ) -> ExportResult<ExportFile> {
        if !self.capabilities().supports_format(format) {
            return Err(ExportError::UnsupportedFormat {
                system: SYSTEM,
                format,
            });
        }

        let export_id = Uuid::new_v4();
        info!(
            export_id = %export_id,
            system = %SYSTEM,
            format = %format,
            line_count = lines.len(),
            "Starting payroll export"
        );
        let start_time = Instant::now();

        let transformed = self.transform(lines)?;
        if !transformed.skipped_employee_ids.is_empty() {
            warn!(
                export_id = %export_id,
                system = %SYSTEM,
                skipped_count = transformed.skipped_employee_ids.len(),
                skipped_employee_ids = ?transformed.skipped_employee_ids,
                "Skipped lines for employees without an active id mapping"
            );
        }

        let content = match format {
            FileFormat::Csv => export::to_delimited(&transformed.records)?,
            FileFormat::Json => export::to_pretty_json(&transformed.records)?,
            other => {
                return Err(ExportError::UnsupportedFormat {
                    system: SYSTEM,
                    format: other,
                });
            }
        };

        let filename = export::build_filename(SYSTEM, Utc::now().date_naive(), format);
        let duration = start_time.elapsed();
        info!(
            export_id = %export_id,
            system = %SYSTEM,
            record_count = transformed.records.len(),
            content_bytes = content.len(),
            duration_us = duration.as_micros(),
            "Payroll export completed"
        );

        Ok(ExportFile {
            content,
            filename,
            mime_type: format.mime_type().to_string(),
        })
    }
}
