//! Normalized payroll line model.
//!
//! This module defines the system-agnostic payroll line produced by the
//! upstream payroll run, which every export adapter consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single normalized payroll line for one employee and one salary type.
///
/// Lines arrive already aggregated for a payroll period; the export layer
/// never recomputes amounts. `amount` is expected to equal `quantity * rate`
/// when a rate is present, but that is the producer's responsibility and is
/// not validated here.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_export::models::PayrollLine;
/// use rust_decimal::Decimal;
///
/// let line = PayrollLine {
///     employee_id: "emp_001".to_string(),
///     salary_type_code: "OT_50".to_string(),
///     salary_type_name: "Overtime 50%".to_string(),
///     quantity: Decimal::new(75, 1),
///     rate: Some(Decimal::new(31500, 2)),
///     amount: Decimal::new(236250, 2),
///     period_start: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
///     department: Some("Operations".to_string()),
///     project: None,
/// };
/// assert_eq!(line.salary_type_code, "OT_50");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// Internal identifier of the employee the line belongs to.
    pub employee_id: String,
    /// Internal salary type code (e.g., "OT_50").
    pub salary_type_code: String,
    /// Human-readable description of the salary type.
    pub salary_type_name: String,
    /// Quantity the line covers (hours, days or units).
    pub quantity: Decimal,
    /// Rate per unit, when the salary type is rate-based.
    pub rate: Option<Decimal>,
    /// Total monetary amount for the line.
    pub amount: Decimal,
    /// First day of the payroll period the line covers.
    pub period_start: NaiveDate,
    /// Last day of the payroll period the line covers.
    pub period_end: NaiveDate,
    /// Department the line is attributed to, if any.
    pub department: Option<String>,
    /// Project the line is attributed to, if any.
    pub project: Option<String>,
}
