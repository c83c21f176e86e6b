//! Mapping records and the mapping store seam.
//!
//! This module defines the raw mapping rows, the [`MappingStore`] trait the
//! resolvers depend on, and an in-memory implementation backed by plain
//! vectors of rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ExportResult;
use crate::models::PayrollSystem;

fn default_true() -> bool {
    true
}

/// Maps an internal employee id to its identifier in one payroll system.
///
/// The same employee carries a separate mapping per system; an employee
/// without a row for a system is simply not exportable to that system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeIdMapping {
    /// Internal employee identifier.
    pub employee_id: String,
    /// The payroll system the external id belongs to.
    pub system: PayrollSystem,
    /// The employee's identifier in the target system.
    pub external_id: String,
    /// Whether the mapping participates in resolution. Defaults to true.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Maps an internal salary type code to its code in one payroll system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryCodeMapping {
    /// Internal salary type code.
    pub internal_code: String,
    /// The payroll system the external code belongs to.
    pub system: PayrollSystem,
    /// The salary type's code in the target system.
    pub external_code: String,
    /// Whether the mapping participates in resolution. Defaults to true.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Read access to mapping data, batch-first.
///
/// The resolvers are written against this trait so host applications can
/// back them with their own persistence. Both lookups are batch operations:
/// one call answers a whole export run, so an implementation backed by a
/// database pays one query per export rather than one per line.
///
/// Lookups are fallible for the benefit of external implementations; the
/// in-memory store never fails.
pub trait MappingStore: Send + Sync {
    /// Returns the active external ids for the given employees in one system.
    ///
    /// The result maps internal employee id to external id. Employees
    /// without an active mapping are simply absent from the result; absence
    /// is not an error.
    fn find_employee_mappings(
        &self,
        system: PayrollSystem,
        employee_ids: &[String],
    ) -> ExportResult<HashMap<String, String>>;

    /// Returns every active salary code mapping for one system.
    ///
    /// The result maps internal salary type code to external code.
    fn find_salary_code_mappings(
        &self,
        system: PayrollSystem,
    ) -> ExportResult<HashMap<String, String>>;
}

/// A [`MappingStore`] holding all mapping rows in memory.
///
/// Rows marked inactive are ignored. When several active rows share a key,
/// the last row wins, so later entries in a mapping file override earlier
/// ones.
///
/// # Example
///
/// ```
/// use payroll_export::mapping::{EmployeeIdMapping, InMemoryMappingStore, MappingStore};
/// use payroll_export::models::PayrollSystem;
///
/// let store = InMemoryMappingStore::new(
///     vec![EmployeeIdMapping {
///         employee_id: "emp_001".to_string(),
///         system: PayrollSystem::Tripletex,
///         external_id: "101".to_string(),
///         is_active: true,
///     }],
///     vec![],
/// );
///
/// let resolved = store
///     .find_employee_mappings(PayrollSystem::Tripletex, &["emp_001".to_string()])
///     .unwrap();
/// assert_eq!(resolved.get("emp_001").map(String::as_str), Some("101"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryMappingStore {
    employee_ids: HashMap<PayrollSystem, HashMap<String, String>>,
    salary_codes: HashMap<PayrollSystem, HashMap<String, String>>,
}

impl InMemoryMappingStore {
    /// Builds a store from raw mapping rows.
    ///
    /// # Arguments
    ///
    /// * `employee_mappings` - Employee id rows, in document order
    /// * `salary_code_mappings` - Salary code rows, in document order
    pub fn new(
        employee_mappings: Vec<EmployeeIdMapping>,
        salary_code_mappings: Vec<SalaryCodeMapping>,
    ) -> Self {
        let mut employee_ids: HashMap<PayrollSystem, HashMap<String, String>> = HashMap::new();
        for row in employee_mappings.into_iter().filter(|row| row.is_active) {
            employee_ids
                .entry(row.system)
                .or_default()
                .insert(row.employee_id, row.external_id);
        }

        let mut salary_codes: HashMap<PayrollSystem, HashMap<String, String>> = HashMap::new();
        for row in salary_code_mappings.into_iter().filter(|row| row.is_active) {
            salary_codes
                .entry(row.system)
                .or_default()
                .insert(row.internal_code, row.external_code);
        }

        Self {
            employee_ids,
            salary_codes,
        }
    }
}

impl MappingStore for InMemoryMappingStore {
    fn find_employee_mappings(
        &self,
        system: PayrollSystem,
        employee_ids: &[String],
    ) -> ExportResult<HashMap<String, String>> {
        let mut resolved = HashMap::new();
        if let Some(by_employee) = self.employee_ids.get(&system) {
            for employee_id in employee_ids {
                if let Some(external_id) = by_employee.get(employee_id) {
                    resolved.insert(employee_id.clone(), external_id.clone());
                }
            }
        }
        Ok(resolved)
    }

    fn find_salary_code_mappings(
        &self,
        system: PayrollSystem,
    ) -> ExportResult<HashMap<String, String>> {
        Ok(self.salary_codes.get(&system).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee_row(employee_id: &str, system: PayrollSystem, external_id: &str) -> EmployeeIdMapping {
        EmployeeIdMapping {
            employee_id: employee_id.to_string(),
            system,
            external_id: external_id.to_string(),
            is_active: true,
        }
    }

    fn salary_row(internal: &str, system: PayrollSystem, external: &str) -> SalaryCodeMapping {
        SalaryCodeMapping {
            internal_code: internal.to_string(),
            system,
            external_code: external.to_string(),
            is_active: true,
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_find_employee_mappings_returns_only_requested_ids() {
        let store = InMemoryMappingStore::new(
            vec![
                employee_row("emp_001", PayrollSystem::Tripletex, "101"),
                employee_row("emp_002", PayrollSystem::Tripletex, "102"),
                employee_row("emp_003", PayrollSystem::Tripletex, "103"),
            ],
            vec![],
        );

        let resolved = store
            .find_employee_mappings(PayrollSystem::Tripletex, &ids(&["emp_001", "emp_003"]))
            .unwrap();

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.get("emp_001").map(String::as_str), Some("101"));
        assert_eq!(resolved.get("emp_003").map(String::as_str), Some("103"));
        assert!(!resolved.contains_key("emp_002"));
    }

    #[test]
    fn test_mappings_are_scoped_per_system() {
        let store = InMemoryMappingStore::new(
            vec![
                employee_row("emp_001", PayrollSystem::Tripletex, "101"),
                employee_row("emp_001", PayrollSystem::PowerOffice, "E-101"),
            ],
            vec![],
        );

        let tripletex = store
            .find_employee_mappings(PayrollSystem::Tripletex, &ids(&["emp_001"]))
            .unwrap();
        let poweroffice = store
            .find_employee_mappings(PayrollSystem::PowerOffice, &ids(&["emp_001"]))
            .unwrap();

        assert_eq!(tripletex.get("emp_001").map(String::as_str), Some("101"));
        assert_eq!(
            poweroffice.get("emp_001").map(String::as_str),
            Some("E-101")
        );
    }

    #[test]
    fn test_inactive_employee_mapping_is_ignored() {
        let mut inactive = employee_row("emp_001", PayrollSystem::Tripletex, "101");
        inactive.is_active = false;

        let store = InMemoryMappingStore::new(vec![inactive], vec![]);

        let resolved = store
            .find_employee_mappings(PayrollSystem::Tripletex, &ids(&["emp_001"]))
            .unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_last_active_row_wins_for_duplicate_keys() {
        let store = InMemoryMappingStore::new(
            vec![
                employee_row("emp_001", PayrollSystem::Tripletex, "101"),
                employee_row("emp_001", PayrollSystem::Tripletex, "201"),
            ],
            vec![
                salary_row("BASE", PayrollSystem::Tripletex, "1000"),
                salary_row("BASE", PayrollSystem::Tripletex, "1100"),
            ],
        );

        let employees = store
            .find_employee_mappings(PayrollSystem::Tripletex, &ids(&["emp_001"]))
            .unwrap();
        assert_eq!(employees.get("emp_001").map(String::as_str), Some("201"));

        let codes = store
            .find_salary_code_mappings(PayrollSystem::Tripletex)
            .unwrap();
        assert_eq!(codes.get("BASE").map(String::as_str), Some("1100"));
    }

    #[test]
    fn test_find_salary_code_mappings_excludes_inactive_rows() {
        let mut retired = salary_row("OLD", PayrollSystem::PowerOffice, "900");
        retired.is_active = false;

        let store = InMemoryMappingStore::new(
            vec![],
            vec![salary_row("BASE", PayrollSystem::PowerOffice, "100"), retired],
        );

        let codes = store
            .find_salary_code_mappings(PayrollSystem::PowerOffice)
            .unwrap();
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.get("BASE").map(String::as_str), Some("100"));
    }

    #[test]
    fn test_unknown_system_yields_empty_results() {
        let store = InMemoryMappingStore::new(
            vec![employee_row("emp_001", PayrollSystem::Tripletex, "101")],
            vec![salary_row("BASE", PayrollSystem::Tripletex, "1000")],
        );

        let employees = store
            .find_employee_mappings(PayrollSystem::PowerOffice, &ids(&["emp_001"]))
            .unwrap();
        let codes = store
            .find_salary_code_mappings(PayrollSystem::PowerOffice)
            .unwrap();

        assert!(employees.is_empty());
        assert!(codes.is_empty());
    }

    #[test]
    fn test_is_active_defaults_to_true_when_absent() {
        let yaml = r#"
employee_id: emp_001
system: tripletex
external_id: "101"
"#;
        let row: EmployeeIdMapping = serde_yaml::from_str(yaml).unwrap();
        assert!(row.is_active);
    }
}
