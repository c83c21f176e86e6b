//! Employee identity resolution.
//!
//! This module translates internal employee ids into the identifiers a
//! target payroll system expects, batch-first.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::error::ExportResult;
use crate::models::PayrollSystem;

use super::store::MappingStore;

/// Resolves internal employee ids to external ids for one payroll system.
///
/// All resolution goes through a single batch lookup per call, so a store
/// backed by a database pays one query per export run regardless of how
/// many lines it covers.
#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn MappingStore>,
}

/// The outcome of checking a set of employee ids for mapping presence.
///
/// Both vectors preserve the first-occurrence order of the input; duplicate
/// input ids are collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingPartition {
    /// Ids that have an active mapping for the system.
    pub mapped: Vec<String>,
    /// Ids without an active mapping for the system.
    pub missing: Vec<String>,
}

impl IdentityResolver {
    /// Creates a resolver over the given mapping store.
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Resolves a batch of employee ids to their external ids.
    ///
    /// Duplicate input ids are collapsed before the store is consulted.
    /// Employees without an active mapping are simply absent from the
    /// result; absence is not an error.
    ///
    /// # Arguments
    ///
    /// * `system` - The target payroll system
    /// * `employee_ids` - Internal employee ids, duplicates allowed
    ///
    /// # Returns
    ///
    /// A map from internal employee id to external id, covering exactly the
    /// input ids that have an active mapping.
    pub fn resolve_many(
        &self,
        system: PayrollSystem,
        employee_ids: &[String],
    ) -> ExportResult<HashMap<String, String>> {
        let distinct = distinct_in_order(employee_ids);
        self.store.find_employee_mappings(system, &distinct)
    }

    /// Resolves a single employee id, delegating to the batch lookup.
    pub fn resolve_one(
        &self,
        system: PayrollSystem,
        employee_id: &str,
    ) -> ExportResult<Option<String>> {
        let ids = [employee_id.to_string()];
        let mut resolved = self.resolve_many(system, &ids)?;
        Ok(resolved.remove(employee_id))
    }

    /// Splits employee ids into those with and without an active mapping.
    ///
    /// Useful for pre-flight checks and for reporting which employees an
    /// export would skip.
    pub fn partition_by_mapping_presence(
        &self,
        system: PayrollSystem,
        employee_ids: &[String],
    ) -> ExportResult<MappingPartition> {
        let distinct = distinct_in_order(employee_ids);
        let resolved = self.store.find_employee_mappings(system, &distinct)?;

        let mut mapped = Vec::new();
        let mut missing = Vec::new();
        for employee_id in distinct {
            if resolved.contains_key(&employee_id) {
                mapped.push(employee_id);
            } else {
                missing.push(employee_id);
            }
        }

        Ok(MappingPartition { mapped, missing })
    }
}

/// Collapses duplicates while preserving first-occurrence order.
fn distinct_in_order(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{EmployeeIdMapping, InMemoryMappingStore};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn store_with(rows: &[(&str, &str)]) -> Arc<InMemoryMappingStore> {
        let mappings = rows
            .iter()
            .map(|(internal, external)| EmployeeIdMapping {
                employee_id: internal.to_string(),
                system: PayrollSystem::Tripletex,
                external_id: external.to_string(),
                is_active: true,
            })
            .collect();
        Arc::new(InMemoryMappingStore::new(mappings, vec![]))
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    /// A store that counts how many batch lookups it receives.
    struct CountingStore {
        inner: Arc<InMemoryMappingStore>,
        employee_lookups: AtomicUsize,
    }

    impl MappingStore for CountingStore {
        fn find_employee_mappings(
            &self,
            system: PayrollSystem,
            employee_ids: &[String],
        ) -> ExportResult<HashMap<String, String>> {
            self.employee_lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.find_employee_mappings(system, employee_ids)
        }

        fn find_salary_code_mappings(
            &self,
            system: PayrollSystem,
        ) -> ExportResult<HashMap<String, String>> {
            self.inner.find_salary_code_mappings(system)
        }
    }

    #[test]
    fn test_resolve_many_returns_mapped_ids_only() {
        let resolver = IdentityResolver::new(store_with(&[("emp_001", "101"), ("emp_002", "102")]));

        let resolved = resolver
            .resolve_many(PayrollSystem::Tripletex, &ids(&["emp_001", "emp_999"]))
            .unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved.get("emp_001").map(String::as_str), Some("101"));
    }

    #[test]
    fn test_resolve_many_with_empty_input_returns_empty_map() {
        let resolver = IdentityResolver::new(store_with(&[("emp_001", "101")]));

        let resolved = resolver.resolve_many(PayrollSystem::Tripletex, &[]).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolve_many_consults_store_once_for_duplicates() {
        let counting = Arc::new(CountingStore {
            inner: store_with(&[("emp_001", "101")]),
            employee_lookups: AtomicUsize::new(0),
        });
        let resolver = IdentityResolver::new(counting.clone());

        let resolved = resolver
            .resolve_many(
                PayrollSystem::Tripletex,
                &ids(&["emp_001", "emp_001", "emp_001"]),
            )
            .unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(counting.employee_lookups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolve_one_returns_external_id() {
        let resolver = IdentityResolver::new(store_with(&[("emp_001", "101")]));

        let resolved = resolver
            .resolve_one(PayrollSystem::Tripletex, "emp_001")
            .unwrap();
        assert_eq!(resolved.as_deref(), Some("101"));
    }

    #[test]
    fn test_resolve_one_returns_none_for_unmapped_id() {
        let resolver = IdentityResolver::new(store_with(&[("emp_001", "101")]));

        let resolved = resolver
            .resolve_one(PayrollSystem::Tripletex, "emp_999")
            .unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_partition_preserves_input_order() {
        let resolver = IdentityResolver::new(store_with(&[("emp_001", "101"), ("emp_003", "103")]));

        let partition = resolver
            .partition_by_mapping_presence(
                PayrollSystem::Tripletex,
                &ids(&["emp_003", "emp_002", "emp_001", "emp_004"]),
            )
            .unwrap();

        assert_eq!(partition.mapped, ids(&["emp_003", "emp_001"]));
        assert_eq!(partition.missing, ids(&["emp_002", "emp_004"]));
    }

    #[test]
    fn test_partition_collapses_duplicates_to_first_occurrence() {
        let resolver = IdentityResolver::new(store_with(&[("emp_001", "101")]));

        let partition = resolver
            .partition_by_mapping_presence(
                PayrollSystem::Tripletex,
                &ids(&["emp_002", "emp_001", "emp_002", "emp_001"]),
            )
            .unwrap();

        assert_eq!(partition.mapped, ids(&["emp_001"]));
        assert_eq!(partition.missing, ids(&["emp_002"]));
    }

    #[test]
    fn test_partition_with_no_mappings_reports_all_missing() {
        let resolver = IdentityResolver::new(store_with(&[]));

        let partition = resolver
            .partition_by_mapping_presence(PayrollSystem::Tripletex, &ids(&["emp_001", "emp_002"]))
            .unwrap();

        assert!(partition.mapped.is_empty());
        assert_eq!(partition.missing, ids(&["emp_001", "emp_002"]));
    }
}
