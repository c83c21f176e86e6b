//! Salary code resolution.
//!
//! This module translates internal salary type codes into the codes a
//! target payroll system expects, with a verbatim fallback for unmapped
//! codes.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ExportResult;
use crate::models::PayrollSystem;

use super::store::MappingStore;

/// Builds per-system salary code maps from the mapping store.
#[derive(Clone)]
pub struct SalaryCodeResolver {
    store: Arc<dyn MappingStore>,
}

/// A complete salary code translation table for one payroll system.
///
/// Built once per export run so individual lines resolve without further
/// store access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryCodeMap {
    mappings: HashMap<String, String>,
}

impl SalaryCodeResolver {
    /// Creates a resolver over the given mapping store.
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Builds the full code map for one system in a single store lookup.
    ///
    /// # Arguments
    ///
    /// * `system` - The target payroll system
    ///
    /// # Returns
    ///
    /// A [`SalaryCodeMap`] covering every active salary code mapping for
    /// the system. An empty mapping set yields an empty map, in which case
    /// every code falls back to itself.
    pub fn build_code_map(&self, system: PayrollSystem) -> ExportResult<SalaryCodeMap> {
        let mappings = self.store.find_salary_code_mappings(system)?;
        Ok(SalaryCodeMap { mappings })
    }
}

impl SalaryCodeMap {
    /// Resolves an internal salary type code to its external code.
    ///
    /// Unmapped codes resolve to themselves verbatim. Target systems accept
    /// arbitrary code strings, so an unmapped code surfaces recognizably in
    /// the export instead of failing the run.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use payroll_export::mapping::{InMemoryMappingStore, SalaryCodeMapping, SalaryCodeResolver};
    /// use payroll_export::models::PayrollSystem;
    ///
    /// let store = Arc::new(InMemoryMappingStore::new(
    ///     vec![],
    ///     vec![SalaryCodeMapping {
    ///         internal_code: "BASE".to_string(),
    ///         system: PayrollSystem::Tripletex,
    ///         external_code: "1000".to_string(),
    ///         is_active: true,
    ///     }],
    /// ));
    /// let resolver = SalaryCodeResolver::new(store);
    /// let map = resolver.build_code_map(PayrollSystem::Tripletex).unwrap();
    ///
    /// assert_eq!(map.resolve("BASE"), "1000");
    /// assert_eq!(map.resolve("UNMAPPED"), "UNMAPPED");
    /// ```
    pub fn resolve<'a>(&'a self, internal_code: &'a str) -> &'a str {
        self.mappings
            .get(internal_code)
            .map(String::as_str)
            .unwrap_or(internal_code)
    }

    /// Returns true if the code has an explicit mapping.
    pub fn contains(&self, internal_code: &str) -> bool {
        self.mappings.contains_key(internal_code)
    }

    /// Returns the number of explicit mappings in the map.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns true if the map holds no explicit mappings.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
