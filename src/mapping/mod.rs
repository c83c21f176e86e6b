//! Mapping data and resolvers.
//!
//! This module owns the identity and salary code mapping tables: the raw
//! rows, the [`MappingStore`] seam host applications can implement, the
//! in-memory store with its YAML loader, and the two resolvers the export
//! adapters are built on.

mod identity;
mod loader;
mod salary_code;
mod store;

pub use identity::{IdentityResolver, MappingPartition};
pub use loader::{EMPLOYEE_IDS_FILE, SALARY_CODES_FILE};
pub use salary_code::{SalaryCodeMap, SalaryCodeResolver};
pub use store::{EmployeeIdMapping, InMemoryMappingStore, MappingStore, SalaryCodeMapping};
