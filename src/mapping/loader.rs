//! Mapping file loading.
//!
//! This module loads mapping tables from YAML files into an
//! [`InMemoryMappingStore`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ExportError, ExportResult};

use super::store::{EmployeeIdMapping, InMemoryMappingStore, SalaryCodeMapping};

/// Filename of the employee id mapping table inside a mapping directory.
pub const EMPLOYEE_IDS_FILE: &str = "employee_ids.yaml";

/// Filename of the salary code mapping table inside a mapping directory.
pub const SALARY_CODES_FILE: &str = "salary_codes.yaml";

#[derive(Debug, Deserialize)]
struct EmployeeMappingFile {
    mappings: Vec<EmployeeIdMapping>,
}

#[derive(Debug, Deserialize)]
struct SalaryCodeMappingFile {
    mappings: Vec<SalaryCodeMapping>,
}

impl InMemoryMappingStore {
    /// Loads a store from a mapping directory.
    ///
    /// # Directory Structure
    ///
    /// The mapping directory should have the following structure:
    /// ```text
    /// config/mappings/
    /// ├── employee_ids.yaml  # Employee id mappings per system
    /// └── salary_codes.yaml  # Salary code mappings per system
    /// ```
    ///
    /// Each file holds a `mappings` list of rows.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the mapping directory (e.g., "./config/mappings")
    ///
    /// # Returns
    ///
    /// Returns an `InMemoryMappingStore` on success, or an error if either
    /// file is missing or contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_export::mapping::InMemoryMappingStore;
    ///
    /// let store = InMemoryMappingStore::from_dir("./config/mappings")?;
    /// # Ok::<(), payroll_export::error::ExportError>(())
    /// ```
    pub fn from_dir<P: AsRef<Path>>(path: P) -> ExportResult<Self> {
        let path = path.as_ref();

        let employee_path = path.join(EMPLOYEE_IDS_FILE);
        let employee_file = Self::load_yaml::<EmployeeMappingFile>(&employee_path)?;

        let salary_path = path.join(SALARY_CODES_FILE);
        let salary_file = Self::load_yaml::<SalaryCodeMappingFile>(&salary_path)?;

        Ok(Self::new(employee_file.mappings, salary_file.mappings))
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ExportResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ExportError::MappingFileNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ExportError::MappingFileParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
