//! Adapter registry.
//!
//! This module wires one adapter per payroll system over a shared mapping
//! store and hands them out by system, so the rest of the application never
//! constructs adapters directly.

use std::sync::Arc;

use tracing::info;

use crate::adapters::{
    AdapterCapabilities, PayrollExportAdapter, PowerOfficeAdapter, TripletexAdapter,
};
use crate::error::ExportResult;
use crate::mapping::MappingStore;
use crate::models::PayrollSystem;

/// One adapter per supported payroll system, built once and shared.
///
/// The registry is the composition root of the library: construct it once
/// at application start with the mapping store, clone it freely, and look
/// adapters up by system when an export is requested. Every adapter shares
/// the same store, so a mapping update is visible to all of them.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use payroll_export::mapping::InMemoryMappingStore;
/// use payroll_export::registry::AdapterRegistry;
///
/// let store = Arc::new(InMemoryMappingStore::from_dir("./config/mappings")?);
/// let registry = AdapterRegistry::new(store);
///
/// let adapter = registry.get_adapter("tripletex")?;
/// assert_eq!(adapter.system().to_string(), "tripletex");
/// # Ok::<(), payroll_export::error::ExportError>(())
/// ```
#[derive(Clone)]
pub struct AdapterRegistry {
    tripletex: Arc<TripletexAdapter>,
    poweroffice: Arc<PowerOfficeAdapter>,
}

impl AdapterRegistry {
    /// Creates a registry with one adapter per supported system.
    ///
    /// All adapters resolve against the given mapping store.
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        let registry = Self {
            tripletex: Arc::new(TripletexAdapter::new(store.clone())),
            poweroffice: Arc::new(PowerOfficeAdapter::new(store)),
        };
        info!(
            systems = ?Self::list_available_systems(),
            "Adapter registry initialized"
        );
        registry
    }

    /// Looks up the adapter for a system identifier.
    ///
    /// The identifier is matched case-insensitively against the known
    /// system names.
    ///
    /// # Arguments
    ///
    /// * `system` - A system identifier such as `"tripletex"`
    ///
    /// # Returns
    ///
    /// Returns the adapter as a trait object, or
    /// [`ExportError::UnsupportedSystem`](crate::error::ExportError::UnsupportedSystem)
    /// naming the identifier when no adapter matches.
    pub fn get_adapter(&self, system: &str) -> ExportResult<Arc<dyn PayrollExportAdapter>> {
        let system = system.parse::<PayrollSystem>()?;
        Ok(self.adapter(system))
    }

    /// Returns the adapter for an already-parsed system.
    pub fn adapter(&self, system: PayrollSystem) -> Arc<dyn PayrollExportAdapter> {
        match system {
            PayrollSystem::Tripletex => self.tripletex.clone(),
            PayrollSystem::PowerOffice => self.poweroffice.clone(),
        }
    }

    /// Returns the Tripletex adapter with its concrete type.
    ///
    /// Useful when the caller needs the typed
    /// [`transform`](TripletexAdapter::transform) output rather than the
    /// trait surface.
    pub fn tripletex(&self) -> &TripletexAdapter {
        &self.tripletex
    }

    /// Returns the PowerOffice adapter with its concrete type.
    pub fn poweroffice(&self) -> &PowerOfficeAdapter {
        &self.poweroffice
    }

    /// Returns true if the identifier names a supported system.
    pub fn is_system_supported(system: &str) -> bool {
        system.parse::<PayrollSystem>().is_ok()
    }

    /// Lists every supported system identifier, in registration order.
    pub fn list_available_systems() -> Vec<&'static str> {
        PayrollSystem::ALL.iter().map(PayrollSystem::as_str).collect()
    }

    /// Returns the declared capabilities of every registered adapter.
    pub fn capabilities(&self) -> Vec<AdapterCapabilities> {
        PayrollSystem::ALL
            .iter()
            .map(|system| self.adapter(*system).capabilities())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::mapping::InMemoryMappingStore;
    use crate::models::FileFormat;

    fn registry() -> AdapterRegistry {
        AdapterRegistry::new(Arc::new(InMemoryMappingStore::default()))
    }

    #[test]
    fn test_get_adapter_returns_matching_system() {
        let registry = registry();

        let tripletex = registry.get_adapter("tripletex").unwrap();
        assert_eq!(tripletex.system(), PayrollSystem::Tripletex);

        let poweroffice = registry.get_adapter("poweroffice").unwrap();
        assert_eq!(poweroffice.system(), PayrollSystem::PowerOffice);
    }

    #[test]
    fn test_get_adapter_is_case_insensitive() {
        let registry = registry();

        let adapter = registry.get_adapter("PowerOffice").unwrap();
        assert_eq!(adapter.system(), PayrollSystem::PowerOffice);
    }

    #[test]
    fn test_get_adapter_rejects_unknown_system() {
        let registry = registry();

        let result = registry.get_adapter("visma");
        match result {
            Err(ExportError::UnsupportedSystem { system }) => {
                assert_eq!(system, "visma");
            }
            _ => panic!("Expected UnsupportedSystem error"),
        }
    }

    #[test]
    fn test_repeated_lookups_share_one_instance() {
        let registry = registry();

        let first = registry.get_adapter("tripletex").unwrap();
        let second = registry.get_adapter("tripletex").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_is_system_supported() {
        assert!(AdapterRegistry::is_system_supported("tripletex"));
        assert!(AdapterRegistry::is_system_supported("poweroffice"));
        assert!(!AdapterRegistry::is_system_supported("visma"));
        assert!(!AdapterRegistry::is_system_supported(""));
    }

    #[test]
    fn test_list_available_systems() {
        assert_eq!(
            AdapterRegistry::list_available_systems(),
            vec!["tripletex", "poweroffice"]
        );
    }

    #[test]
    fn test_capabilities_cover_every_system() {
        let registry = registry();
        let capabilities = registry.capabilities();

        assert_eq!(capabilities.len(), 2);
        assert_eq!(capabilities[0].system, PayrollSystem::Tripletex);
        assert_eq!(capabilities[0].supported_formats, vec![FileFormat::Csv]);
        assert_eq!(capabilities[1].system, PayrollSystem::PowerOffice);
        assert_eq!(
            capabilities[1].supported_formats,
            vec![FileFormat::Csv, FileFormat::Json]
        );
    }

    #[test]
    fn test_registry_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AdapterRegistry>();
    }
}
