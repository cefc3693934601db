//! Loading scope adapters

use std::collections::HashMap;
use std::io::{self, Cursor, Read};

use finder_application::registry::lookup_implementation;
use finder_domain::constants::services_resource_path;
use finder_domain::{ImplementationEntry, LoadingScope, ResourceSource, TypeLookupError};

use crate::adapters::DirectoryResources;
use crate::constants::APPLICATION_SCOPE_ID;

/// Scope of the host application
///
/// Resources come from directory roots and types from the global
/// implementation registry.
#[derive(Debug, Clone)]
pub struct RegistryScope {
    id: String,
    resources: DirectoryResources,
}

impl RegistryScope {
    /// Create the application scope over `resources`
    pub fn new(resources: DirectoryResources) -> Self {
        Self::named(APPLICATION_SCOPE_ID, resources)
    }

    /// Create a registry-backed scope with a custom identifier
    pub fn named(id: impl Into<String>, resources: DirectoryResources) -> Self {
        Self {
            id: id.into(),
            resources,
        }
    }

    /// Resource roots searched by this scope
    pub fn resources(&self) -> &DirectoryResources {
        &self.resources
    }
}

impl Default for RegistryScope {
    fn default() -> Self {
        Self::new(DirectoryResources::default())
    }
}

impl ResourceSource for RegistryScope {
    fn open_resource(&self, path: &str) -> io::Result<Option<Box<dyn Read + Send + '_>>> {
        self.resources.open_resource(path)
    }
}

impl LoadingScope for RegistryScope {
    fn scope_id(&self) -> &str {
        &self.id
    }

    fn load_type(&self, name: &str) -> Result<ImplementationEntry, TypeLookupError> {
        lookup_implementation(name)
            .copied()
            .ok_or_else(|| TypeLookupError::new(name, &self.id))
    }
}

/// Self-contained scope of a plugin module
///
/// Owns its implementation entries and resources. Only the entries added
/// to the module are constructible through it; the global registry is not
/// consulted. Dropping the module releases everything it owns.
#[derive(Debug, Clone, Default)]
pub struct ModuleScope {
    id: String,
    entries: Vec<ImplementationEntry>,
    resources: HashMap<String, Vec<u8>>,
    directories: DirectoryResources,
}

impl ModuleScope {
    /// Create an empty module scope
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Make `entry` constructible in this module
    pub fn with_entry(mut self, entry: ImplementationEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Add an in-memory resource
    pub fn with_resource(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.resources.insert(path.into(), content.into());
        self
    }

    /// Add a provider-configuration resource for `interface`
    pub fn with_services(self, interface: &str, content: impl Into<Vec<u8>>) -> Self {
        self.with_resource(services_resource_path(interface), content)
    }

    /// Serve resources not held in memory from `directories`
    pub fn with_directories(mut self, directories: DirectoryResources) -> Self {
        self.directories = directories;
        self
    }

    /// Names of the entries constructible in this module
    pub fn entry_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }
}

impl ResourceSource for ModuleScope {
    fn open_resource(&self, path: &str) -> io::Result<Option<Box<dyn Read + Send + '_>>> {
        if let Some(content) = self.resources.get(path) {
            return Ok(Some(Box::new(Cursor::new(content.as_slice()))));
        }
        self.directories.open_resource(path)
    }
}

impl LoadingScope for ModuleScope {
    fn scope_id(&self) -> &str {
        &self.id
    }

    fn load_type(&self, name: &str) -> Result<ImplementationEntry, TypeLookupError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .copied()
            .ok_or_else(|| TypeLookupError::new(name, &self.id))
    }
}
