//! Property store adapters

use std::collections::{BTreeMap, HashSet};
use std::env;

use finder_domain::{ExecutionContext, PropertyStore};
use tracing::warn;

/// Properties read from the process environment
///
/// Keys are used verbatim, so `org.example.Greeter=...` in the environment
/// answers a lookup for that interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvPropertyStore;

impl PropertyStore for EnvPropertyStore {
    fn get_property(&self, key: &str, _context: &ExecutionContext) -> Option<String> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        env::var(key).ok()
    }
}

/// Properties held in memory
#[derive(Debug, Clone, Default)]
pub struct MapPropertyStore {
    values: BTreeMap<String, String>,
}

impl MapPropertyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl From<BTreeMap<String, String>> for MapPropertyStore {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

impl PropertyStore for MapPropertyStore {
    fn get_property(&self, key: &str, _context: &ExecutionContext) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Configured overrides in front of the process environment
///
/// A key present in the overrides never reaches the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredProperties {
    overrides: MapPropertyStore,
    environment: EnvPropertyStore,
}

impl ConfiguredProperties {
    /// Create a store from configured overrides
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        Self {
            overrides: overrides.into(),
            environment: EnvPropertyStore,
        }
    }
}

impl PropertyStore for ConfiguredProperties {
    fn get_property(&self, key: &str, context: &ExecutionContext) -> Option<String> {
        self.overrides
            .get_property(key, context)
            .or_else(|| self.environment.get_property(key, context))
    }
}

/// Access-controlled view of another property store
///
/// Ambient reads are limited to the allow-listed keys; privileged reads
/// pass through unchanged. A denied read behaves as an absent property.
#[derive(Debug, Clone)]
pub struct PolicyPropertyStore<S> {
    inner: S,
    ambient_keys: HashSet<String>,
}

impl<S: PropertyStore> PolicyPropertyStore<S> {
    /// Guard `inner`, denying every ambient read
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            ambient_keys: HashSet::new(),
        }
    }

    /// Allow ambient reads of `key`
    pub fn allow(mut self, key: impl Into<String>) -> Self {
        self.ambient_keys.insert(key.into());
        self
    }

    fn permits(&self, key: &str, context: &ExecutionContext) -> bool {
        context.is_privileged() || self.ambient_keys.contains(key)
    }
}

impl<S: PropertyStore> PropertyStore for PolicyPropertyStore<S> {
    fn get_property(&self, key: &str, context: &ExecutionContext) -> Option<String> {
        if !self.permits(key, context) {
            warn!(property = key, "Property read denied in ambient context");
            return None;
        }
        self.inner.get_property(key, context)
    }
}
