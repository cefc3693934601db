//! Configuration types

use crate::constants::DEFAULT_LOG_LEVEL;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rotated file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Top-level configuration of a host using the resolver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Logging settings
    pub logging: LoggingConfig,

    /// Property overrides keyed by fully-qualified interface name
    pub properties: BTreeMap<String, String>,

    /// Directories searched for resources of the application scope, in order
    pub resource_roots: Vec<PathBuf>,

    /// Directories searched for system resources before any scope, in order
    pub system_resource_roots: Vec<PathBuf>,
}

impl FinderConfig {
    /// Set a property override
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Append an application resource root
    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resource_roots.push(root.into());
        self
    }

    /// Append a system resource root
    pub fn with_system_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.system_resource_roots.push(root.into());
        self
    }
}
