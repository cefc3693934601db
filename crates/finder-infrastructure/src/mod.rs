//! # Finder Infrastructure
//!
//! Concrete adapters for the resolver ports plus the ambient concerns of
//! a host process: configuration loading and structured logging.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use adapters::{
    ConfiguredProperties, DirectoryResources, EnvPropertyStore, MapPropertyStore, ModuleScope,
    PolicyPropertyStore, RegistryScope,
};
pub use bootstrap::Bootstrap;
pub use config::{ConfigLoader, FinderConfig, LoggingConfig};
pub use logging::init_logging;
