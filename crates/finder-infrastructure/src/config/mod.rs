//! Configuration management
//!
//! TOML files and `FINDER_` environment variables, merged with Figment.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::{FinderConfig, LoggingConfig};
