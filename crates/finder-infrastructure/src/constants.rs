//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `finder_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "finder.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "finder";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "FINDER";

/// Separator for nested keys in environment variables (e.g., `FINDER_LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "FINDER_LOG";

/// Default log file stem when file output is enabled
pub const DEFAULT_LOG_FILE_STEM: &str = "finder";

// ============================================================================
// SCOPE CONSTANTS
// ============================================================================

/// Identifier of the scope backed by the global implementation registry
pub const APPLICATION_SCOPE_ID: &str = "application";
