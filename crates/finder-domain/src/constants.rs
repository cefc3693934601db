//! Domain layer constants
//!
//! Conventions that other ecosystems rely on when writing
//! provider-configuration files. Changing them breaks compatibility.

// ============================================================================
// PROVIDER CONFIGURATION CONSTANTS
// ============================================================================

/// Directory prefix under which provider-configuration resources live
pub const SERVICES_RESOURCE_PREFIX: &str = "META-INF/services/";

/// Build the provider-configuration resource path for an interface name
pub fn services_resource_path(interface_name: &str) -> String {
    format!("{SERVICES_RESOURCE_PREFIX}{interface_name}")
}
