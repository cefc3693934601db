//! Adapters for the resolver ports
//!
//! | Adapter | Port | Backing |
//! |---------|------|---------|
//! | [`EnvPropertyStore`] | `PropertyStore` | process environment |
//! | [`MapPropertyStore`] | `PropertyStore` | in-memory map |
//! | [`ConfiguredProperties`] | `PropertyStore` | config overrides, then environment |
//! | [`PolicyPropertyStore`] | `PropertyStore` | allow-list in front of another store |
//! | [`DirectoryResources`] | `ResourceSource` | ordered directory roots |
//! | [`RegistryScope`] | `LoadingScope` | directory roots + global registry |
//! | [`ModuleScope`] | `LoadingScope` | plugin-owned resources and entries |

pub mod properties;
pub mod resources;
pub mod scope;

pub use properties::{ConfiguredProperties, EnvPropertyStore, MapPropertyStore, PolicyPropertyStore};
pub use resources::DirectoryResources;
pub use scope::{ModuleScope, RegistryScope};
