//! Domain Port Interfaces
//!
//! Narrow interfaces to the host services the resolver consumes: a
//! property store, resource sources, and loading scopes able to
//! construct registered types by name.

/// Property store port and execution contexts
pub mod properties;
/// Resource and loading scope ports
pub mod scope;

pub use properties::{ExecutionContext, PrivilegedContext, PropertyStore};
pub use scope::{LoadingScope, ResourceSource};
