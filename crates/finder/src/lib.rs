//! # Finder
//!
//! Discovers and constructs the implementation of a contract by name,
//! without retaining the loading scope that performed the lookup.
//!
//! The implementation name comes from the first of these that yields one:
//!
//! 1. a property keyed by the contract's fully-qualified name
//! 2. the first line of `META-INF/services/<name>` in the contract's scope
//! 3. a caller-supplied fallback
//!
//! Resolution is a pure function of its inputs. Nothing is cached, so a
//! plugin scope can be dropped and reloaded without leaking.
//!
//! ## Example
//!
//! ```ignore
//! use finder::domain::{Contract, InterfaceDescriptor};
//! use finder::infrastructure::RegistryScope;
//!
//! pub trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! impl Contract for dyn Greeter {
//!     const NAME: &'static str = "org.example.Greeter";
//! }
//!
//! let scope = RegistryScope::default();
//! let greeter = finder::find_with_fallback(
//!     &InterfaceDescriptor::of::<dyn Greeter>(&scope),
//!     Some("org.example.DefaultGreeter"),
//! )?
//! .into_contract::<dyn Greeter>()?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, value objects and ports
//! - `application` - implementation registry and resolver
//! - `infrastructure` - property stores, scopes, configuration and logging

/// Domain layer - errors, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use finder_domain::*;
}

/// Application layer - registry and resolver
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use finder_application::*;
}

/// Infrastructure layer - adapters, configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use finder_infrastructure::*;
}

pub use finder_application::{IMPLEMENTATIONS, Resolver};
pub use finder_domain::{
    Contract, Error, ImplementationEntry, InterfaceDescriptor, ResolvedInstance, Result, erase,
};

use finder_infrastructure::EnvPropertyStore;

/// Resolve `interface` reading properties from the process environment
pub fn find(interface: &InterfaceDescriptor<'_>) -> Result<ResolvedInstance> {
    find_with_fallback(interface, None)
}

/// Resolve `interface` reading properties from the process environment,
/// using `fallback` when neither the property nor the resource names one
pub fn find_with_fallback(
    interface: &InterfaceDescriptor<'_>,
    fallback: Option<&str>,
) -> Result<ResolvedInstance> {
    Resolver::new(&EnvPropertyStore).find_with_fallback(interface, fallback)
}
