//! # Finder Domain
//!
//! Core types for discovering an implementation of a contract by name
//! without keeping hold of the loading scope that performed the lookup.
//!
//! - [`error`] - error taxonomy shared by every layer
//! - [`value_objects`] - transient values produced during one resolution
//! - [`ports`] - traits for the external services the resolver consumes
//! - [`constants`] - provider-configuration conventions

/// Provider-configuration conventions
pub mod constants;
/// Error handling types
pub mod error;
/// Ports for external services
pub mod ports;
/// Transient value objects
pub mod value_objects;

pub use error::{BoxError, Error, Result, TypeLookupError};
pub use ports::{ExecutionContext, LoadingScope, PrivilegedContext, PropertyStore, ResourceSource};
pub use value_objects::{
    Contract, ImplementationEntry, ImplementationFactory, ImplementationName, InterfaceDescriptor,
    NameSource, ResolvedInstance, erase,
};
