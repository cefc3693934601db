//! Domain Value Objects
//!
//! Transient values produced while resolving one interface. None of them
//! outlive the call except the [`ResolvedInstance`], which is handed to
//! the caller.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`InterfaceDescriptor`] | Contract name plus the loading scope it belongs to |
//! | [`ImplementationName`] | Name of a concrete type, tagged with where it came from |
//! | [`ImplementationEntry`] | Registered type with its zero-argument factory |
//! | [`ResolvedInstance`] | Freshly constructed, type-erased instance |

/// Registered implementations and their names
pub mod implementation;
/// Resolved instances
pub mod instance;
/// Interface descriptors and contracts
pub mod interface;

pub use implementation::{
    ImplementationEntry, ImplementationFactory, ImplementationName, NameSource, erase,
};
pub use instance::ResolvedInstance;
pub use interface::{Contract, InterfaceDescriptor};
