//! Implementation Registry
//!
//! Implementation types are made constructible by name by submitting an
//! [`ImplementationEntry`] into the [`IMPLEMENTATIONS`] distributed slice.
//! The slice is assembled by the linker; there is no runtime table and
//! nothing is cached between lookups.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Implementation Registration Flow                │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Impl crate:   #[linkme::distributed_slice(IMPLEMENTATIONS)] │
//! │                   static ENTRY: ImplementationEntry = ...       │
//! │                              ↓                                  │
//! │  2. Registry:     pub static IMPLEMENTATIONS: [Entry] = [..]    │
//! │                              ↓                                  │
//! │  3. Scope:        lookup_implementation("SpanishGreeter")       │
//! │                              ↓                                  │
//! │  4. Resolver:     entry.instantiate() → ResolvedInstance        │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering an Implementation
//!
//! ```ignore
//! use finder_application::registry::IMPLEMENTATIONS;
//! use finder_domain::{ImplementationEntry, erase};
//!
//! #[linkme::distributed_slice(IMPLEMENTATIONS)]
//! static SPANISH_GREETER: ImplementationEntry = ImplementationEntry {
//!     name: "org.example.SpanishGreeter",
//!     description: "Greets in Spanish",
//!     factory: || Ok(erase::<dyn Greeter>(Box::new(SpanishGreeter))),
//! };
//! ```

use finder_domain::ImplementationEntry;

// Auto-collection via linkme distributed slices - implementations submit entries at compile time
#[linkme::distributed_slice]
pub static IMPLEMENTATIONS: [ImplementationEntry] = [..];

/// Find a globally registered implementation by name
///
/// When several entries share a name the first one in slice order wins.
pub fn lookup_implementation(name: &str) -> Option<&'static ImplementationEntry> {
    IMPLEMENTATIONS.iter().find(|entry| entry.name == name)
}

/// List all globally registered implementations
///
/// Returns `(name, description)` pairs, useful for diagnostics and admin output.
pub fn list_implementations() -> Vec<(&'static str, &'static str)> {
    IMPLEMENTATIONS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
