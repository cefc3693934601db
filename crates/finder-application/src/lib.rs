//! # Finder Application
//!
//! Resolution of a contract to a freshly constructed implementation.
//!
//! - [`registry`] - compile-time registration of implementation types
//! - [`resolver`] - property, resource and fallback lookup followed by construction

pub mod registry;
pub mod resolver;

pub use registry::{IMPLEMENTATIONS, list_implementations, lookup_implementation};
pub use resolver::{Resolver, read_first_line};
