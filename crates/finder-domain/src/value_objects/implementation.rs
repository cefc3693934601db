//! Implementation names and registry entries

use std::any::Any;
use std::fmt;

use crate::error::BoxError;

/// Zero-argument initializer of a registered implementation
///
/// The returned value must be produced with [`erase`] so callers can
/// coerce it back into the contract they asked for.
pub type ImplementationFactory = fn() -> Result<Box<dyn Any + Send>, BoxError>;

/// Erase a boxed contract or concrete value for transport through the resolver
///
/// `erase::<dyn Greeter>(Box::new(SpanishGreeter))` can later be recovered
/// with `into_contract::<dyn Greeter>()`.
pub fn erase<T: ?Sized + Send + 'static>(value: Box<T>) -> Box<dyn Any + Send> {
    Box::new(value)
}

/// Lookup strategy that produced an implementation name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// Property keyed by the interface name
    Property,
    /// First line of the provider-configuration resource
    Resource,
    /// Caller-supplied fallback
    Fallback,
}

impl fmt::Display for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property => write!(f, "property"),
            Self::Resource => write!(f, "resource"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Name of a concrete implementation type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationName {
    name: String,
    source: NameSource,
}

impl ImplementationName {
    /// Accept a name verbatim, rejecting the empty string
    pub fn new<S: Into<String>>(name: S, source: NameSource) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(Self { name, source })
        }
    }

    /// Accept a provider-configuration line with surrounding whitespace trimmed
    pub fn from_line(line: &str) -> Option<Self> {
        Self::new(line.trim(), NameSource::Resource)
    }

    /// The implementation name
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Strategy the name came from
    pub fn source(&self) -> NameSource {
        self.source
    }

    /// Consume into the bare name
    pub fn into_string(self) -> String {
        self.name
    }
}

impl fmt::Display for ImplementationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Registered implementation type
///
/// Entries are plain `'static` data so they can be collected into a
/// `linkme` distributed slice or held by a module scope.
#[derive(Clone, Copy)]
pub struct ImplementationEntry {
    /// Unique implementation name (e.g., "org.example.SpanishGreeter")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create an instance
    pub factory: ImplementationFactory,
}

impl ImplementationEntry {
    /// Run the zero-argument initializer
    pub fn instantiate(&self) -> Result<Box<dyn Any + Send>, BoxError> {
        (self.factory)()
    }
}

impl fmt::Debug for ImplementationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplementationEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
