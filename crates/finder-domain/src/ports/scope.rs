//! Resource and Loading Scope Ports

use std::io::{self, Read};

use crate::error::TypeLookupError;
use crate::value_objects::ImplementationEntry;

/// Source of named byte-stream resources
pub trait ResourceSource: Send + Sync {
    /// Open the resource at `path`
    ///
    /// `Ok(None)` means the resource does not exist. The returned stream is
    /// released when dropped.
    fn open_resource(&self, path: &str) -> io::Result<Option<Box<dyn Read + Send + '_>>>;
}

/// Module boundary used both to find resources and to construct types
///
/// Scopes are borrowed for the duration of one resolution only; nothing
/// in the resolver keeps a reference to a scope after it returns.
pub trait LoadingScope: ResourceSource {
    /// Identifier used in diagnostics
    fn scope_id(&self) -> &str;

    /// Locate the type registered under `name`
    fn load_type(&self, name: &str) -> Result<ImplementationEntry, TypeLookupError>;
}
