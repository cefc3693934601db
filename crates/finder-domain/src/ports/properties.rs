//! Property Store Port
//!
//! Read-only access to named properties. Reads take the execution
//! context explicitly so that an access-controlled store can honour a
//! privilege captured at process start without any hidden global state.

/// Token proving that elevated property access was granted
///
/// Obtained once via [`PrivilegedContext::capture`] and then passed by
/// value wherever a privileged read is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivilegedContext {
    _private: (),
}

impl PrivilegedContext {
    /// Capture the privileged context of the current process
    pub fn capture() -> Self {
        Self { _private: () }
    }
}

/// Context a property read executes under
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Whatever access the caller already has
    #[default]
    Ambient,
    /// Elevated access captured earlier in the process
    Privileged(PrivilegedContext),
}

impl ExecutionContext {
    /// Whether this context carries elevated access
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Privileged(_))
    }
}

impl From<PrivilegedContext> for ExecutionContext {
    fn from(context: PrivilegedContext) -> Self {
        Self::Privileged(context)
    }
}

/// Named property lookup
///
/// Returns `None` when the property is absent or the read is not
/// permitted under `context`.
pub trait PropertyStore: Send + Sync {
    /// Read the property named `key`
    fn get_property(&self, key: &str, context: &ExecutionContext) -> Option<String>;
}

impl<S: PropertyStore + ?Sized> PropertyStore for &S {
    fn get_property(&self, key: &str, context: &ExecutionContext) -> Option<String> {
        (**self).get_property(key, context)
    }
}
