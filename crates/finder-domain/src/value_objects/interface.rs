//! Interface descriptors

use std::fmt;

use crate::ports::LoadingScope;

/// An abstract contract that implementations can be resolved for
///
/// Implement it on the trait-object type of the contract:
///
/// ```ignore
/// pub trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// impl Contract for dyn Greeter {
///     const NAME: &'static str = "org.example.Greeter";
/// }
/// ```
pub trait Contract: 'static {
    /// Fully-qualified name of the contract
    const NAME: &'static str;
}

/// Contract name together with the loading scope associated with it
///
/// The scope is borrowed, so a descriptor can never extend the lifetime
/// of the scope it points at.
#[derive(Clone, Copy)]
pub struct InterfaceDescriptor<'s> {
    name: &'s str,
    scope: &'s dyn LoadingScope,
}

impl<'s> InterfaceDescriptor<'s> {
    /// Describe an interface by its fully-qualified name
    pub fn new(name: &'s str, scope: &'s dyn LoadingScope) -> Self {
        Self { name, scope }
    }

    /// Describe the interface declared by the contract type `C`
    pub fn of<C: Contract + ?Sized>(scope: &'s dyn LoadingScope) -> Self {
        Self::new(C::NAME, scope)
    }

    /// Fully-qualified interface name
    pub fn name(&self) -> &'s str {
        self.name
    }

    /// Loading scope associated with the interface
    pub fn scope(&self) -> &'s dyn LoadingScope {
        self.scope
    }

    /// Whether the descriptor names an interface at all
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

impl fmt::Debug for InterfaceDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceDescriptor")
            .field("name", &self.name)
            .field("scope", &self.scope.scope_id())
            .finish()
    }
}
