//! Resolved instances

use std::any::{Any, type_name};
use std::fmt;

use crate::error::{Error, Result};
use crate::value_objects::ImplementationName;

/// Freshly constructed implementation, owned solely by the caller
///
/// The resolver does not check that the implementation matches the
/// interface it was resolved for. The caller coerces the value with
/// [`ResolvedInstance::into_contract`], which is where a mismatched
/// pairing surfaces.
pub struct ResolvedInstance {
    implementation: ImplementationName,
    value: Box<dyn Any + Send>,
}

impl ResolvedInstance {
    /// Wrap an erased value constructed for `implementation`
    pub fn new(implementation: ImplementationName, value: Box<dyn Any + Send>) -> Self {
        Self {
            implementation,
            value,
        }
    }

    /// Name of the constructed implementation
    pub fn implementation(&self) -> &ImplementationName {
        &self.implementation
    }

    /// Whether the instance can be viewed as `T`
    pub fn provides<T: ?Sized + 'static>(&self) -> bool {
        self.value.is::<Box<T>>()
    }

    /// Coerce the instance into the contract `T`
    pub fn into_contract<T: ?Sized + 'static>(self) -> Result<Box<T>> {
        match self.value.downcast::<Box<T>>() {
            Ok(boxed) => Ok(*boxed),
            Err(_) => Err(Error::ContractMismatch {
                implementation: self.implementation.into_string(),
                contract: type_name::<T>(),
            }),
        }
    }
}

impl fmt::Debug for ResolvedInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedInstance")
            .field("implementation", &self.implementation)
            .finish_non_exhaustive()
    }
}
