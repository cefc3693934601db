//! Implementation Resolver
//!
//! Resolves an interface to an implementation name using a fixed
//! precedence, then constructs it inside the interface's loading scope:
//!
//! 1. the property keyed by the interface name, when present and non-empty
//! 2. the first line of `META-INF/services/<interface>`, trimmed, when non-empty
//! 3. the caller-supplied fallback
//!
//! The first strategy that yields a name wins. The resolver borrows its
//! collaborators and keeps nothing from one call to the next: no cache,
//! no reference to the loading scope, no record of the instance.

use std::any::Any;
use std::io::{self, BufRead, BufReader, Read};
use std::panic::{self, AssertUnwindSafe};

use finder_domain::constants::services_resource_path;
use finder_domain::{
    BoxError, Error, ExecutionContext, ImplementationFactory, ImplementationName,
    InterfaceDescriptor, LoadingScope, NameSource, PropertyStore, ResolvedInstance,
    ResourceSource, Result,
};
use tracing::{debug, warn};

/// Stateless resolver over a property store and optional system resources
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    properties: &'a dyn PropertyStore,
    system_resources: Option<&'a dyn ResourceSource>,
    context: ExecutionContext,
}

impl<'a> Resolver<'a> {
    /// Create a resolver reading properties from `properties` in the ambient context
    pub fn new(properties: &'a dyn PropertyStore) -> Self {
        Self {
            properties,
            system_resources: None,
            context: ExecutionContext::Ambient,
        }
    }

    /// Consult `resources` for the provider-configuration resource before the scope
    pub fn with_system_resources(mut self, resources: &'a dyn ResourceSource) -> Self {
        self.system_resources = Some(resources);
        self
    }

    /// Read properties under `context` instead of the ambient one
    pub fn with_context<C: Into<ExecutionContext>>(mut self, context: C) -> Self {
        self.context = context.into();
        self
    }

    /// Execution context property reads run under
    pub fn context(&self) -> ExecutionContext {
        self.context
    }

    /// Resolve and construct an implementation of `interface`
    pub fn find(&self, interface: &InterfaceDescriptor<'_>) -> Result<ResolvedInstance> {
        self.find_with_fallback(interface, None)
    }

    /// Resolve and construct an implementation of `interface`, using
    /// `fallback` when neither the property nor the resource names one
    pub fn find_with_fallback(
        &self,
        interface: &InterfaceDescriptor<'_>,
        fallback: Option<&str>,
    ) -> Result<ResolvedInstance> {
        if interface.is_blank() {
            return Err(Error::invalid_argument("Interface name cannot be empty"));
        }

        let name = self
            .name_from_property(interface)
            .or_else(|| self.name_from_resource(interface))
            .or_else(|| fallback.and_then(|f| ImplementationName::new(f, NameSource::Fallback)))
            .ok_or_else(|| Error::not_found(interface.name()))?;

        debug!(
            interface = interface.name(),
            implementation = name.as_str(),
            source = %name.source(),
            "Implementation name resolved"
        );

        instantiate(name, interface.scope())
    }

    fn name_from_property(&self, interface: &InterfaceDescriptor<'_>) -> Option<ImplementationName> {
        let value = self
            .properties
            .get_property(interface.name(), &self.context)?;
        ImplementationName::new(value, NameSource::Property)
    }

    fn name_from_resource(&self, interface: &InterfaceDescriptor<'_>) -> Option<ImplementationName> {
        let path = services_resource_path(interface.name());
        let stream = self.open_services_resource(&path, interface.scope())?;

        // The stream is consumed and dropped here on every outcome.
        match read_first_line(stream) {
            Ok(Some(line)) => ImplementationName::from_line(&line),
            Ok(None) => None,
            Err(e) => {
                warn!(resource = %path, error = %e, "Ignoring unreadable provider configuration");
                None
            }
        }
    }

    fn open_services_resource<'s>(
        &'s self,
        path: &str,
        scope: &'s dyn LoadingScope,
    ) -> Option<Box<dyn Read + Send + 's>> {
        if let Some(system) = self.system_resources {
            match system.open_resource(path) {
                Ok(Some(stream)) => return Some(stream),
                Ok(None) => {}
                Err(e) => {
                    warn!(resource = %path, error = %e, "Ignoring system resource error");
                }
            }
        }

        match scope.open_resource(path) {
            Ok(stream) => stream,
            Err(e) => {
                warn!(
                    resource = %path,
                    scope = scope.scope_id(),
                    error = %e,
                    "Ignoring scope resource error"
                );
                None
            }
        }
    }
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("system_resources", &self.system_resources.is_some())
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Read the first line of `reader` as UTF-8
///
/// Returns `Ok(None)` for an empty stream. The reader is dropped before
/// this function returns.
pub fn read_first_line<R: Read>(reader: R) -> io::Result<Option<String>> {
    let mut reader = BufReader::new(reader);
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn instantiate(name: ImplementationName, scope: &dyn LoadingScope) -> Result<ResolvedInstance> {
    let entry = scope
        .load_type(name.as_str())
        .map_err(|e| Error::implementation_not_found(name.as_str(), e))?;

    let value = construct(entry.factory)
        .map_err(|e| Error::instantiation_failed(name.as_str(), e))?;

    debug!(
        implementation = name.as_str(),
        scope = scope.scope_id(),
        "Implementation instantiated"
    );
    Ok(ResolvedInstance::new(name, value))
}

fn construct(factory: ImplementationFactory) -> std::result::Result<Box<dyn Any + Send>, BoxError> {
    match panic::catch_unwind(AssertUnwindSafe(factory)) {
        Ok(result) => result,
        Err(payload) => Err(panic_message(payload.as_ref()).into()),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("initializer panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("initializer panicked: {message}")
    } else {
        "initializer panicked".to_string()
    }
}
