//! Unit tests for interface descriptors

use std::io::{self, Read};

use finder_domain::constants::{SERVICES_RESOURCE_PREFIX, services_resource_path};
use finder_domain::{
    Contract, ImplementationEntry, InterfaceDescriptor, LoadingScope, ResourceSource,
    TypeLookupError,
};

trait Greeter: Send + Sync {}

impl Contract for dyn Greeter {
    const NAME: &'static str = "org.example.Greeter";
}

struct EmptyScope;

impl ResourceSource for EmptyScope {
    fn open_resource(&self, _path: &str) -> io::Result<Option<Box<dyn Read + Send + '_>>> {
        Ok(None)
    }
}

impl LoadingScope for EmptyScope {
    fn scope_id(&self) -> &str {
        "empty"
    }

    fn load_type(&self, name: &str) -> Result<ImplementationEntry, TypeLookupError> {
        Err(TypeLookupError::new(name, "empty"))
    }
}

#[test]
fn test_descriptor_from_contract() {
    let scope = EmptyScope;
    let descriptor = InterfaceDescriptor::of::<dyn Greeter>(&scope);
    assert_eq!(descriptor.name(), "org.example.Greeter");
    assert_eq!(descriptor.scope().scope_id(), "empty");
    assert!(!descriptor.is_blank());
}

#[test]
fn test_blank_descriptor() {
    let scope = EmptyScope;
    assert!(InterfaceDescriptor::new("", &scope).is_blank());
    assert!(InterfaceDescriptor::new(" \t", &scope).is_blank());
}

#[test]
fn test_descriptor_debug_shows_scope_id() {
    let scope = EmptyScope;
    let rendered = format!("{:?}", InterfaceDescriptor::of::<dyn Greeter>(&scope));
    assert!(rendered.contains("org.example.Greeter"));
    assert!(rendered.contains("empty"));
}

#[test]
fn test_services_path_convention() {
    assert_eq!(SERVICES_RESOURCE_PREFIX, "META-INF/services/");
    assert_eq!(
        services_resource_path(<dyn Greeter>::NAME),
        "META-INF/services/org.example.Greeter"
    );
}
