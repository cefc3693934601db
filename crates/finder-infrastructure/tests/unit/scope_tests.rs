//! Tests for plugin module scopes
//!
//! A module scope must be fully released once the caller drops it, even
//! after implementations were resolved through it.

use std::sync::Arc;

use finder_application::Resolver;
use finder_domain::{Contract, Error, ImplementationEntry, InterfaceDescriptor, erase};
use finder_infrastructure::{MapPropertyStore, ModuleScope, PolicyPropertyStore};

trait Codec: Send + Sync {
    fn encode(&self, input: &str) -> String;
}

impl Contract for dyn Codec {
    const NAME: &'static str = "org.fossnova.test.Codec";
}

struct UpperCodec;

impl Codec for UpperCodec {
    fn encode(&self, input: &str) -> String {
        input.to_uppercase()
    }
}

const UPPER: ImplementationEntry = ImplementationEntry {
    name: "org.fossnova.plugin.UpperCodec",
    description: "Upper-cases its input",
    factory: || Ok(erase::<dyn Codec>(Box::new(UpperCodec))),
};

fn plugin() -> ModuleScope {
    ModuleScope::new("codec-plugin")
        .with_entry(UPPER)
        .with_services(<dyn Codec>::NAME, "org.fossnova.plugin.UpperCodec\n")
}

#[test]
fn test_module_resource_and_entry_resolve() {
    let module = plugin();
    let properties = MapPropertyStore::new();
    let resolver = Resolver::new(&properties);

    let codec = resolver
        .find(&InterfaceDescriptor::of::<dyn Codec>(&module))
        .and_then(|instance| instance.into_contract::<dyn Codec>())
        .expect("codec");

    assert_eq!(codec.encode("abc"), "ABC");
}

#[test]
fn test_module_released_after_resolution() {
    let module = Arc::new(plugin());
    let weak = Arc::downgrade(&module);
    let properties = MapPropertyStore::new();
    let resolver = Resolver::new(&properties);

    let codec = resolver
        .find(&InterfaceDescriptor::of::<dyn Codec>(&*module))
        .and_then(|instance| instance.into_contract::<dyn Codec>())
        .expect("codec");
    drop(module);

    assert!(weak.upgrade().is_none());
    assert_eq!(codec.encode("still works"), "STILL WORKS");
}

#[test]
fn test_module_does_not_see_global_registry() {
    let module = ModuleScope::new("empty-plugin");
    let properties = MapPropertyStore::new().with_property(<dyn Codec>::NAME, "org.fossnova.test.UtcClock");
    let resolver = Resolver::new(&properties);

    let result = resolver.find(&InterfaceDescriptor::of::<dyn Codec>(&module));

    assert!(matches!(result, Err(Error::ImplementationNotFound { .. })));
}

#[test]
fn test_denied_property_falls_through_to_resource() {
    let module = plugin();
    let inner = MapPropertyStore::new().with_property(<dyn Codec>::NAME, "org.fossnova.plugin.Missing");
    let properties = PolicyPropertyStore::new(inner);
    let resolver = Resolver::new(&properties);

    let instance = resolver
        .find(&InterfaceDescriptor::of::<dyn Codec>(&module))
        .expect("resource provides the name");

    assert_eq!(instance.implementation().as_str(), "org.fossnova.plugin.UpperCodec");
}
