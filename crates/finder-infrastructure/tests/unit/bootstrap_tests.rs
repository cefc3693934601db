//! Tests resolving through collaborators built from configuration

use std::fs;
use std::path::Path;

use finder_application::IMPLEMENTATIONS;
use finder_domain::{Contract, Error, ImplementationEntry, PrivilegedContext, erase};
use finder_infrastructure::{Bootstrap, ConfigLoader, FinderConfig};

trait Clock: Send + Sync {
    fn zone(&self) -> &'static str;
}

impl Contract for dyn Clock {
    const NAME: &'static str = "org.fossnova.test.Clock";
}

struct UtcClock;
struct LocalClock;

impl Clock for UtcClock {
    fn zone(&self) -> &'static str {
        "UTC"
    }
}

impl Clock for LocalClock {
    fn zone(&self) -> &'static str {
        "local"
    }
}

#[linkme::distributed_slice(IMPLEMENTATIONS)]
static UTC_CLOCK: ImplementationEntry = ImplementationEntry {
    name: "org.fossnova.test.UtcClock",
    description: "Clock in UTC",
    factory: || Ok(erase::<dyn Clock>(Box::new(UtcClock))),
};

#[linkme::distributed_slice(IMPLEMENTATIONS)]
static LOCAL_CLOCK: ImplementationEntry = ImplementationEntry {
    name: "org.fossnova.test.LocalClock",
    description: "Clock in local time",
    factory: || Ok(erase::<dyn Clock>(Box::new(LocalClock))),
};

fn write_services(root: &Path, interface: &str, content: &str) {
    let dir = root.join("META-INF/services");
    fs::create_dir_all(&dir).expect("create services dir");
    fs::write(dir.join(interface), content).expect("write services file");
}

fn resolve_zone(bootstrap: &Bootstrap) -> Result<&'static str, Error> {
    let clock = bootstrap
        .resolver()
        .find(&bootstrap.interface::<dyn Clock>())?
        .into_contract::<dyn Clock>()?;
    Ok(clock.zone())
}

#[test]
fn test_resource_root_provides_implementation() {
    let root = tempfile::tempdir().expect("temp dir");
    write_services(root.path(), <dyn Clock>::NAME, "  org.fossnova.test.LocalClock \n");
    let config = FinderConfig::default().with_resource_root(root.path());

    let zone = resolve_zone(&Bootstrap::new(&config));

    assert_eq!(zone.ok(), Some("local"));
}

#[test]
fn test_configured_property_wins_over_resource() {
    let root = tempfile::tempdir().expect("temp dir");
    write_services(root.path(), <dyn Clock>::NAME, "org.fossnova.test.LocalClock\n");
    let config = FinderConfig::default()
        .with_resource_root(root.path())
        .with_property(<dyn Clock>::NAME, "org.fossnova.test.UtcClock");

    let zone = resolve_zone(&Bootstrap::new(&config));

    assert_eq!(zone.ok(), Some("UTC"));
}

#[test]
fn test_system_root_consulted_before_application_root() {
    let system = tempfile::tempdir().expect("temp dir");
    let application = tempfile::tempdir().expect("temp dir");
    write_services(system.path(), <dyn Clock>::NAME, "org.fossnova.test.UtcClock\n");
    write_services(application.path(), <dyn Clock>::NAME, "org.fossnova.test.LocalClock\n");
    let config = FinderConfig::default()
        .with_system_resource_root(system.path())
        .with_resource_root(application.path());

    let zone = resolve_zone(&Bootstrap::new(&config));

    assert_eq!(zone.ok(), Some("UTC"));
}

#[test]
fn test_unconfigured_interface_is_not_found() {
    let bootstrap = Bootstrap::default();

    match resolve_zone(&bootstrap) {
        Err(Error::NotFound { interface }) => assert_eq!(interface, <dyn Clock>::NAME),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_fallback_through_bootstrap() {
    let bootstrap = Bootstrap::default().with_context(PrivilegedContext::capture());

    let clock = bootstrap
        .resolver()
        .find_with_fallback(
            &bootstrap.interface::<dyn Clock>(),
            Some("org.fossnova.test.LocalClock"),
        )
        .and_then(|instance| instance.into_contract::<dyn Clock>())
        .expect("fallback clock");

    assert_eq!(clock.zone(), "local");
    assert!(bootstrap.resolver().context().is_privileged());
}

#[test]
fn test_configuration_file_drives_resolution() {
    let dir = tempfile::tempdir().expect("temp dir");
    let resources = dir.path().join("resources");
    write_services(&resources, <dyn Clock>::NAME, "org.fossnova.test.LocalClock\n");
    let config_path = dir.path().join("finder.toml");
    let toml = format!(
        "resource_roots = [{:?}]\n\n[logging]\nlevel = \"warn\"\n",
        resources.display().to_string()
    );
    fs::write(&config_path, toml).expect("write config");

    let config = ConfigLoader::new()
        .with_env_prefix("FINDER_BOOTSTRAP_TEST")
        .with_config_path(&config_path)
        .load()
        .expect("config loads");

    assert_eq!(resolve_zone(&Bootstrap::new(&config)).ok(), Some("local"));
}
