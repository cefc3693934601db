//! Bootstrap
//!
//! Turns a loaded [`FinderConfig`] into the collaborators a [`Resolver`]
//! borrows: configured properties, system resources, and the application
//! scope.
//!
//! ```ignore
//! let config = ConfigLoader::new().load()?;
//! init_logging(&config.logging)?;
//! let bootstrap = Bootstrap::new(&config);
//!
//! let greeter = bootstrap
//!     .resolver()
//!     .find(&bootstrap.interface::<dyn Greeter>())?
//!     .into_contract::<dyn Greeter>()?;
//! ```

use finder_application::Resolver;
use finder_domain::{Contract, ExecutionContext, InterfaceDescriptor};
use tracing::debug;

use crate::adapters::{ConfiguredProperties, DirectoryResources, RegistryScope};
use crate::config::FinderConfig;

/// Collaborators built from configuration
///
/// Holds no resolved names or instances; every resolver it hands out
/// performs its lookups afresh.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    properties: ConfiguredProperties,
    system_resources: DirectoryResources,
    application: RegistryScope,
    context: ExecutionContext,
}

impl Bootstrap {
    /// Build collaborators from `config`
    pub fn new(config: &FinderConfig) -> Self {
        let system_resources = DirectoryResources::expanded(&config.system_resource_roots);
        let application = RegistryScope::new(DirectoryResources::expanded(&config.resource_roots));

        debug!(
            properties = config.properties.len(),
            system_roots = system_resources.roots().len(),
            application_roots = application.resources().roots().len(),
            "Finder bootstrap created"
        );

        Self {
            properties: ConfiguredProperties::new(config.properties.clone()),
            system_resources,
            application,
            context: ExecutionContext::Ambient,
        }
    }

    /// Run property reads under `context`
    pub fn with_context<C: Into<ExecutionContext>>(mut self, context: C) -> Self {
        self.context = context.into();
        self
    }

    /// Resolver borrowing this bootstrap's collaborators
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.properties)
            .with_system_resources(&self.system_resources)
            .with_context(self.context)
    }

    /// Application scope backed by the global registry
    pub fn application_scope(&self) -> &RegistryScope {
        &self.application
    }

    /// Descriptor of the contract `C` in the application scope
    pub fn interface<C: Contract + ?Sized>(&self) -> InterfaceDescriptor<'_> {
        InterfaceDescriptor::of::<C>(&self.application)
    }
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new(&FinderConfig::default())
    }
}
