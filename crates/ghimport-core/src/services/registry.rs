//! Fixed service registry
//!
//! Built once from [`ServiceKind::ALL`] and never modified afterwards.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::providers::{ProviderError, ProviderResult, PROVIDER_NAME};

use super::generator::{
    MembersGenerator, OrganizationBlockGenerator, OrganizationGenerator,
    OrganizationProjectGenerator, OrganizationWebhooksGenerator, RepositoriesGenerator,
    ServiceGenerator, TeamsGenerator, UserSshKeyGenerator,
};
use super::kind::ServiceKind;

/// Constructor for a fresh, unbound generator
pub type GeneratorFactory = fn() -> Box<dyn ServiceGenerator>;

/// A registered service
pub struct ServiceDescriptor {
    pub kind: ServiceKind,
    pub name: &'static str,
    pub description: &'static str,
    pub factory: GeneratorFactory,
}

impl ServiceDescriptor {
    fn for_kind(kind: ServiceKind) -> Self {
        Self {
            kind,
            name: kind.as_str(),
            description: kind.description(),
            factory: factory_for(kind),
        }
    }

    /// Build a fresh generator for this service
    pub fn create(&self) -> Box<dyn ServiceGenerator> {
        (self.factory)()
    }
}

impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

fn boxed<G: ServiceGenerator + Default + 'static>() -> Box<dyn ServiceGenerator> {
    Box::new(G::default())
}

fn factory_for(kind: ServiceKind) -> GeneratorFactory {
    match kind {
        ServiceKind::Members => boxed::<MembersGenerator>,
        ServiceKind::Organization => boxed::<OrganizationGenerator>,
        ServiceKind::OrganizationBlocks => boxed::<OrganizationBlockGenerator>,
        ServiceKind::OrganizationProjects => boxed::<OrganizationProjectGenerator>,
        ServiceKind::OrganizationWebhooks => boxed::<OrganizationWebhooksGenerator>,
        ServiceKind::Repositories => boxed::<RepositoriesGenerator>,
        ServiceKind::Teams => boxed::<TeamsGenerator>,
        ServiceKind::UserSshKeys => boxed::<UserSshKeyGenerator>,
    }
}

static REGISTRY: Lazy<BTreeMap<&'static str, ServiceDescriptor>> = Lazy::new(|| {
    ServiceKind::ALL
        .into_iter()
        .map(|kind| (kind.as_str(), ServiceDescriptor::for_kind(kind)))
        .collect()
});

/// Look up a service by name
///
/// Unknown names fail with [`ProviderError::NotSupported`].
pub fn lookup_service(name: &str) -> ProviderResult<&'static ServiceDescriptor> {
    REGISTRY
        .get(name)
        .ok_or_else(|| ProviderError::not_supported(PROVIDER_NAME, name))
}

/// Create a fresh generator by service name
pub fn create_generator(name: &str) -> ProviderResult<Box<dyn ServiceGenerator>> {
    lookup_service(name).map(ServiceDescriptor::create)
}

/// Names of all supported services, sorted
pub fn list_supported() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}

/// All registered services, sorted by name
pub fn service_descriptors() -> impl Iterator<Item = &'static ServiceDescriptor> {
    REGISTRY.values()
}
