//! GitHub service catalog
//!
//! Each logical service maps to one generator type. The set is closed:
//! [`ServiceKind`] enumerates it and the registry is built from that enum
//! once, so adding a service means adding a variant and the compiler points
//! at every match that needs a new arm.

mod kind;
mod generator;
mod registry;

pub use kind::ServiceKind;
pub use generator::{
    GeneratorState, ServiceArgs, ServiceGenerator, MembersGenerator, OrganizationBlockGenerator,
    OrganizationGenerator, OrganizationProjectGenerator, OrganizationWebhooksGenerator,
    RepositoriesGenerator, TeamsGenerator, UserSshKeyGenerator,
};
pub use registry::{
    create_generator, list_supported, lookup_service, service_descriptors, GeneratorFactory,
    ServiceDescriptor,
};
