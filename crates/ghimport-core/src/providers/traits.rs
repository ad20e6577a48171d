//! Import provider trait definition

use std::collections::HashMap;

use serde_json::Value;

use crate::config::NormalizedConfig;
use crate::services::ServiceGenerator;

use super::error::ProviderResult;

/// Relations between resource groups: service -> related service -> fields
pub type ResourceConnections = HashMap<String, HashMap<String, Vec<String>>>;

/// Contract every import backend exposes to the surrounding tool
///
/// The expected call order is `init`, then any number of `get_config` and
/// `init_service` calls. Each `init_service` replaces the bound generator.
pub trait ImportProvider: Send + Sync {
    /// Provider name (e.g. "github")
    fn name(&self) -> &str;

    /// Resolve credentials from positional arguments and the environment
    fn init(&mut self, args: &[String]) -> ProviderResult<()>;

    /// Normalized provider configuration for the active auth mode
    fn get_config(&self) -> ProviderResult<NormalizedConfig>;

    /// Bind a fresh generator for `service`
    fn init_service(&mut self, service: &str, verbose: bool) -> ProviderResult<()>;

    /// Names of every supported service
    fn supported_services(&self) -> Vec<&'static str>;

    /// Provider block for the generated configuration
    fn provider_data(&self) -> Value;

    /// Cross-service relations
    fn resource_connections(&self) -> ResourceConnections {
        ResourceConnections::new()
    }

    /// The generator bound by the last successful `init_service`
    fn service(&self) -> Option<&dyn ServiceGenerator>;
}
