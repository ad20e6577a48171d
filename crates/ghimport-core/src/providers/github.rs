//! GitHub import provider

use std::sync::Arc;

use serde_json::{json, Map, Value};

use crate::config::{emit_config, ConfigResolver, Credentials, NormalizedConfig, ResolverSettings};
use crate::env::{EnvSource, ProcessEnvSource};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::services::{list_supported, lookup_service, ServiceArgs, ServiceGenerator};
use crate::{log_debug, log_info, log_warn};

use super::error::{ProviderError, ProviderResult};
use super::traits::ImportProvider;

/// Name this provider registers under and injects into generators
pub const PROVIDER_NAME: &str = "github";

/// GitHub provider
///
/// Resolves credentials once in [`init`](ImportProvider::init), emits the
/// provider configuration and binds one service generator at a time.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ghimport_core::env::MemoryEnvSource;
/// use ghimport_core::providers::{GithubProvider, ImportProvider};
///
/// let mut provider = GithubProvider::new()
///     .with_env_source(Arc::new(MemoryEnvSource::new()));
/// provider.init(&["acme".to_string(), "tok123".to_string()]).unwrap();
/// provider.init_service("members", false).unwrap();
/// assert_eq!(provider.service().unwrap().args().owner, "acme");
/// ```
pub struct GithubProvider {
    resolver: ConfigResolver,
    env: Arc<dyn EnvSource>,
    logger: SharedLogger,
    credentials: Option<Credentials>,
    service: Option<Box<dyn ServiceGenerator>>,
}

impl Default for GithubProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GithubProvider {
    /// Create a provider reading the process environment, with logging off
    pub fn new() -> Self {
        Self {
            resolver: ConfigResolver::new(),
            env: Arc::new(ProcessEnvSource::new()),
            logger: Arc::new(NoOpLogger::new()),
            credentials: None,
            service: None,
        }
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Read environment values from `env` instead of the process environment
    pub fn with_env_source(mut self, env: Arc<dyn EnvSource>) -> Self {
        self.env = env;
        self
    }

    pub fn with_settings(mut self, settings: ResolverSettings) -> Self {
        self.resolver = ConfigResolver::with_settings(settings);
        self
    }

    /// Credentials from the last successful `init`
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Take ownership of the bound generator, leaving none bound
    pub fn take_service(&mut self) -> Option<Box<dyn ServiceGenerator>> {
        self.service.take()
    }

    fn require_credentials(&self) -> ProviderResult<&Credentials> {
        self.credentials
            .as_ref()
            .ok_or_else(|| ProviderError::not_initialized(PROVIDER_NAME))
    }
}

impl ImportProvider for GithubProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn init(&mut self, args: &[String]) -> ProviderResult<()> {
        let credentials = match self.resolver.resolve(args, self.env.as_ref()) {
            Ok(credentials) => credentials,
            Err(e) => {
                log_warn!(self.logger, "{}: credential resolution failed: {}", PROVIDER_NAME, e);
                return Err(e.into());
            }
        };

        log_info!(
            self.logger,
            "{}: resolved credentials for owner {} using {} auth",
            PROVIDER_NAME,
            credentials.owner,
            credentials.auth_mode().label()
        );

        // A new init stands in for a new provider; drop generators bound to old credentials.
        self.service = None;
        self.credentials = Some(credentials);
        Ok(())
    }

    fn get_config(&self) -> ProviderResult<NormalizedConfig> {
        Ok(emit_config(self.require_credentials()?))
    }

    fn init_service(&mut self, service: &str, verbose: bool) -> ProviderResult<()> {
        let descriptor = match lookup_service(service) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                log_warn!(self.logger, "{}", e);
                return Err(e);
            }
        };
        let args = ServiceArgs::from(self.require_credentials()?);

        let mut generator = descriptor.create();
        generator.set_name(service);
        generator.set_verbose(verbose);
        generator.set_provider_name(PROVIDER_NAME);
        generator.set_args(args);

        log_debug!(
            self.logger,
            "{}: bound service {} (verbose: {})",
            PROVIDER_NAME,
            descriptor.name,
            verbose
        );
        self.service = Some(generator);
        Ok(())
    }

    fn supported_services(&self) -> Vec<&'static str> {
        list_supported()
    }

    fn provider_data(&self) -> Value {
        let owner = self
            .credentials
            .as_ref()
            .map(|c| c.owner.as_str())
            .unwrap_or_default();
        let mut providers = Map::new();
        providers.insert(PROVIDER_NAME.to_string(), json!({ "owner": owner }));
        json!({ "provider": providers })
    }

    fn service(&self) -> Option<&dyn ServiceGenerator> {
        self.service.as_deref()
    }
}
