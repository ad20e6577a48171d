//! ghimport core
//!
//! GitHub backend for the importer: credential resolution and service dispatch.
//! Generators that actually walk the GitHub API, argument parsing and output
//! rendering live outside this crate.
//!
//! ## Flow
//!
//! - `init` resolves [`Credentials`] from `[owner, token?, base_url?]` and an
//!   [`EnvSource`], with the positional token taking precedence over `GITHUB_TOKEN`
//! - `get_config` emits the configuration for the selected [`AuthMode`]
//! - `init_service` binds a fresh generator from the fixed service registry
//!
//! ```rust
//! use std::sync::Arc;
//! use ghimport_core::{GithubProvider, ImportProvider, MemoryEnvSource};
//!
//! let env = MemoryEnvSource::from_pairs([("GITHUB_TOKEN", "tok123")]);
//! let mut provider = GithubProvider::new().with_env_source(Arc::new(env));
//!
//! provider.init(&["acme".to_string()])?;
//! let config = provider.get_config()?;
//! assert_eq!(config.owner(), "acme");
//!
//! provider.init_service("repositories", false)?;
//! # Ok::<(), ghimport_core::ProviderError>(())
//! ```

pub mod env;
pub mod logging;
pub mod config;
pub mod services;
pub mod providers;

// Re-export commonly used types
pub use env::{EnvSource, ProcessEnvSource, MemoryEnvSource, ChainEnvSource};

pub use logging::{Logger, LogLevel, SharedLogger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use config::{
    ConfigResolver, ConfigError, ConfigResult, Credentials, AuthMode, AppAuth,
    NormalizedConfig, ResolverSettings, EnvKeys, emit_config, DEFAULT_BASE_URL,
};

pub use services::{
    ServiceKind, ServiceGenerator, ServiceArgs, ServiceDescriptor,
    list_supported, lookup_service, create_generator,
};

pub use providers::{
    ImportProvider, GithubProvider, ProviderError, ProviderResult, ResourceConnections,
    create_provider, supported_providers, PROVIDER_NAME,
};
