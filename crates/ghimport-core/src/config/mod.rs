//! Credential resolution and configuration emission
//!
//! - `ConfigResolver`: merges positional arguments with environment values
//!   into [`Credentials`]
//! - `AuthMode`: which of the two authentication modes a set of credentials selects
//! - `emit_config`: the normalized configuration object for the selected mode
//! - `ResolverSettings`: variable names and defaults, loadable from YAML

mod error;
mod settings;
mod credentials;
mod resolver;
mod emitter;

pub use error::{ConfigError, ConfigResult};
pub use settings::{EnvKeys, ResolverSettings, DEFAULT_BASE_URL};
pub use credentials::{AppAuth, AuthMode, Credentials};
pub use resolver::ConfigResolver;
pub use emitter::{emit_config, NormalizedConfig};
