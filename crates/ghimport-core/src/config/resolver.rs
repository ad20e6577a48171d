//! Credential resolution from positional arguments and environment values
//!
//! Precedence, applied in this order:
//! 1. App ID and installation ID come from the environment and must be integers
//! 2. The PEM key comes from the environment with escaped `\n` turned into line breaks
//! 3. `args[0]` is the owner
//! 4. `args[1]` is the token; without it the token variable is required
//! 5. `args[2]` is the base URL; an empty third argument means the default host

use crate::env::EnvSource;

use super::credentials::Credentials;
use super::error::{ConfigError, ConfigResult};
use super::settings::ResolverSettings;

/// Turns `[owner, token?, base_url?]` plus environment values into [`Credentials`]
///
/// Resolution is a pure function of the arguments and the [`EnvSource`]; it
/// either returns complete credentials or fails without side effects.
///
/// # Example
///
/// ```
/// use ghimport_core::config::ConfigResolver;
/// use ghimport_core::env::MemoryEnvSource;
///
/// let env = MemoryEnvSource::new();
/// let creds = ConfigResolver::new().resolve(&["acme", "tok123"], &env).unwrap();
/// assert_eq!(creds.owner, "acme");
/// assert_eq!(creds.base_url, "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    settings: ResolverSettings,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ResolverSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Resolve credentials
    pub fn resolve<S: AsRef<str>>(&self, args: &[S], env: &dyn EnvSource) -> ConfigResult<Credentials> {
        let keys = &self.settings.env;

        let app_id = read_int(env, &keys.app_id)?;
        let installation_id = read_int(env, &keys.installation_id)?;
        let pem = env
            .get(&keys.pem_file)
            .map(|pem| unescape_newlines(&pem))
            .unwrap_or_default();

        let owner = match args.first().map(|arg| arg.as_ref()) {
            Some(owner) if !owner.is_empty() => owner.to_string(),
            _ => return Err(ConfigError::MissingOwner),
        };

        let token = match args.get(1) {
            Some(token) => token.as_ref().to_string(),
            None => match env.get(&keys.token) {
                Some(token) if !token.is_empty() => token,
                _ => return Err(ConfigError::token_required(&keys.token)),
            },
        };

        // Only an explicit third argument gets the default host.
        let base_url = match args.get(2).map(|arg| arg.as_ref()) {
            Some("") => self.settings.default_base_url.clone(),
            Some(url) => url.to_string(),
            None => String::new(),
        };

        Ok(Credentials {
            owner,
            token,
            base_url,
            app_id,
            installation_id,
            pem,
        })
    }
}

/// Read an optional integer variable; absent means `0`
fn read_int(env: &dyn EnvSource, variable: &str) -> ConfigResult<i64> {
    match env.get(variable) {
        Some(value) => value
            .parse::<i64>()
            .map_err(|source| ConfigError::invalid_number(variable, value.as_str(), source)),
        None => Ok(0),
    }
}

/// Shells export multi-line keys with literal `\n` sequences
fn unescape_newlines(pem: &str) -> String {
    pem.replace("\\n", "\n")
}
