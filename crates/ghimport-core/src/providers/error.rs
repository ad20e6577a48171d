//! Provider error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur during provider operations
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Service name is not in the registry
    #[error("{provider}: {service} not supported service")]
    NotSupported { provider: String, service: String },

    /// No provider with this name
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    /// Operation needs credentials but `init` has not succeeded
    #[error("{provider}: provider is not initialized")]
    NotInitialized { provider: String },

    /// Credential resolution failed
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ProviderError {
    /// Create a not supported error
    pub fn not_supported(provider: impl Into<String>, service: impl Into<String>) -> Self {
        Self::NotSupported {
            provider: provider.into(),
            service: service.into(),
        }
    }

    /// Create a not initialized error
    pub fn not_initialized(provider: impl Into<String>) -> Self {
        Self::NotInitialized {
            provider: provider.into(),
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_supported_message() {
        let err = ProviderError::not_supported("github", "bogus");
        assert_eq!(err.to_string(), "github: bogus not supported service");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err = ProviderError::from(ConfigError::MissingOwner);
        assert_eq!(err.to_string(), ConfigError::MissingOwner.to_string());
        assert!(matches!(err, ProviderError::Config(ConfigError::MissingOwner)));
    }
}
