//! Import providers
//!
//! A provider resolves credentials for one backend and binds the service
//! generators that walk it. GitHub is the only backend here.

mod traits;
mod error;
mod github;

pub use traits::{ImportProvider, ResourceConnections};
pub use error::{ProviderError, ProviderResult};
pub use github::{GithubProvider, PROVIDER_NAME};

use crate::logging::SharedLogger;

/// Create a provider by name
pub fn create_provider(provider_id: &str, logger: SharedLogger) -> ProviderResult<Box<dyn ImportProvider>> {
    match provider_id.to_lowercase().as_str() {
        PROVIDER_NAME => Ok(Box::new(GithubProvider::new().with_logger(logger))),
        _ => Err(ProviderError::UnknownProvider(provider_id.to_string())),
    }
}

/// List all supported provider names
pub fn supported_providers() -> Vec<&'static str> {
    vec![PROVIDER_NAME]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use std::sync::Arc;

    #[test]
    fn test_create_github_provider() {
        let provider = create_provider("GitHub", Arc::new(NoOpLogger::new())).unwrap();
        assert_eq!(provider.name(), "github");
    }

    #[test]
    fn test_create_unknown_provider() {
        assert!(matches!(
            create_provider("gitlab", Arc::new(NoOpLogger::new())),
            Err(ProviderError::UnknownProvider(name)) if name == "gitlab"
        ));
    }

    #[test]
    fn test_supported_providers() {
        assert_eq!(supported_providers(), vec!["github"]);
    }
}
