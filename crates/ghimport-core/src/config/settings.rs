//! Resolver settings

use serde::{Deserialize, Serialize};

use super::error::ConfigResult;

/// Base URL used when the base URL argument is given but empty
pub const DEFAULT_BASE_URL: &str = "https://api.github.com/";

/// Names of the environment variables the resolver reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvKeys {
    pub app_id: String,
    pub installation_id: String,
    pub pem_file: String,
    pub token: String,
}

impl Default for EnvKeys {
    fn default() -> Self {
        Self {
            app_id: "GITHUB_APP_ID".to_string(),
            installation_id: "GITHUB_APP_INSTALLATION_ID".to_string(),
            pem_file: "GITHUB_APP_PEM_FILE".to_string(),
            token: "GITHUB_TOKEN".to_string(),
        }
    }
}

/// Settings for [`ConfigResolver`](super::ConfigResolver)
///
/// Every field is optional in YAML; missing fields keep their defaults.
///
/// ```yaml
/// env:
///   token: GH_ENTERPRISE_TOKEN
/// default_base_url: https://github.example.com/api/v3/
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    pub env: EnvKeys,
    pub default_base_url: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            env: EnvKeys::default(),
            default_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ResolverSettings {
    /// Parse settings from a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Render settings as YAML
    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
