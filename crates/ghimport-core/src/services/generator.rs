//! Generator handles and the arguments injected into them
//!
//! The code that walks the GitHub API lives elsewhere. This module defines
//! the part the provider binds: a name, a verbosity flag, the provider name
//! and the shared argument bag.

use std::fmt;

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::Credentials;

use super::kind::ServiceKind;

/// Shared arguments injected into every generator
///
/// All six fields are always present, whichever auth mode is active. The
/// generator decides which of them it needs.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceArgs {
    pub owner: String,
    pub token: String,
    pub base_url: String,
    pub app_id: i64,
    pub installation_id: i64,
    pub pem: String,
}

impl ServiceArgs {
    /// Argument names, in injection order
    pub const KEYS: [&'static str; 6] = ["owner", "token", "base_url", "app_id", "installation_id", "pem"];

    /// Render as a string-keyed JSON object
    pub fn to_json(&self) -> Value {
        json!({
            "owner": self.owner,
            "token": self.token,
            "base_url": self.base_url,
            "app_id": self.app_id,
            "installation_id": self.installation_id,
            "pem": self.pem,
        })
    }
}

impl From<&Credentials> for ServiceArgs {
    fn from(credentials: &Credentials) -> Self {
        Self {
            owner: credentials.owner.clone(),
            token: credentials.token.clone(),
            base_url: credentials.base_url.clone(),
            app_id: credentials.app_id,
            installation_id: credentials.installation_id,
            pem: credentials.pem.clone(),
        }
    }
}

impl fmt::Debug for ServiceArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceArgs")
            .field("owner", &self.owner)
            .field("token", &(!self.token.is_empty()))
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("installation_id", &self.installation_id)
            .field("pem", &(!self.pem.is_empty()))
            .finish()
    }
}

/// State every generator carries once bound
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorState {
    pub name: String,
    pub verbose: bool,
    pub provider_name: String,
    pub args: ServiceArgs,
}

/// A bound resource generator for one service
///
/// Implementors only provide their kind and access to their
/// [`GeneratorState`]; the setters and accessors come for free.
pub trait ServiceGenerator: Send + Sync + fmt::Debug {
    /// Which service this generator walks
    fn kind(&self) -> ServiceKind;

    fn state(&self) -> &GeneratorState;

    fn state_mut(&mut self) -> &mut GeneratorState;

    fn set_name(&mut self, name: &str) {
        self.state_mut().name = name.to_string();
    }

    fn set_verbose(&mut self, verbose: bool) {
        self.state_mut().verbose = verbose;
    }

    fn set_provider_name(&mut self, provider_name: &str) {
        self.state_mut().provider_name = provider_name.to_string();
    }

    fn set_args(&mut self, args: ServiceArgs) {
        self.state_mut().args = args;
    }

    fn name(&self) -> &str {
        &self.state().name
    }

    fn verbose(&self) -> bool {
        self.state().verbose
    }

    fn provider_name(&self) -> &str {
        &self.state().provider_name
    }

    fn args(&self) -> &ServiceArgs {
        &self.state().args
    }
}

macro_rules! service_generator {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            state: GeneratorState,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl ServiceGenerator for $name {
            fn kind(&self) -> ServiceKind {
                $kind
            }

            fn state(&self) -> &GeneratorState {
                &self.state
            }

            fn state_mut(&mut self) -> &mut GeneratorState {
                &mut self.state
            }
        }
    };
}

service_generator! {
    /// Organization memberships
    MembersGenerator => ServiceKind::Members
}

service_generator! {
    /// Organization settings
    OrganizationGenerator => ServiceKind::Organization
}

service_generator! {
    /// Users blocked by the organization
    OrganizationBlockGenerator => ServiceKind::OrganizationBlocks
}

service_generator! {
    OrganizationProjectGenerator => ServiceKind::OrganizationProjects
}

service_generator! {
    OrganizationWebhooksGenerator => ServiceKind::OrganizationWebhooks
}

service_generator! {
    /// Repositories, including branch protection and collaborators
    RepositoriesGenerator => ServiceKind::Repositories
}

service_generator! {
    TeamsGenerator => ServiceKind::Teams
}

service_generator! {
    /// SSH keys of the authenticated user
    UserSshKeyGenerator => ServiceKind::UserSshKeys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_update_state() {
        let mut generator = TeamsGenerator::new();
        assert_eq!(generator.kind(), ServiceKind::Teams);
        assert_eq!(generator.name(), "");

        generator.set_name("teams");
        generator.set_verbose(true);
        generator.set_provider_name("github");
        generator.set_args(ServiceArgs {
            owner: "acme".to_string(),
            ..Default::default()
        });

        assert_eq!(generator.name(), "teams");
        assert!(generator.verbose());
        assert_eq!(generator.provider_name(), "github");
        assert_eq!(generator.args().owner, "acme");
    }

    #[test]
    fn test_args_from_credentials_carry_every_field() {
        let creds = Credentials::new("acme")
            .with_token("tok")
            .with_base_url("https://ghe.example.com/")
            .with_app(1, 2, "pem");
        let args = ServiceArgs::from(&creds);

        let json = args.to_json();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), ServiceArgs::KEYS.len());
        for key in ServiceArgs::KEYS {
            assert!(object.contains_key(key), "missing {}", key);
        }
        assert_eq!(json["app_id"], 1);
        assert_eq!(json["installation_id"], 2);
        assert_eq!(json["pem"], "pem");
    }

    #[test]
    fn test_args_serde_matches_to_json() {
        let args = ServiceArgs::from(&Credentials::new("acme").with_token("tok"));
        assert_eq!(serde_json::to_value(&args).unwrap(), args.to_json());
    }

    #[test]
    fn test_args_debug_hides_secrets() {
        let args = ServiceArgs::from(&Credentials::new("acme").with_token("tok-secret"));
        assert!(!format!("{:?}", args).contains("tok-secret"));
    }
}
