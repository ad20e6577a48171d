//! Resolved credentials and the authentication mode they select

use std::fmt;

use serde::{Deserialize, Serialize};

/// Credentials resolved from positional arguments and the environment
///
/// Numeric app fields use `0` for "not set". Both authentication modes may
/// be populated at once; [`Credentials::auth_mode`] decides which one applies.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub owner: String,
    pub token: String,
    pub base_url: String,
    pub app_id: i64,
    pub installation_id: i64,
    pub pem: String,
}

impl Credentials {
    /// Create credentials for an owner with every other field unset
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Default::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_app(mut self, app_id: i64, installation_id: i64, pem: impl Into<String>) -> Self {
        self.app_id = app_id;
        self.installation_id = installation_id;
        self.pem = pem.into();
        self
    }

    /// Whether every app-auth field is populated
    pub fn has_app_auth(&self) -> bool {
        self.app_id != 0 && self.installation_id != 0 && !self.pem.is_empty()
    }

    /// Select the authentication mode
    ///
    /// App auth wins whenever it is fully configured; everything else falls
    /// back to token auth, even with an empty token.
    pub fn auth_mode(&self) -> AuthMode {
        if self.has_app_auth() {
            AuthMode::App(AppAuth {
                id: self.app_id,
                installation_id: self.installation_id,
                pem_file: self.pem.clone(),
            })
        } else {
            AuthMode::Token {
                token: self.token.clone(),
                base_url: self.base_url.clone(),
            }
        }
    }
}

// token and pem stay out of debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("owner", &self.owner)
            .field("token", &redact(&self.token))
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("installation_id", &self.installation_id)
            .field("pem", &redact(&self.pem))
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

/// GitHub App installation credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppAuth {
    pub id: i64,
    pub installation_id: i64,
    pub pem_file: String,
}

impl fmt::Debug for AppAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppAuth")
            .field("id", &self.id)
            .field("installation_id", &self.installation_id)
            .field("pem_file", &redact(&self.pem_file))
            .finish()
    }
}

/// The authentication mode a set of credentials selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Personal access token, optionally against a custom API host
    Token { token: String, base_url: String },
    /// GitHub App installation
    App(AppAuth),
}

impl AuthMode {
    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            AuthMode::Token { .. } => "token",
            AuthMode::App(_) => "app",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_mode_by_default() {
        let creds = Credentials::new("acme").with_token("tok123");
        assert_eq!(
            creds.auth_mode(),
            AuthMode::Token {
                token: "tok123".to_string(),
                base_url: String::new(),
            }
        );
        assert_eq!(creds.auth_mode().label(), "token");
    }

    #[test]
    fn test_app_mode_wins_over_token() {
        let creds = Credentials::new("acme")
            .with_token("tok123")
            .with_app(1, 2, "x");
        match creds.auth_mode() {
            AuthMode::App(app) => {
                assert_eq!(app.id, 1);
                assert_eq!(app.installation_id, 2);
                assert_eq!(app.pem_file, "x");
            }
            other => panic!("expected app auth, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_app_falls_back_to_token() {
        for creds in [
            Credentials::new("acme").with_app(0, 2, "x"),
            Credentials::new("acme").with_app(1, 0, "x"),
            Credentials::new("acme").with_app(1, 2, ""),
        ] {
            assert!(!creds.has_app_auth());
            assert_eq!(creds.auth_mode().label(), "token");
        }
    }

    #[test]
    fn test_negative_ids_count_as_set() {
        let creds = Credentials::new("acme").with_app(-1, -2, "x");
        assert!(creds.has_app_auth());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("acme")
            .with_token("tok123")
            .with_app(1, 2, "-----BEGIN KEY-----");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("acme"));
        assert!(!debug.contains("tok123"));
        assert!(!debug.contains("BEGIN KEY"));

        let app = format!("{:?}", creds.auth_mode());
        assert!(!app.contains("BEGIN KEY"));
    }
}
