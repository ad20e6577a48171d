//! Normalized configuration emission
//!
//! The emitted object is consumed by an external serializer, so the field
//! names (`owner`, `token`, `base_url`, `app_auth`, `id`, `installation_id`,
//! `pem_file`) are part of the contract.

use serde::Serialize;
use serde_json::{json, Value};

use super::credentials::{AppAuth, AuthMode, Credentials};

/// Provider configuration in one of its two shapes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NormalizedConfig {
    /// `{owner, token, base_url}`
    Token {
        owner: String,
        token: String,
        base_url: String,
    },
    /// `{owner, app_auth: [{id, installation_id, pem_file}]}`
    App {
        owner: String,
        app_auth: Vec<AppAuth>,
    },
}

impl NormalizedConfig {
    pub fn owner(&self) -> &str {
        match self {
            NormalizedConfig::Token { owner, .. } | NormalizedConfig::App { owner, .. } => owner,
        }
    }

    pub fn is_app_auth(&self) -> bool {
        matches!(self, NormalizedConfig::App { .. })
    }

    /// Render as a JSON object
    pub fn to_json(&self) -> Value {
        match self {
            NormalizedConfig::Token {
                owner,
                token,
                base_url,
            } => json!({
                "owner": owner,
                "token": token,
                "base_url": base_url,
            }),
            NormalizedConfig::App { owner, app_auth } => {
                let blocks: Vec<Value> = app_auth
                    .iter()
                    .map(|app| {
                        json!({
                            "id": app.id,
                            "installation_id": app.installation_id,
                            "pem_file": app.pem_file,
                        })
                    })
                    .collect();
                json!({
                    "owner": owner,
                    "app_auth": blocks,
                })
            }
        }
    }
}

/// Build the normalized configuration for the credentials' auth mode
pub fn emit_config(credentials: &Credentials) -> NormalizedConfig {
    let owner = credentials.owner.clone();
    match credentials.auth_mode() {
        AuthMode::App(app) => NormalizedConfig::App {
            owner,
            app_auth: vec![app],
        },
        AuthMode::Token { token, base_url } => NormalizedConfig::Token {
            owner,
            token,
            base_url,
        },
    }
}
