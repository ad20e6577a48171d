//! Configuration error types

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while resolving credentials
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No owner was given as the first positional argument
    #[error("owner is required as the first argument")]
    MissingOwner,

    /// No positional token and nothing usable in the token variable
    #[error("token requirement: pass a token argument or set {variable}")]
    TokenRequired { variable: String },

    /// A numeric environment variable did not parse
    #[error("invalid numeric value {value:?} in {variable}: {source}")]
    InvalidNumber {
        variable: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Resolver settings could not be parsed
    #[error("invalid resolver settings: {0}")]
    Settings(#[from] serde_yaml::Error),
}

impl ConfigError {
    pub fn token_required(variable: impl Into<String>) -> Self {
        Self::TokenRequired {
            variable: variable.into(),
        }
    }

    pub fn invalid_number(
        variable: impl Into<String>,
        value: impl Into<String>,
        source: ParseIntError,
    ) -> Self {
        Self::InvalidNumber {
            variable: variable.into(),
            value: value.into(),
            source,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::MissingOwner.to_string(),
            "owner is required as the first argument"
        );
        assert_eq!(
            ConfigError::token_required("GITHUB_TOKEN").to_string(),
            "token requirement: pass a token argument or set GITHUB_TOKEN"
        );

        let source = "abc".parse::<i64>().unwrap_err();
        let err = ConfigError::invalid_number("GITHUB_APP_ID", "abc", source);
        assert!(err.to_string().starts_with("invalid numeric value \"abc\" in GITHUB_APP_ID"));
    }
}
