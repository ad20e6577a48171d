//! Process environment source

use std::env::{self, VarError};

use super::traits::EnvSource;

/// Environment source backed by the process environment
///
/// Values that are not valid unicode come back lossily converted, so a
/// malformed variable still reaches the resolver and fails there.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvSource {
    _private: (),
}

impl ProcessEnvSource {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl EnvSource for ProcessEnvSource {
    fn name(&self) -> &str {
        "process"
    }

    fn get(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
            Err(VarError::NotPresent) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_source_name() {
        assert_eq!(ProcessEnvSource::new().name(), "process");
    }

    #[test]
    fn test_process_source_get() {
        env::set_var("GHIMPORT_TEST_PROCESS_VAR", "value");

        let source = ProcessEnvSource::new();
        assert_eq!(source.get("GHIMPORT_TEST_PROCESS_VAR"), Some("value".to_string()));
        assert!(source.has("GHIMPORT_TEST_PROCESS_VAR"));

        env::remove_var("GHIMPORT_TEST_PROCESS_VAR");
        assert!(!source.has("GHIMPORT_TEST_PROCESS_VAR"));
    }

    #[test]
    fn test_process_source_empty_is_present() {
        env::set_var("GHIMPORT_TEST_EMPTY_VAR", "");

        let source = ProcessEnvSource::new();
        assert_eq!(source.get("GHIMPORT_TEST_EMPTY_VAR"), Some(String::new()));

        env::remove_var("GHIMPORT_TEST_EMPTY_VAR");
    }

    #[cfg(unix)]
    #[test]
    fn test_process_source_non_unicode_is_present() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var("GHIMPORT_TEST_NON_UNICODE_VAR", OsStr::from_bytes(b"1\xff"));

        let source = ProcessEnvSource::new();
        assert_eq!(
            source.get("GHIMPORT_TEST_NON_UNICODE_VAR"),
            Some("1\u{FFFD}".to_string())
        );

        env::remove_var("GHIMPORT_TEST_NON_UNICODE_VAR");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_app_id_fails_resolution() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        use crate::config::{ConfigError, ConfigResolver, EnvKeys, ResolverSettings};

        // Unique variable name so parallel tests never see it.
        let settings = ResolverSettings {
            env: EnvKeys {
                app_id: "GHIMPORT_TEST_BAD_APP_ID".to_string(),
                ..EnvKeys::default()
            },
            ..ResolverSettings::default()
        };
        env::set_var("GHIMPORT_TEST_BAD_APP_ID", OsStr::from_bytes(b"1\xff"));

        let result = ConfigResolver::with_settings(settings)
            .resolve(&["acme", "tok"], &ProcessEnvSource::new());
        env::remove_var("GHIMPORT_TEST_BAD_APP_ID");

        match result {
            Err(ConfigError::InvalidNumber { variable, .. }) => {
                assert_eq!(variable, "GHIMPORT_TEST_BAD_APP_ID")
            }
            other => panic!("expected invalid number, got {:?}", other),
        }
    }
}
