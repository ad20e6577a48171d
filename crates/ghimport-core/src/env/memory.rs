//! In-memory environment source

use std::collections::HashMap;
use std::sync::RwLock;

use super::traits::EnvSource;

/// Environment source holding variables in memory
///
/// Useful for tests and for callers that collect configuration from
/// somewhere other than the process environment.
///
/// # Example
///
/// ```
/// use ghimport_core::env::{EnvSource, MemoryEnvSource};
///
/// let env = MemoryEnvSource::from_pairs([("GITHUB_APP_ID", "42")]);
/// assert!(env.has("GITHUB_APP_ID"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryEnvSource {
    vars: RwLock<HashMap<String, String>>,
}

impl MemoryEnvSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            vars: RwLock::new(HashMap::new()),
        }
    }

    /// Create a source with initial variables
    pub fn with_vars(initial: HashMap<String, String>) -> Self {
        Self {
            vars: RwLock::new(initial),
        }
    }

    /// Create a source from key/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_vars(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Set a variable
    pub fn set(&self, key: &str, value: &str) {
        let mut vars = self.vars.write().unwrap();
        vars.insert(key.to_string(), value.to_string());
    }

    /// Remove a variable
    pub fn remove(&self, key: &str) {
        let mut vars = self.vars.write().unwrap();
        vars.remove(key);
    }

    pub fn len(&self) -> usize {
        self.vars.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EnvSource for MemoryEnvSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        let vars = self.vars.read().unwrap();
        vars.get(key).cloned()
    }
}

impl Clone for MemoryEnvSource {
    fn clone(&self) -> Self {
        let vars = self.vars.read().unwrap();
        Self {
            vars: RwLock::new(vars.clone()),
        }
    }
}
