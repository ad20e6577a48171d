//! Chained environment source with fallback behavior

use std::sync::Arc;

use super::traits::EnvSource;

/// Environment source that tries several sources in order
///
/// The first source that has a key wins, even if its value is empty. This
/// lets callers put explicit overrides in front of the process environment.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ghimport_core::env::{ChainEnvSource, EnvSource, MemoryEnvSource, ProcessEnvSource};
///
/// let overrides = Arc::new(MemoryEnvSource::from_pairs([("GITHUB_TOKEN", "override")]));
/// let chain = ChainEnvSource::new(vec![overrides, Arc::new(ProcessEnvSource::new())]);
/// assert_eq!(chain.get("GITHUB_TOKEN").as_deref(), Some("override"));
/// ```
pub struct ChainEnvSource {
    sources: Vec<Arc<dyn EnvSource>>,
}

impl ChainEnvSource {
    /// Create a new chain; sources are tried in order
    pub fn new(sources: Vec<Arc<dyn EnvSource>>) -> Self {
        Self { sources }
    }

    /// Get the sources in this chain
    pub fn sources(&self) -> &[Arc<dyn EnvSource>] {
        &self.sources
    }

    /// Find which source answers for a key
    pub fn find_source(&self, key: &str) -> Option<&Arc<dyn EnvSource>> {
        self.sources.iter().find(|source| source.has(key))
    }
}

impl EnvSource for ChainEnvSource {
    fn name(&self) -> &str {
        "chain"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.sources.iter().find_map(|source| source.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnvSource;

    fn chain() -> ChainEnvSource {
        let first = Arc::new(MemoryEnvSource::from_pairs([("GITHUB_TOKEN", "")]));
        let second = Arc::new(MemoryEnvSource::from_pairs([
            ("GITHUB_TOKEN", "from-second"),
            ("GITHUB_APP_ID", "7"),
        ]));
        ChainEnvSource::new(vec![first, second])
    }

    #[test]
    fn test_chain_first_hit_wins() {
        let chain = chain();
        // Present-but-empty in the first source still shadows the second.
        assert_eq!(chain.get("GITHUB_TOKEN"), Some(String::new()));
        assert_eq!(chain.get("GITHUB_APP_ID"), Some("7".to_string()));
        assert_eq!(chain.get("MISSING"), None);
    }

    #[test]
    fn test_chain_find_source() {
        let chain = chain();
        assert!(chain.find_source("GITHUB_APP_ID").is_some());
        assert!(chain.find_source("MISSING").is_none());
        assert_eq!(chain.sources().len(), 2);
    }

    #[test]
    fn test_empty_chain() {
        let chain = ChainEnvSource::new(vec![]);
        assert_eq!(chain.name(), "chain");
        assert_eq!(chain.get("ANYTHING"), None);
    }
}
