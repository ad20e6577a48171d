//! Core trait for environment lookups

/// Read-only key/value lookup standing in for the process environment
///
/// A variable that is set to the empty string is still *present*: `get`
/// returns `Some("")`. Callers that need a non-empty value check for it
/// themselves.
///
/// # Example
///
/// ```
/// use ghimport_core::env::{EnvSource, MemoryEnvSource};
///
/// let env = MemoryEnvSource::new();
/// env.set("GITHUB_TOKEN", "ghp_example");
/// assert_eq!(env.get("GITHUB_TOKEN").as_deref(), Some("ghp_example"));
/// ```
pub trait EnvSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Look up a variable
    fn get(&self, key: &str) -> Option<String>;

    /// Check if a variable is present (possibly empty)
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
