//! Draft store port
//!
//! Defines the interface for caching unsent form field values.

/// Key-value storage for form drafts
///
/// Semantics follow browser local storage: string keys, string values,
/// writes are immediately durable and removing a missing key is a no-op.
#[cfg_attr(test, mockall::automock)]
pub trait DraftStore: Send + Sync {
    /// Read a cached value
    fn load(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Cache a value, replacing any previous one
    fn save(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Drop a cached value
    fn remove(&self, key: &str) -> anyhow::Result<()>;

    /// All cached entries, sorted by key
    fn entries(&self) -> anyhow::Result<Vec<(String, String)>>;
}
