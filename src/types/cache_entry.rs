use serde::{Deserialize, Serialize};

/// A cached upstream response keyed by request URI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub uri: String,
    pub etag: Option<String>,
    pub response: Option<String>,
    /// RFC 3339 timestamp after which the entry is stale.
    pub expiry: Option<String>,
}

impl CacheEntry {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }
}
