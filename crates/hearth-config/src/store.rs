//! Remote store configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Base URL of the remote store (e.g., `https://abc123.example.co`).
    #[serde(default)]
    pub base_url: String,

    /// Publishable anon key sent with every read.
    #[serde(default)]
    pub anon_key: String,
}

impl StoreConfig {
    /// Whether the live data source can be reached at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.anon_key.is_empty()
    }
}
