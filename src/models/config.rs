//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::DEFAULT_TOP_K;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across the matching run.
pub struct MatcherConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_database_url() -> String {
    "app.db".to_string()
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl MatcherConfig {
    /// Load settings from an optional `matcher.yaml` next to the binary,
    /// overridden by environment variables (`DATABASE_URL`, `TOP_K`).
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("matcher").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}
