//! Query configuration accumulated from the command line.

/// Environment variable overriding the image service base URL.
pub const BASE_URL_ENV: &str = "SEIDL_BASE_URL";

/// Settings applied to every provider query that follows them.
///
/// Later flags overwrite earlier values. Nothing is reset between
/// providers, so a second provider reuses whatever was last set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryConfig {
    /// Comma-separated name substrings, all of which must match.
    pub filter: String,
    /// Exact region name. Only the Amazon feed is filtered by region.
    pub region: String,
    /// Azure environment. Accepted and stored, not used by queries.
    pub environment: String,
}

impl QueryConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }
}
