//! HTTP client wrapper for the public cloud info service.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ImageError;

/// Default public cloud info service base URL.
pub const DEFAULT_BASE_URL: &str = "https://susepubliccloudinfo.suse.com";

/// HTTP client wrapper for image service requests.
#[derive(Debug, Clone)]
pub struct ImageClient {
    inner: Client,
    base_url: String,
}

impl ImageClient {
    /// Create a new client against the given base URL.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let inner = Client::builder().build()?;
        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new client against the public service.
    pub fn with_default_base_url() -> Result<Self, reqwest::Error> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for a service path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the raw response body of a GET request.
    pub async fn fetch(&self, path: &str) -> Result<Vec<u8>, ImageError> {
        let url = self.url(path);
        debug!(%url, "fetching");

        let response = self.inner.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Http(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Fetch a path and deserialize the body as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ImageError> {
        let body = self.fetch(path).await?;
        debug!(bytes = body.len(), "decoding response");
        serde_json::from_slice(&body).map_err(ImageError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = ImageClient::with_default_base_url().unwrap();
        assert_eq!(client.base_url(), "https://susepubliccloudinfo.suse.com");
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = ImageClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_url_construction() {
        let client = ImageClient::new("http://localhost:8080").unwrap();
        assert_eq!(
            client.url("/v1/google/images.json"),
            "http://localhost:8080/v1/google/images.json"
        );
    }
}
