//! ImageCatalog struct and the per-provider query pipeline.

use tracing::{debug, info};

use crate::client::ImageClient;
use crate::config::QueryConfig;
use crate::error::ImageError;
use crate::image::{Environment, ImageList, Region};
use crate::provider::CloudProvider;
use crate::providers::{amazon, google, microsoft};

/// Image catalog of a single cloud provider.
///
/// # Example
///
/// ```ignore
/// use seidl::{CloudProvider, ImageCatalog, ImageError, QueryConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), ImageError> {
///     let catalog = ImageCatalog::for_provider(CloudProvider::Google)?;
///     let config = QueryConfig::default().with_filter("sles,15-sp5");
///     for image in &catalog.query(&config).await? {
///         println!("{}", image.name);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    provider: CloudProvider,
    client: ImageClient,
}

impl ImageCatalog {
    /// Create a catalog sharing an existing client.
    pub fn new(provider: CloudProvider, client: ImageClient) -> Self {
        Self { provider, client }
    }

    /// Create a catalog against the public image service.
    pub fn for_provider(provider: CloudProvider) -> Result<Self, ImageError> {
        Ok(Self::new(provider, ImageClient::with_default_base_url()?))
    }

    /// Create a catalog against a custom base URL.
    ///
    /// This is primarily useful for testing with mock servers.
    pub fn with_base_url(provider: CloudProvider, base_url: &str) -> Result<Self, ImageError> {
        Ok(Self::new(provider, ImageClient::new(base_url)?))
    }

    /// Get the catalog's cloud provider.
    pub fn provider(&self) -> CloudProvider {
        self.provider
    }

    /// Fetch the provider's current images.
    ///
    /// Deprecated and deleted images are dropped and the rest is sorted by name.
    pub async fn fetch_images(&self) -> Result<ImageList, ImageError> {
        let mut images = match self.provider {
            CloudProvider::Google => google::fetch_images(&self.client).await?,
            CloudProvider::Amazon => amazon::fetch_images(&self.client).await?,
            CloudProvider::Microsoft => microsoft::fetch_images(&self.client).await?,
        };
        debug!(provider = %self.provider, count = images.len(), "fetched images");

        images.drop_deprecated();
        images.sort_by_name();
        Ok(images)
    }

    /// Fetch images and run the filter pipeline for this provider.
    ///
    /// The Azure feed is first cut down to product images, then the name
    /// filter applies, then (Amazon only) the region filter.
    ///
    /// # Errors
    ///
    /// If nothing is left, returns `ImageError::NoImages` when the filters
    /// removed nothing and `ImageError::FilterTooRestrictive` otherwise.
    pub async fn query(&self, config: &QueryConfig) -> Result<ImageList, ImageError> {
        info!(provider = %self.provider, filter = %config.filter, "querying images");
        let mut images = self.fetch_images().await?;

        if self.provider == CloudProvider::Microsoft {
            images.filter_name_prefix(microsoft::PRODUCT_PREFIX);
        }

        let mut removed = images.filter_by_tokens(&config.filter);
        if self.provider == CloudProvider::Amazon {
            removed += images.filter_by_region(&config.region);
        }

        if images.is_empty() {
            return Err(if removed == 0 {
                ImageError::NoImages
            } else {
                ImageError::FilterTooRestrictive
            });
        }
        Ok(images)
    }

    /// Fetch the provider's regions.
    ///
    /// This method is only supported on Amazon. On other providers, it returns
    /// `ImageError::NotSupported`.
    pub async fn regions(&self) -> Result<Vec<Region>, ImageError> {
        match self.provider {
            CloudProvider::Amazon => amazon::fetch_regions(&self.client).await,
            _ => Err(ImageError::NotSupported),
        }
    }

    /// List the provider's cloud environments.
    ///
    /// This method is only supported on Microsoft. On other providers, it returns
    /// `ImageError::NotSupported`.
    pub fn environments(&self) -> Result<Vec<Environment>, ImageError> {
        match self.provider {
            CloudProvider::Microsoft => Ok(microsoft::environments()),
            _ => Err(ImageError::NotSupported),
        }
    }
}
