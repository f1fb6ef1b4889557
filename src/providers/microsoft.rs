//! Microsoft Azure image feed.

use super::images_path;
use crate::client::ImageClient;
use crate::error::ImageError;
use crate::image::{Environment, ImageList};
use crate::provider::CloudProvider;

/// Only entries with this prefix are product images; the feed carries others too.
pub const PRODUCT_PREFIX: &str = "suse-";

/// Known Azure cloud environments.
const ENVIRONMENTS: &[&str] = &["Blackforest", "Fairfax", "Mooncake", "PublicAzure"];

/// Fetch all Azure images.
pub async fn fetch_images(client: &ImageClient) -> Result<ImageList, ImageError> {
    client.fetch_json(&images_path(CloudProvider::Microsoft)).await
}

/// List the Azure environments. The list is static; nothing is fetched.
pub fn environments() -> Vec<Environment> {
    ENVIRONMENTS
        .iter()
        .map(|name| Environment {
            name: name.to_string(),
        })
        .collect()
}
