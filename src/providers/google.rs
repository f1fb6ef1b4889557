//! Google Compute Engine image feed.

use super::images_path;
use crate::client::ImageClient;
use crate::error::ImageError;
use crate::image::ImageList;
use crate::provider::CloudProvider;

/// Fetch all GCE images.
pub async fn fetch_images(client: &ImageClient) -> Result<ImageList, ImageError> {
    client.fetch_json(&images_path(CloudProvider::Google)).await
}
