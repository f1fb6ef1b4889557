//! Amazon EC2 image and region feeds.

use super::images_path;
use crate::client::ImageClient;
use crate::error::ImageError;
use crate::image::{ImageList, Region, RegionList};
use crate::provider::CloudProvider;

/// EC2 regions endpoint path.
pub const REGIONS_PATH: &str = "/v1/amazon/regions.json";

/// Fetch all EC2 images across all regions.
pub async fn fetch_images(client: &ImageClient) -> Result<ImageList, ImageError> {
    client.fetch_json(&images_path(CloudProvider::Amazon)).await
}

/// Fetch the list of EC2 regions known to the service.
pub async fn fetch_regions(client: &ImageClient) -> Result<Vec<Region>, ImageError> {
    let list: RegionList = client.fetch_json(REGIONS_PATH).await?;
    Ok(list.regions)
}
