//! Provider-specific image service endpoints.

use crate::provider::CloudProvider;

pub mod amazon;
pub mod google;
pub mod microsoft;

/// Images endpoint path of `provider`.
pub fn images_path(provider: CloudProvider) -> String {
    format!("/v1/{}/images.json", provider.api_name())
}
