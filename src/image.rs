//! Records returned by the image service.

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::filter::NameFilter;

/// Decode a string field, treating `null` like a missing value.
fn nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A published cloud image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub urn: String,
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub state: String,
    #[serde(default, rename = "changeinfo", deserialize_with = "nullable")]
    pub change_info: String,
    #[serde(default, rename = "publishedon", deserialize_with = "nullable")]
    pub published_on: String,
    #[serde(default, rename = "deprecatedon", deserialize_with = "nullable")]
    pub deprecated_on: String,
    #[serde(default, rename = "deletedon", deserialize_with = "nullable")]
    pub deleted_on: String,
    #[serde(default, deserialize_with = "nullable")]
    pub environment: String,
    #[serde(default, deserialize_with = "nullable")]
    pub region: String,
    #[serde(default, deserialize_with = "nullable")]
    pub project: String,
}

impl Image {
    /// Whether the image is scheduled for deprecation or deletion.
    pub fn is_deprecated(&self) -> bool {
        !self.deleted_on.is_empty() || !self.deprecated_on.is_empty()
    }
}

/// Ordered list of images as returned by `/v1/{provider}/images.json`.
///
/// Filtering passes only ever remove entries and keep the relative order
/// of the remaining ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageList {
    #[serde(default)]
    pub images: Vec<Image>,
}

impl ImageList {
    pub fn new(images: Vec<Image>) -> Self {
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Image> {
        self.images.iter()
    }

    /// Keep only images matching `keep`. Returns the number of removed entries.
    fn retain_counted(&mut self, keep: impl FnMut(&Image) -> bool) -> usize {
        let before = self.images.len();
        self.images.retain(keep);
        before - self.images.len()
    }

    /// Remove deprecated and deleted images.
    pub fn drop_deprecated(&mut self) -> usize {
        let removed = self.retain_counted(|image| !image.is_deprecated());
        debug!(removed, "dropped deprecated images");
        removed
    }

    /// Sort ascending by name.
    pub fn sort_by_name(&mut self) {
        self.images.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Apply a comma-separated name filter. Returns the number of removed entries.
    pub fn filter_by_tokens(&mut self, filter: &str) -> usize {
        let filter = NameFilter::parse(filter);
        let removed = self.retain_counted(|image| filter.matches(&image.name));
        debug!(removed, "applied name filter");
        removed
    }

    /// Keep images in exactly `region`. An empty region keeps everything.
    pub fn filter_by_region(&mut self, region: &str) -> usize {
        if region.is_empty() {
            return 0;
        }
        let removed = self.retain_counted(|image| image.region == region);
        debug!(removed, region, "applied region filter");
        removed
    }

    /// Keep images whose name starts with `prefix`.
    pub fn filter_name_prefix(&mut self, prefix: &str) -> usize {
        self.retain_counted(|image| image.name.starts_with(prefix))
    }
}

impl<'a> IntoIterator for &'a ImageList {
    type Item = &'a Image;
    type IntoIter = std::slice::Iter<'a, Image>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

/// A provider region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Region {
    pub name: String,
}

/// Region list as returned by `/v1/amazon/regions.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegionList {
    #[serde(default)]
    pub regions: Vec<Region>,
}

/// An Azure cloud environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str, region: &str) -> Image {
        Image {
            name: name.to_string(),
            region: region.to_string(),
            ..Default::default()
        }
    }

    fn names(list: &ImageList) -> Vec<&str> {
        list.iter().map(|image| image.name.as_str()).collect()
    }

    #[test]
    fn test_decode_image() {
        let json = r#"{
            "name": "suse-sles-15-sp5-v20240101",
            "project": "suse-cloud",
            "state": "active",
            "deprecatedon": "",
            "deletedon": null,
            "publishedon": "20240101"
        }"#;
        let image: Image = serde_json::from_str(json).unwrap();
        assert_eq!(image.name, "suse-sles-15-sp5-v20240101");
        assert_eq!(image.project, "suse-cloud");
        assert_eq!(image.published_on, "20240101");
        assert_eq!(image.deleted_on, "");
        assert_eq!(image.urn, "");
        assert!(!image.is_deprecated());
    }

    #[test]
    fn test_decode_image_list_without_images() {
        let list: ImageList = serde_json::from_str("{}").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_drop_deprecated() {
        let mut list = ImageList::new(vec![
            Image {
                deprecated_on: "20230101".into(),
                ..image("old", "")
            },
            Image {
                deleted_on: "20230601".into(),
                ..image("gone", "")
            },
            image("current", ""),
        ]);
        assert_eq!(list.drop_deprecated(), 2);
        assert_eq!(names(&list), ["current"]);
        assert!(list.iter().all(|image| !image.is_deprecated()));
    }

    #[test]
    fn test_sort_by_name() {
        let mut list = ImageList::new(vec![image("b", ""), image("c", ""), image("a", "")]);
        list.sort_by_name();
        assert_eq!(names(&list), ["a", "b", "c"]);
    }

    #[test]
    fn test_filter_by_tokens_requires_all() {
        let mut list = ImageList::new(vec![
            image("SLES-15-SP5-sap", ""),
            image("sles-15-sp4", ""),
            image("opensuse-leap-15", ""),
        ]);
        let removed = list.filter_by_tokens("sles, SAP");
        assert_eq!(removed, 2);
        assert_eq!(names(&list), ["SLES-15-SP5-sap"]);
    }

    #[test]
    fn test_filter_by_tokens_empty_keeps_all() {
        let mut list = ImageList::new(vec![image("a", ""), image("b", "")]);
        assert_eq!(list.filter_by_tokens(""), 0);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_filter_by_region() {
        let mut list = ImageList::new(vec![
            image("a", "us-east-1"),
            image("b", "eu-central-1"),
            image("c", "us-east-1"),
        ]);
        assert_eq!(list.filter_by_region(""), 0);
        assert_eq!(list.len(), 3);

        assert_eq!(list.filter_by_region("us-east-1"), 1);
        assert_eq!(names(&list), ["a", "c"]);
    }

    #[test]
    fn test_filter_by_region_is_exact() {
        let mut list = ImageList::new(vec![image("a", "us-east-1"), image("b", "us-east-10")]);
        list.filter_by_region("us-east-1");
        assert_eq!(names(&list), ["a"]);
    }

    #[test]
    fn test_filter_name_prefix() {
        let mut list = ImageList::new(vec![
            image("suse-sles-15", ""),
            image("SUSE-sles-12", ""),
            image("other-image", ""),
        ]);
        assert_eq!(list.filter_name_prefix("suse-"), 2);
        assert_eq!(names(&list), ["suse-sles-15"]);
    }

    #[test]
    fn test_decode_regions() {
        let json = r#"{"regions": [{"name": "us-east-1"}, {"name": "eu-west-1"}]}"#;
        let list: RegionList = serde_json::from_str(json).unwrap();
        assert_eq!(list.regions.len(), 2);
        assert_eq!(list.regions[1].name, "eu-west-1");
    }
}
