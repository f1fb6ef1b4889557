//! Cloud provider enumeration and command-line aliases.

use std::fmt;

/// Supported cloud service providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudProvider {
    /// Google Compute Engine
    Google,
    /// Amazon EC2
    Amazon,
    /// Microsoft Azure
    Microsoft,
}

const GOOGLE_ALIASES: &[&str] = &["g", "gce", "gcp", "google"];
const AMAZON_ALIASES: &[&str] = &["a", "aws", "ec2", "amazon"];
const MICROSOFT_ALIASES: &[&str] = &["m", "az", "azure", "microsoft"];

impl CloudProvider {
    /// All providers, in usage order.
    pub const ALL: [CloudProvider; 3] = [
        CloudProvider::Google,
        CloudProvider::Amazon,
        CloudProvider::Microsoft,
    ];

    /// Resolve a command-line token. Matching is case-sensitive.
    pub fn from_alias(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.aliases().contains(&token))
    }

    /// Command-line tokens naming this provider.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CloudProvider::Google => GOOGLE_ALIASES,
            CloudProvider::Amazon => AMAZON_ALIASES,
            CloudProvider::Microsoft => MICROSOFT_ALIASES,
        }
    }

    /// Path segment used by the image service.
    pub fn api_name(&self) -> &'static str {
        match self {
            CloudProvider::Google => "google",
            CloudProvider::Amazon => "amazon",
            CloudProvider::Microsoft => "microsoft",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudProvider::Google => write!(f, "GCE"),
            CloudProvider::Amazon => write!(f, "AWS"),
            CloudProvider::Microsoft => write!(f, "Azure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_display() {
        assert_eq!(CloudProvider::Google.to_string(), "GCE");
        assert_eq!(CloudProvider::Amazon.to_string(), "AWS");
        assert_eq!(CloudProvider::Microsoft.to_string(), "Azure");
    }

    #[test]
    fn test_google_aliases() {
        for alias in ["g", "gce", "gcp", "google"] {
            assert_eq!(CloudProvider::from_alias(alias), Some(CloudProvider::Google));
        }
    }

    #[test]
    fn test_amazon_aliases() {
        for alias in ["a", "aws", "ec2", "amazon"] {
            assert_eq!(CloudProvider::from_alias(alias), Some(CloudProvider::Amazon));
        }
    }

    #[test]
    fn test_microsoft_aliases() {
        for alias in ["m", "az", "azure", "microsoft"] {
            assert_eq!(
                CloudProvider::from_alias(alias),
                Some(CloudProvider::Microsoft)
            );
        }
    }

    #[test]
    fn test_aliases_are_case_sensitive() {
        assert_eq!(CloudProvider::from_alias("GCE"), None);
        assert_eq!(CloudProvider::from_alias("Aws"), None);
        assert_eq!(CloudProvider::from_alias(""), None);
    }

    #[test]
    fn test_api_names() {
        assert_eq!(CloudProvider::Google.api_name(), "google");
        assert_eq!(CloudProvider::Amazon.api_name(), "amazon");
        assert_eq!(CloudProvider::Microsoft.api_name(), "microsoft");
    }
}
