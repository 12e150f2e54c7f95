//! Manifest types: which apps to resolve and how the section presenting
//! them is titled.

use serde::{Deserialize, Serialize};

/// One app to resolve, supplied by the caller or decoded from a hosted
/// manifest document.
///
/// `custom_title` and `custom_description` override the store metadata
/// in downstream display; `featured` marks the entry for prominent
/// placement. Neither affects how the app is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRef {
    #[serde(rename = "url")]
    pub store_url: String,
    #[serde(rename = "title", default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    #[serde(
        rename = "description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_description: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl AppRef {
    /// Creates a reference with no overrides and `featured` off.
    #[must_use]
    pub fn new(store_url: &str) -> Self {
        Self {
            store_url: store_url.to_owned(),
            custom_title: None,
            custom_description: None,
            featured: false,
        }
    }
}

fn default_title() -> String {
    "Other Apps".to_string()
}

/// An ordered list of app references plus display metadata for the
/// section that presents them.
///
/// Order is significant: it drives display order downstream, and
/// position 0 fills the featured slot. Every stage of a batch run
/// preserves the relative order of `apps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppManifest {
    pub apps: Vec<AppRef>,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl AppManifest {
    /// Creates a manifest with the default section title and no subtitle.
    #[must_use]
    pub fn new(apps: Vec<AppRef>) -> Self {
        Self {
            apps,
            title: default_title(),
            subtitle: None,
        }
    }

    /// Builds a manifest from bare store URLs with default display
    /// metadata, preserving the given order.
    #[must_use]
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(urls.into_iter().map(|url| AppRef::new(url.as_ref())).collect())
    }

    /// A two-entry sample manifest for demos and tests.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            apps: vec![
                AppRef {
                    store_url: "https://apps.apple.com/us/app/cartoonify-me/id6747951776"
                        .to_string(),
                    custom_title: None,
                    custom_description: None,
                    featured: true,
                },
                AppRef::new("https://apps.apple.com/us/app/instagram/id389801252"),
            ],
            title: "My Other Apps".to_string(),
            subtitle: Some("Check out my other creations!".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_manifest_document() {
        let doc = serde_json::json!({
            "title": "X",
            "subtitle": "A few more things",
            "apps": [
                { "url": "https://x/id1", "title": "One", "featured": true },
                { "url": "https://x/id2" }
            ]
        });

        let manifest: AppManifest = serde_json::from_value(doc).unwrap();
        assert_eq!(manifest.title, "X");
        assert_eq!(manifest.subtitle.as_deref(), Some("A few more things"));
        assert_eq!(manifest.apps.len(), 2);
        assert_eq!(manifest.apps[0].store_url, "https://x/id1");
        assert_eq!(manifest.apps[0].custom_title.as_deref(), Some("One"));
        assert!(manifest.apps[0].featured);
        assert_eq!(manifest.apps[1].store_url, "https://x/id2");
        assert!(!manifest.apps[1].featured);
    }

    #[test]
    fn missing_title_defaults_to_other_apps() {
        let doc = serde_json::json!({ "apps": [{ "url": "https://x/id1" }] });
        let manifest: AppManifest = serde_json::from_value(doc).unwrap();
        assert_eq!(manifest.title, "Other Apps");
        assert!(manifest.subtitle.is_none());
    }

    #[test]
    fn missing_apps_key_fails_to_deserialize() {
        let doc = serde_json::json!({ "title": "X" });
        assert!(serde_json::from_value::<AppManifest>(doc).is_err());
    }

    #[test]
    fn document_order_is_preserved() {
        let doc = serde_json::json!({
            "apps": [
                { "url": "https://x/id3" },
                { "url": "https://x/id1" },
                { "url": "https://x/id2" }
            ]
        });
        let manifest: AppManifest = serde_json::from_value(doc).unwrap();
        let urls: Vec<&str> = manifest
            .apps
            .iter()
            .map(|r| r.store_url.as_str())
            .collect();
        assert_eq!(urls, ["https://x/id3", "https://x/id1", "https://x/id2"]);
    }

    #[test]
    fn from_urls_keeps_order_and_defaults() {
        let manifest =
            AppManifest::from_urls(["https://x/id2", "https://x/id1"]);
        assert_eq!(manifest.title, "Other Apps");
        assert_eq!(manifest.apps.len(), 2);
        assert_eq!(manifest.apps[0].store_url, "https://x/id2");
        assert!(!manifest.apps[0].featured);
    }

    #[test]
    fn sample_manifest_shape() {
        let sample = AppManifest::sample();
        assert_eq!(sample.apps.len(), 2);
        assert_eq!(sample.title, "My Other Apps");
        assert!(sample.subtitle.is_some());
        assert!(sample.apps[0].featured);
        assert!(!sample.apps[1].featured);
    }
}
