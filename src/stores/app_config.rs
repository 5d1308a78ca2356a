//! Static client configuration with optional LocalStorage overrides.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::utils::image::RemotePattern;

const STORAGE_KEY: &str = "cityscope_config";

/// Client configuration. Every field has a compiled-in default, so an
/// override only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for all API paths; empty means same origin
    pub api_base_url: String,
    pub available_cities: Vec<String>,
    /// Home city used until the user's profile says otherwise
    pub default_city: String,
    pub remote_image_patterns: Vec<RemotePattern>,
    /// Formats the image CDN may negotiate
    pub image_formats: Vec<String>,
    /// Viewport breakpoints for full-width images
    pub device_sizes: Vec<u32>,
    /// Widths for images narrower than the viewport
    pub image_sizes: Vec<u32>,
    /// Value for the `sizes` attribute on feed images
    pub image_sizes_attr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            available_cities: ["Ahmedabad", "Mumbai", "Pune", "Surat"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            default_city: "Surat".to_string(),
            remote_image_patterns: vec![
                RemotePattern::new("https", "res.cloudinary.com", ""),
                RemotePattern::new("https", "**.cloudinary.com", ""),
                RemotePattern::new("https", "images.unsplash.com", ""),
                RemotePattern::new("https", "via.placeholder.com", ""),
                RemotePattern::new("http", "localhost", "3000"),
                RemotePattern::new("https", "localhost", "3000"),
            ],
            image_formats: vec!["image/webp".to_string(), "image/avif".to_string()],
            device_sizes: vec![640, 750, 828, 1080, 1200, 1920, 2048, 3840],
            image_sizes: vec![16, 32, 48, 64, 96, 128, 256, 384],
            image_sizes_attr: "(max-width: 768px) 100vw, (max-width: 1200px) 50vw, 33vw".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse an override document on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: AppConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid config: {}", e))?;
        config.validated()
    }

    fn validated(self) -> Result<Self, String> {
        if self.available_cities.is_empty() {
            return Err("Config must list at least one city".to_string());
        }
        if !self.available_cities.contains(&self.default_city) {
            return Err(format!(
                "Default city {} is not one of the available cities",
                self.default_city
            ));
        }
        Ok(self)
    }

    /// Every width offered in a `srcset`, ascending and deduplicated
    pub fn srcset_widths(&self) -> Vec<u32> {
        let mut widths: Vec<u32> = self
            .image_sizes
            .iter()
            .chain(self.device_sizes.iter())
            .copied()
            .collect();
        widths.sort_unstable();
        widths.dedup();
        widths
    }

    /// Load configuration, preferring a stored override
    pub fn load() -> Self {
        match LocalStorage::get::<serde_json::Value>(STORAGE_KEY) {
            Ok(value) => match Self::from_json(&value.to_string()) {
                Ok(config) => {
                    log::info!("Loaded config override from storage");
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring stored config: {}", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_city, "Surat");
        assert_eq!(config.available_cities.len(), 4);
        assert!(config
            .remote_image_patterns
            .iter()
            .any(|p| p.hostname == "**.cloudinary.com"));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "api_base_url": "https://api.cityscope.app" }"#).unwrap();

        assert_eq!(config.api_base_url, "https://api.cityscope.app");
        assert_eq!(config.default_city, "Surat");
        assert_eq!(config.device_sizes, AppConfig::default().device_sizes);
    }

    #[test]
    fn test_srcset_widths_merge_breakpoints() {
        let config = AppConfig::from_json(r#"{ "device_sizes": [1080, 640], "image_sizes": [256, 640] }"#).unwrap();
        assert_eq!(config.srcset_widths(), vec![256, 640, 1080]);

        let defaults = AppConfig::default().srcset_widths();
        assert_eq!(defaults.first(), Some(&16));
        assert_eq!(defaults.last(), Some(&3840));
    }

    #[test]
    fn test_override_rejects_unknown_default_city() {
        let err = AppConfig::from_json(r#"{ "available_cities": ["Pune"], "default_city": "Surat" }"#)
            .unwrap_err();
        assert!(err.contains("Surat"));

        assert!(AppConfig::from_json(r#"{ "available_cities": [] }"#).is_err());
        assert!(AppConfig::from_json("{ nope").is_err());
    }
}
