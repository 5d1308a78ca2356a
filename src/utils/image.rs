//! Image selection rules for post uploads and remote image host checks.

use serde::{Deserialize, Serialize};
use url::Url;

/// MIME types accepted for post images
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Largest accepted upload (5 MB)
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// An image file picked by the user, read fully into memory
#[derive(Clone, PartialEq)]
pub struct SelectedImage {
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl SelectedImage {
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

impl std::fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedImage")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.data.len())
            .finish()
    }
}

/// Why a selected file was refused
#[derive(Debug, Clone, PartialEq)]
pub enum ImageRejection {
    UnsupportedType(String),
    TooLarge(u64),
}

impl std::fmt::Display for ImageRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ImageRejection::UnsupportedType(_) => {
                write!(f, "Please select a valid image file (JPEG, PNG, GIF, or WebP)")
            }
            ImageRejection::TooLarge(_) => write!(f, "Please select an image smaller than 5MB"),
        }
    }
}

impl std::error::Error for ImageRejection {}

/// Check a file's MIME type and size against the upload rules
pub fn validate_image(mime_type: &str, size: u64) -> Result<(), ImageRejection> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime_type) {
        return Err(ImageRejection::UnsupportedType(mime_type.to_string()));
    }

    if size > MAX_IMAGE_BYTES {
        return Err(ImageRejection::TooLarge(size));
    }

    Ok(())
}

/// Blob and data URLs point at browser memory and skip host checks
pub fn is_local_url(src: &str) -> bool {
    src.starts_with("blob:") || src.starts_with("data:")
}

/// Size in megabytes with two decimals, e.g. "1.25"
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0 / 1024.0)
}

/// A remote location images may be loaded from.
///
/// `hostname` accepts a leading `**.` to match any subdomain depth and a
/// leading `*.` to match exactly one subdomain label. An empty `port` only
/// matches URLs without an explicit port.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemotePattern {
    pub protocol: String,
    pub hostname: String,
    #[serde(default)]
    pub port: String,
    #[serde(default = "default_pathname")]
    pub pathname: String,
}

fn default_pathname() -> String {
    "/**".to_string()
}

impl RemotePattern {
    pub fn new(protocol: &str, hostname: &str, port: &str) -> Self {
        Self {
            protocol: protocol.to_string(),
            hostname: hostname.to_string(),
            port: port.to_string(),
            pathname: default_pathname(),
        }
    }

    pub fn matches(&self, url: &Url) -> bool {
        if url.scheme() != self.protocol {
            return false;
        }

        let Some(host) = url.host_str() else {
            return false;
        };
        if !hostname_matches(&self.hostname, host) {
            return false;
        }

        let port_ok = if self.port.is_empty() {
            url.port().is_none()
        } else {
            url.port().map(|p| p.to_string()) == Some(self.port.clone())
        };
        if !port_ok {
            return false;
        }

        pathname_matches(&self.pathname, url.path())
    }
}

/// Hostnames compare case-insensitively, wildcard suffixes included
fn hostname_matches(pattern: &str, host: &str) -> bool {
    let pattern = pattern.to_ascii_lowercase();
    let host = host.to_ascii_lowercase();

    if let Some(suffix) = pattern.strip_prefix("**.") {
        return host.len() > suffix.len() + 1 && host.ends_with(&format!(".{}", suffix));
    }

    if let Some(suffix) = pattern.strip_prefix("*.") {
        return match host.strip_suffix(&format!(".{}", suffix)) {
            Some(label) => !label.is_empty() && !label.contains('.'),
            None => false,
        };
    }

    pattern == host
}

fn pathname_matches(pattern: &str, path: &str) -> bool {
    match pattern.strip_suffix("/**") {
        Some(prefix) => path.starts_with(prefix),
        None => pattern == path,
    }
}

/// Whether an image source may be rendered.
///
/// Local previews and same-origin paths are always allowed; absolute URLs
/// must match one of the configured patterns.
pub fn is_image_source_allowed(src: &str, patterns: &[RemotePattern]) -> bool {
    if is_local_url(src) || src.starts_with('/') {
        return true;
    }

    match Url::parse(src) {
        Ok(url) => patterns.iter().any(|p| p.matches(&url)),
        Err(e) => {
            log::warn!("Unparseable image source {}: {}", src, e);
            false
        }
    }
}

/// `srcset` for images served from a CDN that resizes on request.
///
/// Only Cloudinary upload URLs qualify. Each width becomes a `w_<n>,c_limit`
/// transformation, with `f_auto` added when WebP or AVIF is enabled so the
/// CDN can negotiate the format. Anything else renders at natural size.
pub fn responsive_srcset(src: &str, widths: &[u32], formats: &[String]) -> Option<String> {
    if widths.is_empty() {
        return None;
    }

    let url = Url::parse(src).ok()?;
    if url.scheme() != "https" || !hostname_matches("**.cloudinary.com", url.host_str()?) {
        return None;
    }
    let (head, tail) = src.split_once("/image/upload/")?;

    let auto_format = formats
        .iter()
        .any(|f| f == "image/webp" || f == "image/avif");

    let entries: Vec<String> = widths
        .iter()
        .map(|width| {
            let mut transform = format!("w_{},c_limit", width);
            if auto_format {
                transform.push_str(",f_auto");
            }
            format!("{}/image/upload/{}/{} {}w", head, transform, tail, width)
        })
        .collect();

    Some(entries.join(", "))
}
