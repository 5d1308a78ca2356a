use crate::utils::image::SelectedImage;

/// Issues and releases browser-local preview URLs for selected images.
///
/// Every URL handed out by `create` must eventually be passed to `revoke`,
/// otherwise the browser keeps the underlying blob alive.
pub trait PreviewUrls {
    fn create(&mut self, image: &SelectedImage) -> Option<String>;
    fn revoke(&mut self, url: &str);
}

/// `URL.createObjectURL` / `URL.revokeObjectURL` backed previews
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPreviewUrls;

impl PreviewUrls for BrowserPreviewUrls {
    fn create(&mut self, image: &SelectedImage) -> Option<String> {
        create_object_url(&image.data, &image.mime_type)
    }

    fn revoke(&mut self, url: &str) {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            log::warn!("Failed to revoke object URL {}: {:?}", url, e);
        }
    }
}

/// Create an Object URL from raw bytes (more memory efficient than base64 for large files)
fn create_object_url(data: &[u8], mime_type: &str) -> Option<String> {
    let blob = crate::utils::browser::bytes_to_blob(data, mime_type).ok()?;
    web_sys::Url::create_object_url_with_blob(&blob).ok()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records every URL issued and revoked
    #[derive(Default, Debug)]
    pub struct RecordingUrls {
        pub next_id: usize,
        pub issued: Vec<String>,
        pub revoked: Vec<String>,
    }

    impl RecordingUrls {
        /// URLs handed out and not yet released
        pub fn live(&self) -> Vec<String> {
            self.issued
                .iter()
                .filter(|url| !self.revoked.contains(url))
                .cloned()
                .collect()
        }
    }

    impl PreviewUrls for RecordingUrls {
        fn create(&mut self, image: &SelectedImage) -> Option<String> {
            self.next_id += 1;
            let url = format!("blob:test/{}-{}", self.next_id, image.name);
            self.issued.push(url.clone());
            Some(url)
        }

        fn revoke(&mut self, url: &str) {
            self.revoked.push(url.to_string());
        }
    }
}
