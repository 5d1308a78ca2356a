//! Compose form state and the preview URL lifecycle.
//!
//! The form owns at most one preview URL at a time. It is released when a
//! new image replaces it, when the image is removed, and when the form is
//! discarded after submit or cancel.

use crate::services::api::{ApiClient, ApiError};
use crate::services::posts::{NewPost, Post, PostType, POST_MAX_CHARS};
use crate::utils::image::{validate_image, ImageRejection, SelectedImage};
use crate::utils::object_url::PreviewUrls;

#[derive(Clone, Debug, PartialEq)]
pub struct PostFormData {
    pub content: String,
    pub post_type: PostType,
    pub city: String,
    pub image: Option<SelectedImage>,
    pub image_preview: Option<String>,
}

/// Why a submit didn't produce a post
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    EmptyContent,
    Api(ApiError),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SubmitError::EmptyContent => write!(f, "Post content cannot be empty"),
            SubmitError::Api(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SubmitError {}

impl PostFormData {
    pub fn new(home_city: &str) -> Self {
        Self {
            content: String::new(),
            post_type: PostType::default(),
            city: home_city.to_string(),
            image: None,
            image_preview: None,
        }
    }

    /// Update content, cutting input at the character limit
    pub fn set_content(&mut self, value: &str) {
        self.content = value.chars().take(POST_MAX_CHARS).collect();
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    pub fn can_submit(&self, in_flight: bool) -> bool {
        self.has_content() && !in_flight
    }

    /// Attach an image after validating it; a rejected file leaves the form untouched
    pub fn select_image(
        &mut self,
        image: SelectedImage,
        urls: &mut impl PreviewUrls,
    ) -> Result<(), ImageRejection> {
        validate_image(&image.mime_type, image.size())?;

        self.release_preview(urls);
        self.image_preview = urls.create(&image);
        if self.image_preview.is_none() {
            log::warn!("Could not create preview for {}", image.name);
        }
        self.image = Some(image);

        Ok(())
    }

    pub fn remove_image(&mut self, urls: &mut impl PreviewUrls) {
        self.release_preview(urls);
        self.image = None;
    }

    /// Release the preview and reset to a blank form for `home_city`
    pub fn discard(&mut self, urls: &mut impl PreviewUrls, home_city: &str) {
        self.release_preview(urls);
        *self = Self::new(home_city);
    }

    fn release_preview(&mut self, urls: &mut impl PreviewUrls) {
        if let Some(url) = self.image_preview.take() {
            urls.revoke(&url);
        }
    }

    /// Request payload, or `None` when there's nothing to post
    pub fn to_new_post(&self) -> Option<NewPost> {
        if !self.has_content() {
            return None;
        }

        Some(NewPost {
            content: self.content.trim().to_string(),
            post_type: self.post_type,
            city: self.city.clone(),
            image: self.image.clone(),
        })
    }

    /// Send the form; blank content never reaches the network
    pub async fn submit(&self, api: &ApiClient) -> Result<Post, SubmitError> {
        let new_post = self.to_new_post().ok_or(SubmitError::EmptyContent)?;
        api.create_post(new_post).await.map_err(SubmitError::Api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::testing::{client, MockTransport};
    use crate::services::posts::fixtures::post_json;
    use crate::utils::image::MAX_IMAGE_BYTES;
    use crate::utils::object_url::testing::RecordingUrls;
    use futures::executor::block_on;
    use serde_json::json;

    fn image(name: &str, mime_type: &str, size: usize) -> SelectedImage {
        SelectedImage {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            data: vec![0; size],
        }
    }

    #[test]
    fn test_blank_content_sends_nothing() {
        let transport = MockTransport::new();
        let mut form = PostFormData::new("Surat");
        form.set_content("   \n\t ");

        let result = block_on(form.submit(&client(&transport)));

        assert_eq!(result, Err(SubmitError::EmptyContent));
        assert_eq!(transport.request_count(), 0);
        assert!(!form.can_submit(false));
    }

    #[test]
    fn test_submit_trims_content() {
        let transport = MockTransport::new();
        transport.respond(
            201,
            json!({ "success": true, "message": "", "data": { "post": post_json("n1", &[]) } }),
        );
        let mut form = PostFormData::new("Surat");
        form.set_content("  Farmers market on Sunday  ");
        form.post_type = PostType::Event;

        let created = block_on(form.submit(&client(&transport))).unwrap();

        assert_eq!(created.id, "n1");
        assert_eq!(transport.request_count(), 1);
        assert_eq!(form.to_new_post().unwrap().content, "Farmers market on Sunday");
    }

    #[test]
    fn test_submit_failure_keeps_form() {
        let transport = MockTransport::new();
        transport.respond(500, json!({ "success": false, "message": "Upload failed" }));
        let mut form = PostFormData::new("Pune");
        form.set_content("Anyone know a good plumber?");
        let before = form.clone();

        let result = block_on(form.submit(&client(&transport)));

        assert_eq!(
            result,
            Err(SubmitError::Api(ApiError::Rejected("Upload failed".to_string())))
        );
        assert_eq!(form, before);
    }

    #[test]
    fn test_submit_disabled_while_in_flight() {
        let mut form = PostFormData::new("Surat");
        form.set_content("hello");
        assert!(form.can_submit(false));
        assert!(!form.can_submit(true));
    }

    #[test]
    fn test_content_capped() {
        let mut form = PostFormData::new("Surat");
        form.set_content(&"é".repeat(300));
        assert_eq!(form.char_count(), POST_MAX_CHARS);
    }

    #[test]
    fn test_rejected_images_leave_state_unchanged() {
        let mut urls = RecordingUrls::default();
        let mut form = PostFormData::new("Surat");
        form.select_image(image("ok.png", "image/png", 10), &mut urls).unwrap();
        let before = form.clone();

        let too_big = image("huge.jpg", "image/jpeg", MAX_IMAGE_BYTES as usize + 1);
        assert_eq!(
            form.select_image(too_big, &mut urls),
            Err(ImageRejection::TooLarge(MAX_IMAGE_BYTES + 1))
        );
        assert!(form
            .select_image(image("doc.pdf", "application/pdf", 10), &mut urls)
            .is_err());

        assert_eq!(form, before);
        assert_eq!(urls.issued.len(), 1);
        assert!(urls.revoked.is_empty());
    }

    #[test]
    fn test_replacing_image_revokes_previous_preview() {
        let mut urls = RecordingUrls::default();
        let mut form = PostFormData::new("Surat");

        form.select_image(image("a.png", "image/png", 10), &mut urls).unwrap();
        let first = form.image_preview.clone().unwrap();
        form.select_image(image("b.gif", "image/gif", 10), &mut urls).unwrap();

        assert_eq!(urls.revoked, vec![first]);
        assert_eq!(urls.live(), vec![form.image_preview.clone().unwrap()]);
        assert_eq!(form.image.as_ref().unwrap().name, "b.gif");
    }

    #[test]
    fn test_remove_image_releases_preview() {
        let mut urls = RecordingUrls::default();
        let mut form = PostFormData::new("Surat");
        form.select_image(image("a.webp", "image/webp", 10), &mut urls).unwrap();

        form.remove_image(&mut urls);

        assert!(form.image.is_none());
        assert!(form.image_preview.is_none());
        assert!(urls.live().is_empty());
    }

    #[test]
    fn test_discard_resets_and_releases() {
        let mut urls = RecordingUrls::default();
        let mut form = PostFormData::new("Surat");
        form.set_content("draft");
        form.city = "Mumbai".to_string();
        form.post_type = PostType::Help;
        form.select_image(image("a.png", "image/png", 10), &mut urls).unwrap();

        form.discard(&mut urls, "Surat");

        assert_eq!(form, PostFormData::new("Surat"));
        assert!(urls.live().is_empty());
    }
}
