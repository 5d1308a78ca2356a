use dioxus::prelude::*;

use crate::components::icons::ImageIcon;
use crate::context::use_app_context;
use crate::utils::image::{is_image_source_allowed, is_local_url, responsive_srcset};

#[derive(Clone, Copy, Debug, PartialEq)]
enum ImageStatus {
    Loading,
    Loaded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ImageEvent {
    /// New source; `allowed` is the host allow-list verdict for it
    SrcChanged { allowed: bool },
    Loaded,
    Errored,
}

fn next_status(prev: ImageStatus, event: ImageEvent) -> ImageStatus {
    match event {
        ImageEvent::SrcChanged { allowed: true } => ImageStatus::Loading,
        ImageEvent::SrcChanged { allowed: false } => ImageStatus::Failed,
        // A late load event can't revive a source that already failed
        ImageEvent::Loaded => match prev {
            ImageStatus::Failed => ImageStatus::Failed,
            _ => ImageStatus::Loaded,
        },
        ImageEvent::Errored => ImageStatus::Failed,
    }
}

/// Image with a spinner while loading and a fallback panel on error.
///
/// Handles both remote URLs and local blob/data previews. Remote hosts
/// outside the configured allow-list go straight to the fallback.
#[component]
pub fn SmartImage(
    src: String,
    alt: String,
    #[props(default)] class: String,
    #[props(default = "relative h-64 w-full".to_string())] container_class: String,
) -> Element {
    let ctx = use_app_context();
    let patterns = ctx.config().remote_image_patterns.clone();
    let mut status = use_signal(|| {
        let allowed = is_image_source_allowed(&src, &patterns);
        next_status(ImageStatus::Loading, ImageEvent::SrcChanged { allowed })
    });

    // Reset whenever the source changes
    use_effect(use_reactive(&src, move |src| {
        let allowed = is_image_source_allowed(&src, &patterns);
        let prev = *status.peek();
        status.set(next_status(prev, ImageEvent::SrcChanged { allowed }));
    }));

    let mut apply = move |event: ImageEvent| {
        let prev = *status.peek();
        status.set(next_status(prev, event));
    };

    if status() == ImageStatus::Failed {
        return rsx! {
            div {
                class: "{container_class} bg-gray-100 border-2 border-dashed border-gray-300 rounded-lg flex items-center justify-center",
                div {
                    class: "text-center text-gray-500",
                    ImageIcon { class: "w-12 h-12 mx-auto mb-2 opacity-50" }
                    p { class: "text-sm", "Image not available" }
                }
            }
        };
    }

    let is_loading = status() == ImageStatus::Loading;
    let opacity = if is_loading { "opacity-0" } else { "opacity-100" };
    let img_class = format!("{class} absolute inset-0 w-full h-full object-contain transition-opacity duration-300 {opacity}");
    let config = ctx.config();
    let srcset = responsive_srcset(&src, &config.srcset_widths(), &config.image_formats);

    rsx! {
        div {
            class: "{container_class} bg-gray-100 rounded-lg overflow-hidden",

            if is_loading {
                div {
                    class: "absolute inset-0 flex items-center justify-center bg-gray-100",
                    div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600" }
                }
            }

            // Local previews are shown as-is
            if is_local_url(&src) {
                img {
                    src: "{src}",
                    alt: "{alt}",
                    class: "{img_class}",
                    onload: move |_| apply(ImageEvent::Loaded),
                    onerror: move |_| apply(ImageEvent::Errored),
                }
            } else {
                img {
                    src: "{src}",
                    alt: "{alt}",
                    class: "{img_class}",
                    srcset: srcset,
                    sizes: "{config.image_sizes_attr}",
                    loading: "lazy",
                    decoding: "async",
                    onload: move |_| apply(ImageEvent::Loaded),
                    onerror: move |_| {
                        log::warn!("Image failed to load");
                        apply(ImageEvent::Errored);
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::app_config::AppConfig;

    #[test]
    fn test_new_source_resets_to_loading() {
        let changed = ImageEvent::SrcChanged { allowed: true };

        assert_eq!(next_status(ImageStatus::Failed, changed), ImageStatus::Loading);
        assert_eq!(next_status(ImageStatus::Loaded, changed), ImageStatus::Loading);
        assert_eq!(next_status(ImageStatus::Loading, changed), ImageStatus::Loading);
    }

    #[test]
    fn test_load_error_shows_fallback() {
        assert_eq!(next_status(ImageStatus::Loading, ImageEvent::Errored), ImageStatus::Failed);
        assert_eq!(next_status(ImageStatus::Loaded, ImageEvent::Errored), ImageStatus::Failed);
    }

    #[test]
    fn test_load_completes() {
        assert_eq!(next_status(ImageStatus::Loading, ImageEvent::Loaded), ImageStatus::Loaded);
        assert_eq!(next_status(ImageStatus::Failed, ImageEvent::Loaded), ImageStatus::Failed);
    }

    #[test]
    fn test_host_outside_allow_list_shows_fallback() {
        let patterns = AppConfig::default().remote_image_patterns;
        let start = |src: &str| {
            let allowed = is_image_source_allowed(src, &patterns);
            next_status(ImageStatus::Loading, ImageEvent::SrcChanged { allowed })
        };

        assert_eq!(start("https://evil.example.org/cat.png"), ImageStatus::Failed);
        assert_eq!(start("https://res.cloudinary.com/demo/image/upload/a.jpg"), ImageStatus::Loading);
        assert_eq!(start("blob:http://localhost:8080/1234"), ImageStatus::Loading);
    }
}
