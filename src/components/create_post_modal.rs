use dioxus::prelude::*;

use crate::components::icons::{ImageIcon, SendIcon, XIcon};
use crate::components::SmartImage;
use crate::services::posts::{PostType, POST_MAX_CHARS};
use crate::stores::post_form::PostFormData;
use crate::utils::browser::{blocking_alert, clear_file_input, read_selected_image, selected_file_info};
use crate::utils::image::{format_megabytes, validate_image, ALLOWED_IMAGE_TYPES};
use crate::utils::object_url::BrowserPreviewUrls;

#[derive(Props, Clone, PartialEq)]
pub struct CreatePostModalProps {
    /// Form state, owned by the page so it survives closing the modal
    pub form: Signal<PostFormData>,
    pub cities: Vec<String>,
    pub is_submitting: bool,
    pub on_close: EventHandler<()>,
    pub on_submit: EventHandler<()>,
}

/// Compose dialog: content, post type, city and an optional image
#[component]
pub fn CreatePostModal(props: CreatePostModalProps) -> Element {
    let mut form = props.form;
    let on_close = props.on_close;
    let on_submit = props.on_submit;
    let is_submitting = props.is_submitting;
    let input_id = use_signal(|| format!("post-image-{}", uuid::Uuid::new_v4()));

    let handle_file_change = move |_: FormEvent| {
        let id = input_id.read().clone();

        spawn(async move {
            let (_, mime_type, size) = match selected_file_info(&id) {
                Ok(Some(info)) => info,
                Ok(None) => return,
                Err(e) => {
                    log::error!("Failed to inspect selected file: {}", e);
                    return;
                }
            };

            // Reject before reading the file into memory
            if let Err(rejection) = validate_image(&mime_type, size) {
                blocking_alert(&rejection.to_string());
                clear_file_input(&id);
                return;
            }

            match read_selected_image(&id).await {
                Ok(image) => {
                    if let Err(rejection) = form.write().select_image(image, &mut BrowserPreviewUrls) {
                        blocking_alert(&rejection.to_string());
                    }
                }
                Err(e) => log::error!("Failed to read image: {}", e),
            }
            clear_file_input(&id);
        });
    };

    let data = form.read().clone();
    let char_count = data.char_count();
    let can_submit = data.can_submit(is_submitting);
    let accept = ALLOWED_IMAGE_TYPES.join(",");

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
            onclick: move |_| {
                if !is_submitting {
                    on_close.call(());
                }
            },

            div {
                class: "bg-white rounded-xl max-w-lg w-full max-h-[90vh] overflow-y-auto shadow-xl",
                role: "dialog",
                aria_modal: "true",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "flex items-center justify-between px-6 py-4 border-b border-gray-100",
                    h2 { class: "text-lg font-semibold text-gray-900", "Create Post" }
                    button {
                        class: "p-1 text-gray-500 hover:text-gray-900 disabled:opacity-50",
                        disabled: is_submitting,
                        onclick: move |_| on_close.call(()),
                        XIcon { class: "w-5 h-5" }
                    }
                }

                form {
                    class: "p-6 space-y-4",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        on_submit.call(());
                    },

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Post Type" }
                        select {
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            value: "{data.post_type.as_str()}",
                            onchange: move |evt| {
                                if let Some(post_type) = PostType::from_str(&evt.value()) {
                                    form.write().post_type = post_type;
                                }
                            },
                            for post_type in PostType::ALL {
                                option {
                                    key: "{post_type.as_str()}",
                                    value: "{post_type.as_str()}",
                                    selected: post_type == data.post_type,
                                    "{post_type.label()}"
                                }
                            }
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "City" }
                        select {
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            value: "{data.city}",
                            onchange: move |evt| form.write().city = evt.value(),
                            for city in props.cities.iter() {
                                option {
                                    key: "{city}",
                                    value: "{city}",
                                    selected: *city == data.city,
                                    "{city}"
                                }
                            }
                        }
                    }

                    div {
                        textarea {
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg resize-none focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            rows: "5",
                            placeholder: "What's happening in your neighborhood?",
                            maxlength: "{POST_MAX_CHARS}",
                            value: "{data.content}",
                            oninput: move |evt| form.write().set_content(&evt.value()),
                        }
                        div {
                            class: "text-right text-xs text-gray-500 mt-1",
                            "{char_count}/{POST_MAX_CHARS}"
                        }
                    }

                    // Image picker / preview
                    if let Some(preview) = data.image_preview.clone() {
                        div {
                            class: "relative",
                            SmartImage {
                                src: preview,
                                alt: "Preview".to_string(),
                                container_class: "relative h-48 w-full".to_string(),
                            }
                            button {
                                r#type: "button",
                                class: "absolute top-2 right-2 p-1 bg-black/60 text-white rounded-full hover:bg-black/80",
                                onclick: move |_| form.write().remove_image(&mut BrowserPreviewUrls),
                                XIcon { class: "w-4 h-4" }
                            }
                            if let Some(image) = data.image.as_ref() {
                                p {
                                    class: "text-xs text-gray-500 mt-1",
                                    "{image.name} ({format_megabytes(image.size())} MB)"
                                }
                            }
                        }
                    } else {
                        label {
                            r#for: "{input_id}",
                            class: "flex items-center justify-center gap-2 w-full px-4 py-6 border-2 border-dashed border-gray-300 rounded-lg text-gray-500 cursor-pointer hover:border-indigo-400 hover:text-indigo-600 transition",
                            ImageIcon { class: "w-5 h-5" }
                            span { "Add an image (max 5MB)" }
                        }
                    }
                    input {
                        id: "{input_id}",
                        r#type: "file",
                        accept: "{accept}",
                        class: "hidden",
                        onchange: handle_file_change,
                    }

                    div {
                        class: "flex gap-3 justify-end pt-2",
                        button {
                            r#type: "button",
                            class: "px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100 transition disabled:opacity-50",
                            disabled: is_submitting,
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "flex items-center gap-2 px-4 py-2 bg-indigo-600 text-white rounded-lg font-medium hover:bg-indigo-700 transition disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: !can_submit,
                            SendIcon { class: "w-4 h-4" }
                            if is_submitting { "Posting..." } else { "Post" }
                        }
                    }
                }
            }
        }
    }
}
