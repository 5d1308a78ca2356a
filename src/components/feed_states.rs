use dioxus::prelude::*;

use crate::components::icons::{MapPinIcon, PlusIcon};

#[component]
pub fn EmptyState(city: String, on_create_post: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-16 text-center",
            div {
                class: "w-16 h-16 rounded-full bg-indigo-50 flex items-center justify-center mb-4",
                MapPinIcon { class: "w-8 h-8 text-indigo-500" }
            }
            h3 { class: "text-lg font-semibold text-gray-900 mb-2", "No posts in {city}" }
            p {
                class: "text-gray-500 mb-6 max-w-sm",
                "Be the first to share something with your neighbors."
            }
            button {
                class: "flex items-center gap-2 px-5 py-2.5 bg-indigo-600 text-white rounded-lg font-medium hover:bg-indigo-700 transition",
                onclick: move |_| on_create_post.call(()),
                PlusIcon { class: "w-4 h-4" }
                "Create First Post"
            }
        }
    }
}

#[component]
pub fn LoadingState(#[props(default = "Loading posts...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-16",
            div { class: "animate-spin rounded-full h-10 w-10 border-b-2 border-indigo-600 mb-4" }
            p { class: "text-gray-500", "{message}" }
        }
    }
}
