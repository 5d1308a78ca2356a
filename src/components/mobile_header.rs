use dioxus::prelude::*;

use crate::components::icons::{MenuIcon, PlusIcon, XIcon};

#[component]
pub fn MobileHeader(
    is_sidebar_open: bool,
    on_toggle_sidebar: EventHandler<()>,
    on_create_post: EventHandler<()>,
) -> Element {
    rsx! {
        header {
            class: "lg:hidden sticky top-0 z-20 bg-white border-b border-gray-200 px-4 py-3 flex items-center justify-between",
            button {
                class: "p-2 text-gray-600 hover:text-gray-900",
                "aria-label": "Toggle menu",
                onclick: move |_| on_toggle_sidebar.call(()),
                if is_sidebar_open {
                    XIcon { class: "w-6 h-6" }
                } else {
                    MenuIcon { class: "w-6 h-6" }
                }
            }
            h1 { class: "text-xl font-bold text-indigo-600", "Cityscope" }
            button {
                class: "p-2 bg-indigo-600 text-white rounded-full hover:bg-indigo-700 transition",
                "aria-label": "Create post",
                onclick: move |_| on_create_post.call(()),
                PlusIcon { class: "w-5 h-5" }
            }
        }
    }
}
