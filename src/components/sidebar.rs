use dioxus::prelude::*;

use crate::components::icons::{HomeIcon, MapPinIcon, PlusIcon, UserIcon, XIcon};

/// Dashboard section picked in the sidebar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Home,
    Profile,
}

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    pub is_open: bool,
    pub on_close: EventHandler<()>,
    pub active_tab: ActiveTab,
    pub on_select_tab: EventHandler<ActiveTab>,
    pub on_create_post: EventHandler<()>,
    pub user_city: String,
}

/// Left navigation. Fixed on desktop, a slide-in drawer on mobile.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let on_close = props.on_close;
    let on_select_tab = props.on_select_tab;
    let on_create_post = props.on_create_post;

    let drawer_position = if props.is_open { "translate-x-0" } else { "-translate-x-full" };

    rsx! {
        if props.is_open {
            div {
                class: "fixed inset-0 bg-black/40 z-30 lg:hidden",
                onclick: move |_| on_close.call(()),
            }
        }

        aside {
            class: "fixed lg:sticky top-0 left-0 z-40 h-screen w-64 bg-white border-r border-gray-200 flex flex-col transform transition-transform duration-200 lg:translate-x-0 {drawer_position}",

            div {
                class: "flex items-center justify-between px-6 py-5 border-b border-gray-100",
                h1 { class: "text-2xl font-bold text-indigo-600", "Cityscope" }
                button {
                    class: "lg:hidden p-1 text-gray-500 hover:text-gray-900",
                    "aria-label": "Close menu",
                    onclick: move |_| on_close.call(()),
                    XIcon { class: "w-5 h-5" }
                }
            }

            nav {
                class: "flex-1 px-4 py-6 space-y-2",
                NavButton {
                    label: "Home",
                    active: props.active_tab == ActiveTab::Home,
                    onclick: move |_| on_select_tab.call(ActiveTab::Home),
                    HomeIcon { class: "w-5 h-5" }
                }
                NavButton {
                    label: "Profile",
                    active: props.active_tab == ActiveTab::Profile,
                    onclick: move |_| on_select_tab.call(ActiveTab::Profile),
                    UserIcon { class: "w-5 h-5" }
                }

                button {
                    class: "w-full mt-4 flex items-center justify-center gap-2 px-4 py-3 bg-indigo-600 text-white rounded-lg font-medium hover:bg-indigo-700 transition",
                    onclick: move |_| on_create_post.call(()),
                    PlusIcon { class: "w-5 h-5" }
                    "Create Post"
                }
            }

            div {
                class: "px-6 py-4 border-t border-gray-100 flex items-center gap-2 text-sm text-gray-600",
                MapPinIcon { class: "w-4 h-4" }
                span { "{props.user_city}" }
            }
        }
    }
}

#[component]
fn NavButton(label: String, active: bool, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    let class = if active {
        "w-full flex items-center gap-3 px-4 py-3 rounded-lg bg-indigo-50 text-indigo-700 font-medium"
    } else {
        "w-full flex items-center gap-3 px-4 py-3 rounded-lg text-gray-700 hover:bg-gray-100 transition"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |evt| onclick.call(evt),
            {children}
            span { "{label}" }
        }
    }
}
