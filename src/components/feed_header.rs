use dioxus::prelude::*;

use crate::components::icons::{FilterIcon, MapPinIcon, PlusIcon};
use crate::services::posts::{FilterType, PostType};

#[derive(Props, Clone, PartialEq)]
pub struct FeedHeaderProps {
    /// City shown in the heading
    pub display_city: String,
    /// Selected city filter; empty means the user's own city
    pub selected_city: String,
    pub user_city: String,
    pub cities: Vec<String>,
    pub filter: FilterType,
    pub on_city_change: EventHandler<String>,
    pub on_filter_change: EventHandler<FilterType>,
    pub on_create_post: EventHandler<()>,
}

/// Feed title, city picker and post-type tabs
#[component]
pub fn FeedHeader(props: FeedHeaderProps) -> Element {
    let on_city_change = props.on_city_change;
    let on_filter_change = props.on_filter_change;
    let on_create_post = props.on_create_post;

    let selected = if props.selected_city.is_empty() {
        props.user_city.clone()
    } else {
        props.selected_city.clone()
    };

    let mut tabs = vec![(FilterType::All, "All")];
    tabs.extend(PostType::ALL.iter().map(|t| (FilterType::Only(*t), t.tab_label())));

    rsx! {
        div {
            class: "bg-white border-b border-gray-200 px-4 lg:px-8 py-5",

            div {
                class: "flex items-center justify-between mb-4",
                div {
                    h2 { class: "text-2xl font-bold text-gray-900", "Community Feed" }
                    p {
                        class: "flex items-center gap-1 text-sm text-gray-500 mt-1",
                        MapPinIcon { class: "w-4 h-4" }
                        "Posts from {props.display_city}"
                    }
                }
                button {
                    class: "hidden lg:flex items-center gap-2 px-4 py-2 bg-indigo-600 text-white rounded-lg font-medium hover:bg-indigo-700 transition",
                    onclick: move |_| on_create_post.call(()),
                    PlusIcon { class: "w-4 h-4" }
                    "New Post"
                }
            }

            div {
                class: "flex flex-col sm:flex-row sm:items-center gap-3",

                select {
                    class: "px-3 py-2 border border-gray-300 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                    value: "{selected}",
                    onchange: move |evt| on_city_change.call(evt.value()),
                    for city in props.cities.iter() {
                        option {
                            key: "{city}",
                            value: "{city}",
                            selected: *city == selected,
                            if *city == props.user_city {
                                "{city} (Your city)"
                            } else {
                                "{city}"
                            }
                        }
                    }
                }

                div {
                    class: "flex items-center gap-2 overflow-x-auto",
                    FilterIcon { class: "w-4 h-4 text-gray-400 flex-shrink-0" }
                    for (value, label) in tabs {
                        button {
                            key: "{label}",
                            class: if props.filter == value {
                                "px-3 py-1.5 rounded-full text-sm font-medium whitespace-nowrap bg-indigo-600 text-white"
                            } else {
                                "px-3 py-1.5 rounded-full text-sm font-medium whitespace-nowrap bg-gray-100 text-gray-700 hover:bg-gray-200"
                            },
                            onclick: move |_| on_filter_change.call(value),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
