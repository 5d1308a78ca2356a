use dioxus::prelude::*;

use crate::components::{
    ActiveTab, CreatePostModal, EmptyState, FeedHeader, LoadingState, MobileHeader, PostCard, Sidebar,
};
use crate::context::use_app_context;
use crate::hooks::{use_feed, use_http};
use crate::routes::Route;
use crate::services::posts::{FilterType, Post};
use crate::stores::post_form::{PostFormData, SubmitError};
use crate::utils::browser::blocking_alert;
use crate::utils::object_url::BrowserPreviewUrls;

/// Community feed with filters and the compose modal
#[component]
pub fn Dashboard() -> Element {
    let ctx = use_app_context();
    let navigator = navigator();
    let feed = use_feed(ctx.clone());

    let mut is_modal_open = use_signal(|| false);
    let mut is_sidebar_open = use_signal(|| false);
    let mut active_tab = use_signal(ActiveTab::default);
    let home_city = ctx.home_city();
    let mut post_form = use_signal(|| PostFormData::new(&home_city));
    let create_http = use_http::<Post>();

    let is_submitting = create_http.is_loading();
    let cities = ctx.config().available_cities.clone();
    let current_user_id = ctx.current_user_id();

    let open_modal = move |_: ()| {
        is_modal_open.set(true);
        is_sidebar_open.set(false);
    };

    let close_modal = {
        let ctx = ctx.clone();
        move |_: ()| {
            if create_http.is_loading() {
                return;
            }
            post_form.write().discard(&mut BrowserPreviewUrls, &ctx.home_city());
            is_modal_open.set(false);
        }
    };

    let handle_create_post = {
        let ctx = ctx.clone();
        move |_: ()| {
            let form = post_form.read().clone();
            if !form.can_submit(create_http.is_loading()) {
                return;
            }
            let api = ctx.api();
            let home_city = ctx.home_city();

            spawn(async move {
                create_http
                    .send_request(
                        form.submit(&api),
                        |post| {
                            log::info!("Created post {}", post.id);
                            feed.prepend(post);
                            post_form.write().discard(&mut BrowserPreviewUrls, &home_city);
                            is_modal_open.set(false);
                        },
                        |e| match e {
                            SubmitError::EmptyContent => {}
                            SubmitError::Api(e) => {
                                log::error!("Error creating post: {}", e);
                                blocking_alert(&format!("Failed to create post: {}", e));
                            }
                        },
                    )
                    .await;
            });
        }
    };

    let select_tab = move |tab: ActiveTab| {
        active_tab.set(tab);
        is_sidebar_open.set(false);
        if tab == ActiveTab::Profile {
            navigator.push(Route::ProfileCompletion {});
        }
    };

    let state = feed.state.read();
    let display_city = feed.display_city();

    rsx! {
        div {
            class: "flex min-h-screen",

            Sidebar {
                is_open: is_sidebar_open(),
                on_close: move |_| is_sidebar_open.set(false),
                active_tab: active_tab(),
                on_select_tab: select_tab,
                on_create_post: open_modal,
                user_city: home_city.clone(),
            }

            div {
                class: "flex-1 min-w-0",

                MobileHeader {
                    is_sidebar_open: is_sidebar_open(),
                    on_toggle_sidebar: move |_| is_sidebar_open.set(!is_sidebar_open()),
                    on_create_post: open_modal,
                }

                FeedHeader {
                    display_city: display_city.clone(),
                    selected_city: feed.city.read().clone(),
                    user_city: home_city.clone(),
                    cities: cities.clone(),
                    filter: *feed.filter.read(),
                    on_city_change: move |city: String| {
                        let mut city_filter = feed.city;
                        city_filter.set(city);
                    },
                    on_filter_change: move |filter: FilterType| {
                        let mut type_filter = feed.filter;
                        type_filter.set(filter);
                    },
                    on_create_post: open_modal,
                }

                main {
                    class: "max-w-2xl mx-auto px-4 py-6",

                    if let Some(error) = state.error.clone() {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 rounded-lg p-3 mb-4 text-sm",
                            "{error}"
                        }
                    }

                    if state.loading || !state.has_started() {
                        LoadingState {}
                    } else if state.is_empty() {
                        EmptyState {
                            city: display_city.clone(),
                            on_create_post: open_modal,
                        }
                    } else {
                        div {
                            class: "space-y-4",
                            for post in state.posts.iter() {
                                PostCard {
                                    key: "{post.id}",
                                    post: post.clone(),
                                    current_user_id: current_user_id.clone(),
                                    on_like: move |id: String| feed.toggle_like(id),
                                    on_dislike: move |id: String| feed.toggle_dislike(id),
                                }
                            }
                        }
                    }
                }
            }

            if is_modal_open() {
                CreatePostModal {
                    form: post_form,
                    cities: cities.clone(),
                    is_submitting,
                    on_close: close_modal,
                    on_submit: handle_create_post,
                }
            }
        }
    }
}
