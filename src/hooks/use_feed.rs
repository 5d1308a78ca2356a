//! use_feed hook - owns the dashboard feed and keeps it in sync with the filters
//!
//! Refetches whenever the post-type filter or the city filter changes. Fetches
//! are never aborted; `FeedState` tickets make sure only the newest response
//! is applied.

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::hooks::{use_http, UseHttp};
use crate::services::posts::{FeedQuery, FilterType, Post};
use crate::stores::feed::FeedState;

/// Return type for the use_feed hook
#[derive(Clone, Copy)]
pub struct UseFeed {
    pub state: Signal<FeedState>,
    pub filter: Signal<FilterType>,
    /// Selected city; empty means the user's own city
    pub city: Signal<String>,
    ctx: Signal<AppContext>,
    like_http: UseHttp<Post>,
    dislike_http: UseHttp<Post>,
}

impl UseFeed {
    pub fn toggle_like(&self, post_id: String) {
        self.toggle(post_id, false);
    }

    pub fn toggle_dislike(&self, post_id: String) {
        self.toggle(post_id, true);
    }

    fn toggle(&self, post_id: String, dislike: bool) {
        let api = self.ctx.read().api();
        let mut state = self.state;
        let http = if dislike { self.dislike_http } else { self.like_http };

        spawn(async move {
            let request = async {
                if dislike {
                    api.toggle_dislike(&post_id).await
                } else {
                    api.toggle_like(&post_id).await
                }
            };

            http.send_request(
                request,
                |post| {
                    if !state.write().replace_post(post) {
                        log::debug!("Post {} left the feed before its reaction landed", post_id);
                    }
                },
                |e| log::error!("Error toggling {}: {}", if dislike { "dislike" } else { "like" }, e),
            )
            .await;
        });
    }

    /// Put a freshly created post at the top of the feed
    pub fn prepend(&self, post: Post) {
        let mut state = self.state;
        state.write().prepend_post(post);
    }

    /// City to show in headings and the empty state
    pub fn display_city(&self) -> String {
        let city = self.city.read().clone();
        if city.is_empty() {
            self.ctx.read().home_city()
        } else {
            city
        }
    }
}

/// Hook for the filtered community feed
pub fn use_feed(ctx: AppContext) -> UseFeed {
    let mut state = use_signal(FeedState::default);
    let filter = use_signal(FilterType::default);
    let city = use_signal(String::new);
    let ctx = use_signal(|| ctx);
    let like_http = use_http::<Post>();
    let dislike_http = use_http::<Post>();

    // Fetch on mount and whenever a filter changes. Session reads in here
    // must not subscribe, or every profile save would refetch.
    use_effect(move || {
        let query = FeedQuery {
            filter: *filter.read(),
            city: city.read().clone(),
            home_city: ctx.peek().home_city_untracked(),
        };
        let api = ctx.peek().api();

        let ticket = state.write().begin_fetch();
        log::info!("Fetching feed: {}", query.path());

        spawn(async move {
            let result = api.fetch_feed(&query).await;
            state.write().finish_fetch(ticket, result);
        });
    });

    UseFeed {
        state,
        filter,
        city,
        ctx,
        like_http,
        dislike_http,
    }
}
