//! use_http hook - loading/error/data state around a single API call
//!
//! Each call site owns one `UseHttp` so, for example, the like button's
//! in-flight state doesn't disable the compose form.

use dioxus::prelude::*;
use std::fmt::Display;
use std::future::Future;

use crate::utils::RequestState;

/// Return type for the use_http hook
pub struct UseHttp<T: 'static> {
    pub state: Signal<RequestState<T>>,
}

impl<T: 'static> Clone for UseHttp<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for UseHttp<T> {}

impl<T: Clone + 'static> UseHttp<T> {
    pub fn is_loading(&self) -> bool {
        self.state.read().is_in_flight()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error().map(str::to_string)
    }

    /// Run `request`, tracking its state, then hand the outcome to
    /// `on_success` or `on_error`. Returns the data on success.
    pub async fn send_request<E, F, S, X>(&self, request: F, on_success: S, on_error: X) -> Option<T>
    where
        E: Display,
        F: Future<Output = Result<T, E>>,
        S: FnOnce(T),
        X: FnOnce(E),
    {
        let mut state = self.state;
        state.set(RequestState::InFlight);

        match request.await {
            Ok(data) => {
                state.set(RequestState::Done(data.clone()));
                on_success(data.clone());
                Some(data)
            }
            Err(e) => {
                state.set(RequestState::Failed(e.to_string()));
                on_error(e);
                None
            }
        }
    }

    pub fn reset(&self) {
        let mut state = self.state;
        state.set(RequestState::Idle);
    }
}

/// Hook for tracking one kind of request
///
/// # Example
/// ```ignore
/// let like_http = use_http::<Post>();
///
/// spawn(async move {
///     like_http
///         .send_request(
///             api.toggle_like(&post_id),
///             |post| { feed.write().replace_post(post); },
///             |e| log::error!("Error toggling like: {}", e),
///         )
///         .await;
/// });
/// ```
pub fn use_http<T: 'static>() -> UseHttp<T> {
    UseHttp {
        state: use_signal(|| RequestState::Idle),
    }
}
