//! Feed list state and the rules for merging server responses into it.
//!
//! Every feed fetch takes a ticket from [`FeedState::begin_fetch`]. Only the
//! response carrying the newest ticket is applied, so a slow response for an
//! old filter combination can't overwrite the list for the current one.
//! Like/dislike/create responses replace or insert whole posts; nothing is
//! applied speculatively.

use crate::services::api::ApiError;
use crate::services::posts::Post;

/// Generation number of a feed request
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FeedTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub loading: bool,
    pub error: Option<String>,
    latest: u64,
}

impl FeedState {
    /// Mark a new fetch as the current one
    pub fn begin_fetch(&mut self) -> FeedTicket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        FeedTicket(self.latest)
    }

    /// Whether any fetch has been issued yet
    pub fn has_started(&self) -> bool {
        self.latest > 0
    }

    pub fn is_current(&self, ticket: FeedTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Apply a feed response. Returns false when the response was stale and dropped.
    ///
    /// A failed fetch keeps the previous list on screen.
    pub fn finish_fetch(&mut self, ticket: FeedTicket, result: Result<Vec<Post>, ApiError>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("Dropping stale feed response #{} (latest #{})", ticket.0, self.latest);
            return false;
        }

        self.loading = false;
        match result {
            Ok(posts) => {
                self.posts = posts;
                self.error = None;
            }
            Err(e) => {
                log::error!("Failed to fetch feed: {}", e);
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Swap in the server's copy of a post, keeping its position.
    /// Returns false if the post is no longer listed.
    pub fn replace_post(&mut self, post: Post) -> bool {
        match self.posts.iter_mut().find(|p| p.id == post.id) {
            Some(slot) => {
                *slot = post;
                true
            }
            None => false,
        }
    }

    /// Newly created posts go to the top
    pub fn prepend_post(&mut self, post: Post) {
        self.posts.insert(0, post);
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::posts::fixtures::post;

    fn ids(state: &FeedState) -> Vec<&str> {
        state.posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_fetch_replaces_list() {
        let mut state = FeedState::default();
        assert!(!state.has_started());
        let ticket = state.begin_fetch();
        assert!(state.has_started());
        assert!(state.loading);

        assert!(state.finish_fetch(ticket, Ok(vec![post("a"), post("b")])));
        assert!(!state.loading);
        assert_eq!(ids(&state), vec!["a", "b"]);

        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Ok(vec![post("c")]));
        assert_eq!(ids(&state), vec!["c"]);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = FeedState::default();
        let old = state.begin_fetch();
        let new = state.begin_fetch();

        // Newer filter answers first, the older one arrives late
        assert!(state.finish_fetch(new, Ok(vec![post("mumbai-1")])));
        assert!(!state.finish_fetch(old, Ok(vec![post("surat-1"), post("surat-2")])));

        assert_eq!(ids(&state), vec!["mumbai-1"]);
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_response_does_not_end_loading() {
        let mut state = FeedState::default();
        let old = state.begin_fetch();
        let _new = state.begin_fetch();

        state.finish_fetch(old, Ok(vec![post("x")]));
        assert!(state.loading);
        assert!(state.is_empty());
    }

    #[test]
    fn test_failed_fetch_keeps_posts() {
        let mut state = FeedState::default();
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Ok(vec![post("a")]));

        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Err(ApiError::Network("offline".to_string())));

        assert_eq!(ids(&state), vec!["a"]);
        assert_eq!(state.error.as_deref(), Some("Network error: offline"));
        assert!(!state.loading);
    }

    #[test]
    fn test_replace_post_keeps_position() {
        let mut state = FeedState::default();
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Ok(vec![post("a"), post("b"), post("c")]));
        let before = state.posts.clone();

        let mut updated = post("b");
        updated.likes = vec!["me".to_string()];
        assert!(state.replace_post(updated.clone()));

        assert_eq!(ids(&state), vec!["a", "b", "c"]);
        assert_eq!(state.posts[1], updated);
        assert_eq!(state.posts[0], before[0]);
        assert_eq!(state.posts[2], before[2]);
    }

    #[test]
    fn test_replace_unknown_post_is_ignored() {
        let mut state = FeedState::default();
        state.prepend_post(post("a"));

        assert!(!state.replace_post(post("gone")));
        assert_eq!(ids(&state), vec!["a"]);
    }

    #[test]
    fn test_prepend_post() {
        let mut state = FeedState::default();
        state.prepend_post(post("old"));
        state.prepend_post(post("new"));
        assert_eq!(ids(&state), vec!["new", "old"]);
    }
}
