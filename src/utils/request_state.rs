/// State of a single HTTP round-trip
///
/// Replaces separate `is_loading` / `error` / `data` flags with one enum so a
/// request can't be loading and failed at the same time.
///
/// # Examples
///
/// ```ignore
/// let mut state = use_signal(|| RequestState::Idle);
///
/// state.set(RequestState::InFlight);
/// match api.toggle_like(&post_id).await {
///     Ok(post) => state.set(RequestState::Done(post)),
///     Err(e) => state.set(RequestState::Failed(e.to_string())),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    /// Nothing sent yet (or reset after completion)
    #[default]
    Idle,

    /// Request sent, waiting for the response
    InFlight,

    /// Response received and accepted
    Done(T),

    /// Request failed with a displayable message
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }

    /// Returns the error message if the request failed
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_in_flight_is_loading() {
        assert!(!RequestState::<i32>::default().is_in_flight());
        assert!(RequestState::<i32>::InFlight.is_in_flight());
        assert!(!RequestState::Done(7).is_in_flight());
        assert!(!RequestState::<i32>::Failed("offline".to_string()).is_in_flight());
    }

    #[test]
    fn test_error_only_when_failed() {
        let state: RequestState<i32> = RequestState::Failed("offline".to_string());
        assert_eq!(state.error(), Some("offline"));

        assert_eq!(RequestState::Done(7).error(), None);
        assert_eq!(RequestState::<i32>::InFlight.error(), None);
        assert_eq!(RequestState::<i32>::Idle.error(), None);
    }
}
