use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::services::auth::AuthSession;
use crate::services::profile::User;

/// Signed-in session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    /// The user's city, or `fallback` when the profile has none
    pub fn home_city(&self, fallback: &str) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.city.clone())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Global session state
pub static SESSION: GlobalSignal<SessionState> = Signal::global(SessionState::default);

const STORAGE_KEY_TOKEN: &str = "cityscope_token";
const STORAGE_KEY_USER: &str = "cityscope_user";

/// Restore the session from localStorage
pub fn init_session() {
    let token = LocalStorage::get::<String>(STORAGE_KEY_TOKEN).ok();
    let user = LocalStorage::get::<User>(STORAGE_KEY_USER).ok();

    if token.is_some() {
        log::info!("Restored stored session");
    }

    *SESSION.write() = SessionState { token, user };
}

/// Store a fresh sign-in
pub fn start_session(session: AuthSession) {
    if let Err(e) = LocalStorage::set(STORAGE_KEY_TOKEN, &session.token) {
        log::warn!("Failed to persist token: {}", e);
    }
    persist_user(&session.user);

    *SESSION.write() = SessionState {
        token: Some(session.token),
        user: Some(session.user),
    };
}

/// Replace the stored user after a profile update
pub fn update_user(user: User) {
    persist_user(&user);
    SESSION.write().user = Some(user);
}

fn persist_user(user: &User) {
    if let Err(e) = LocalStorage::set(STORAGE_KEY_USER, user) {
        log::warn!("Failed to persist user: {}", e);
    }
}

/// Current bearer token, read without subscribing
pub fn token() -> Option<String> {
    SESSION.peek().token.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(city: Option<&str>) -> User {
        serde_json::from_value(serde_json::json!({
            "_id": "u1",
            "email": "asha@example.com",
            "firstName": "Asha",
            "lastName": "Patel",
            "city": city,
        }))
        .unwrap()
    }

    #[test]
    fn test_home_city_fallback() {
        let anonymous = SessionState::default();
        assert_eq!(anonymous.home_city("Surat"), "Surat");
        assert!(!anonymous.is_authenticated());

        let session = SessionState {
            token: Some("t".to_string()),
            user: Some(user(Some("Pune"))),
        };
        assert_eq!(session.home_city("Surat"), "Pune");
        assert_eq!(session.user_id(), Some("u1"));

        let no_city = SessionState {
            token: Some("t".to_string()),
            user: Some(user(None)),
        };
        assert_eq!(no_city.home_city("Surat"), "Surat");
    }
}
