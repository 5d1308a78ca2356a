use serde::{Deserialize, Serialize};

use crate::services::api::{ApiClient, ApiError, HttpMethod, RequestBody};
use crate::services::profile::User;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMode {
    SignIn,
    /// The landing page starts on sign-up
    #[default]
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    fn path(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "/api/auth/login",
            AuthMode::SignUp => "/api/auth/signup",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful sign-in / sign-up payload
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub is_new_user: bool,
}

impl ApiClient {
    pub async fn authenticate(&self, mode: AuthMode, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        let body = serde_json::to_value(credentials).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.send(HttpMethod::Post, mode.path(), RequestBody::Json(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::testing::{client, MockTransport};
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_sign_up_returns_session() {
        let transport = MockTransport::new();
        transport.respond(
            201,
            json!({
                "success": true,
                "message": "Account created",
                "data": {
                    "user": { "_id": "u7", "email": "new@example.com", "firstName": "", "lastName": "", "bio": "" },
                    "token": "jwt-token",
                    "isNewUser": true
                }
            }),
        );

        let credentials = Credentials {
            email: "new@example.com".to_string(),
            password: "secret1".to_string(),
        };
        let session = block_on(client(&transport).authenticate(AuthMode::SignUp, &credentials)).unwrap();

        assert!(session.is_new_user);
        assert!(session.user.needs_profile());
        assert_eq!(session.token, "jwt-token");

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://api.test/api/auth/signup");
        assert_eq!(
            request.body,
            RequestBody::Json(json!({ "email": "new@example.com", "password": "secret1" }))
        );
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(AuthMode::default(), AuthMode::SignUp);
        assert_eq!(AuthMode::SignUp.toggled(), AuthMode::SignIn);
        assert_eq!(AuthMode::SignIn.path(), "/api/auth/login");
    }
}
