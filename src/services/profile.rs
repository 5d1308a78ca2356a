use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::api::{ApiClient, ApiError, HttpMethod, RequestBody};
use crate::utils::validation::ProfileForm;

/// Signed-in user as returned by the profile and auth endpoints
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub posts_count: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl User {
    /// Whether the profile step still needs to be completed
    pub fn needs_profile(&self) -> bool {
        self.first_name.trim().is_empty() || self.last_name.trim().is_empty()
    }
}

/// Body of `PUT /api/profile`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub city: String,
}

impl From<&ProfileForm> for ProfileUpdate {
    fn from(form: &ProfileForm) -> Self {
        Self {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            bio: form.bio.trim().to_string(),
            city: form.city.clone(),
        }
    }
}

#[derive(Deserialize)]
struct UserResponse {
    user: User,
}

impl ApiClient {
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let body = serde_json::to_value(update).map_err(|e| ApiError::Parse(e.to_string()))?;
        let response: UserResponse = self
            .send(HttpMethod::Put, "/api/profile", RequestBody::Json(body))
            .await?;
        Ok(response.user)
    }
}
