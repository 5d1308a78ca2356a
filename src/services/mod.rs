// Backend API
// Typed wrappers over the REST endpoints, all built on `api::ApiClient`

pub mod api;
pub mod auth;
pub mod posts;
pub mod profile;
