/// Application Context
///
/// Provides centralized access to configuration, the API client and the
/// session, so pages don't thread them through props.
use dioxus::prelude::*;
use std::rc::Rc;

use crate::services::api::{ApiClient, HttpTransport};
use crate::stores::app_config::AppConfig;
use crate::stores::session;

/// Shared handles provided once in `App` and read with `use_app_context()`
///
/// # Example
/// ```ignore
/// let ctx = use_app_context();
///
/// spawn(async move {
///     match ctx.api().toggle_like(&post_id).await {
///         Ok(post) => { /* ... */ }
///         Err(e) => log::error!("Error toggling like: {}", e),
///     }
/// });
/// ```
#[derive(Clone)]
pub struct AppContext {
    config: Rc<AppConfig>,
    transport: Rc<dyn HttpTransport>,
}

impl AppContext {
    pub fn new(config: AppConfig, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            config: Rc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// API client carrying the current session token
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.transport.clone(), self.config.api_base_url.clone())
            .with_token(session::token())
    }

    // ============================================================================
    // Session
    // ============================================================================

    pub fn current_user_id(&self) -> Option<String> {
        session::SESSION.read().user_id().map(str::to_string)
    }

    /// The user's city, falling back to the configured default
    pub fn home_city(&self) -> String {
        session::SESSION.read().home_city(&self.config.default_city)
    }

    /// Same as `home_city` without subscribing the caller to session writes
    pub fn home_city_untracked(&self) -> String {
        session::SESSION.peek().home_city(&self.config.default_city)
    }
}

/// Read the `AppContext` provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}
