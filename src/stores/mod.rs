// Global state management
// Stores provide shared state across the application

pub mod app_config;
pub mod feed;
pub mod post_form;
pub mod session;
