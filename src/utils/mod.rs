// Utility functions
// Helper functions for common operations

pub mod browser;
pub mod image;
pub mod object_url;
pub mod request_state;
pub mod time;
pub mod validation;

pub use request_state::RequestState;
