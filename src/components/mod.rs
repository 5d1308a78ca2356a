// UI Components
// This module contains all reusable UI components

pub mod client_time_display;
pub mod create_post_modal;
pub mod feed_header;
pub mod feed_states;
pub mod icons;
pub mod mobile_header;
pub mod post_card;
pub mod sidebar;
pub mod smart_image;

pub use client_time_display::ClientTimeDisplay;
pub use create_post_modal::CreatePostModal;
pub use feed_header::FeedHeader;
pub use feed_states::{EmptyState, LoadingState};
pub use mobile_header::MobileHeader;
pub use post_card::PostCard;
pub use sidebar::{ActiveTab, Sidebar};
pub use smart_image::SmartImage;
