pub mod use_feed;
pub mod use_http;

pub use use_feed::use_feed;
pub use use_http::{use_http, UseHttp};
