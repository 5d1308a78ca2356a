use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::utils::time::format_relative_time;

const REFRESH_MS: u32 = 60_000;

/// Relative timestamp ("5m", "2h", "3d") that refreshes once a minute.
///
/// Renders a placeholder until one tick after mount.
#[component]
pub fn ClientTimeDisplay(date: DateTime<Utc>) -> Element {
    let mut mounted = use_signal(|| false);
    let mut tick = use_signal(|| 0u64);

    use_future(move || async move {
        TimeoutFuture::new(0).await;
        mounted.set(true);

        loop {
            TimeoutFuture::new(REFRESH_MS).await;
            *tick.write() += 1;
        }
    });

    if !mounted() {
        return rsx! { span { "..." } };
    }

    // Subscribe to the minute tick
    let _ = tick();
    let label = format_relative_time(date);

    rsx! {
        span { "{label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_first_render_is_placeholder() {
        let props = ClientTimeDisplayProps::builder()
            .date(Utc::now() - Duration::minutes(5))
            .build();
        let mut dom = VirtualDom::new_with_props(ClientTimeDisplay, props);
        dom.rebuild_in_place();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("..."), "unexpected first render: {}", html);
        assert!(!html.contains("5m"));
    }
}
