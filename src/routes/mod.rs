use dioxus::prelude::*;

pub mod auth;
pub mod dashboard;
pub mod profile;

use auth::Auth;
use dashboard::Dashboard;
use profile::ProfileCompletion;

use crate::stores::session::SESSION;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Auth {},

        #[route("/dashboard")]
        Dashboard {},

        #[route("/profile")]
        ProfileCompletion {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Keeps signed-out users on the auth page and sends signed-in users
/// without a name to the profile step
#[component]
fn Layout() -> Element {
    let current_route = use_route::<Route>();
    let navigator = navigator();

    let redirect = {
        let session = SESSION.read();
        let needs_profile = session.user.as_ref().map(|u| u.needs_profile()).unwrap_or(false);

        match current_route {
            Route::Dashboard {} | Route::ProfileCompletion {} if !session.is_authenticated() => {
                Some(Route::Auth {})
            }
            Route::Dashboard {} if needs_profile => Some(Route::ProfileCompletion {}),
            _ => None,
        }
    };

    use_effect(use_reactive(&redirect, move |redirect| {
        if let Some(target) = redirect {
            log::info!("Redirecting to {}", target);
            navigator.replace(target);
        }
    }));

    if redirect.is_some() {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center",
                div { class: "animate-spin rounded-full h-10 w-10 border-b-2 border-indigo-600" }
            }
        };
    }

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let navigator = navigator();
    let path = segments.join("/");

    use_effect(move || {
        log::debug!("Unknown path /{}", path);
        navigator.replace(Route::Auth {});
    });

    rsx! {}
}
