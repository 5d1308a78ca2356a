use dioxus::prelude::*;

use crate::components::icons::{AlertCircleIcon, EyeIcon, EyeOffIcon, MapPinIcon};
use crate::context::use_app_context;
use crate::hooks::use_http;
use crate::routes::Route;
use crate::services::auth::{AuthMode, AuthSession, Credentials};
use crate::stores::session;
use crate::utils::validation::{validate_credentials, AuthField, FieldErrors};

/// Heading and subtitle for the current mode
fn header_copy(mode: AuthMode) -> (&'static str, &'static str) {
    match mode {
        AuthMode::SignIn => ("Welcome Back", "Connect with your local community"),
        AuthMode::SignUp => ("Join Cityscope", "Connect with your neighborhood"),
    }
}

/// Sign-in / sign-up landing page
#[component]
pub fn Auth() -> Element {
    let ctx = use_app_context();
    let navigator = navigator();

    let mut mode = use_signal(AuthMode::default);
    let mut show_password = use_signal(|| false);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::<AuthField>::default);
    let auth_http = use_http::<AuthSession>();

    let is_submitting = auth_http.is_loading();
    let is_login = mode() == AuthMode::SignIn;
    let (heading, subtitle) = header_copy(mode());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if is_submitting {
            return;
        }

        let validation = validate_credentials(&email.read(), &password.read());
        let valid = validation.is_empty();
        errors.set(validation);
        if !valid {
            return;
        }

        let credentials = Credentials {
            email: email.read().trim().to_string(),
            password: password.read().clone(),
        };
        let api = ctx.api();
        let current_mode = mode();

        spawn(async move {
            auth_http
                .send_request(
                    api.authenticate(current_mode, &credentials),
                    |auth| {
                        let is_new_user = auth.is_new_user;
                        log::info!("Signed in as {}", auth.user.email);
                        session::start_session(auth);

                        if is_new_user {
                            navigator.push(Route::ProfileCompletion {});
                        } else {
                            navigator.push(Route::Dashboard {});
                        }
                    },
                    |e| log::error!("Authentication failed: {}", e),
                )
                .await;
        });
    };

    let toggle_mode = move |_: MouseEvent| {
        mode.set(mode().toggled());
        email.set(String::new());
        password.set(String::new());
        errors.set(FieldErrors::default());
        auth_http.reset();
    };

    let email_error = errors.read().get(AuthField::Email).map(str::to_string);
    let password_error = errors.read().get(AuthField::Password).map(str::to_string);
    let email_border = if email_error.is_some() { "border-red-300 bg-red-50" } else { "border-gray-300" };
    let password_border = if password_error.is_some() { "border-red-300 bg-red-50" } else { "border-gray-300" };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center p-4",
            div {
                class: "bg-white rounded-2xl shadow-xl w-full max-w-md p-6 sm:p-8",

                div {
                    class: "text-center mb-8",
                    div {
                        class: "flex justify-center mb-4",
                        div {
                            class: "bg-indigo-600 p-3 rounded-full",
                            MapPinIcon { class: "w-8 h-8 text-white" }
                        }
                    }
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "{heading}" }
                    p { class: "text-gray-600 text-sm", "{subtitle}" }
                }

                if let Some(message) = auth_http.error() {
                    div {
                        class: "bg-red-50 border border-red-200 rounded-lg p-3 flex items-start gap-2 mb-4",
                        AlertCircleIcon { class: "w-5 h-5 text-red-500 flex-shrink-0 mt-0.5" }
                        p { class: "text-sm text-red-600", "{message}" }
                    }
                }

                form {
                    class: "space-y-5",
                    onsubmit: handle_submit,

                    div {
                        label { r#for: "email", class: "block text-sm font-medium text-gray-700 mb-2", "Email address" }
                        input {
                            id: "email",
                            r#type: "email",
                            class: "w-full px-4 py-3 border rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 {email_border}",
                            placeholder: "Enter your email",
                            value: "{email}",
                            disabled: is_submitting,
                            oninput: move |evt| {
                                email.set(evt.value());
                                errors.write().clear(AuthField::Email);
                            },
                        }
                        if let Some(error) = email_error {
                            p { class: "mt-1 text-sm text-red-600", "{error}" }
                        }
                    }

                    div {
                        label { r#for: "password", class: "block text-sm font-medium text-gray-700 mb-2", "Password" }
                        div {
                            class: "relative",
                            input {
                                id: "password",
                                r#type: if show_password() { "text" } else { "password" },
                                class: "w-full px-4 py-3 pr-12 border rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 {password_border}",
                                placeholder: "Enter your password",
                                value: "{password}",
                                disabled: is_submitting,
                                oninput: move |evt| {
                                    password.set(evt.value());
                                    errors.write().clear(AuthField::Password);
                                },
                            }
                            button {
                                r#type: "button",
                                class: "absolute inset-y-0 right-0 px-4 text-gray-500 hover:text-gray-700",
                                onclick: move |_| show_password.set(!show_password()),
                                if show_password() {
                                    EyeOffIcon { class: "w-5 h-5" }
                                } else {
                                    EyeIcon { class: "w-5 h-5" }
                                }
                            }
                        }
                        if let Some(error) = password_error {
                            p { class: "mt-1 text-sm text-red-600", "{error}" }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "w-full py-3 px-4 rounded-lg font-medium bg-gray-900 text-white hover:bg-gray-800 transition flex items-center justify-center disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_submitting,
                        if is_submitting {
                            div { class: "animate-spin rounded-full h-5 w-5 border-b-2 border-white mr-2" }
                            if is_login { "Signing in..." } else { "Creating account..." }
                        } else if is_login {
                            "Sign In"
                        } else {
                            "Create Account"
                        }
                    }
                }

                p {
                    class: "text-center text-sm text-gray-600 mt-6",
                    if is_login { "Don't have an account? " } else { "Already have an account? " }
                    button {
                        class: "text-indigo-600 font-medium hover:underline",
                        onclick: toggle_mode,
                        if is_login { "Sign up" } else { "Sign in" }
                    }
                }

                if is_login {
                    div {
                        class: "mt-4 text-center",
                        button {
                            r#type: "button",
                            class: "text-sm text-gray-600 hover:text-gray-800",
                            "Forgot your password?"
                        }
                    }
                } else {
                    div {
                        class: "mt-6 text-center",
                        p {
                            class: "text-xs text-gray-500",
                            "By creating an account, you agree to our "
                            a { href: "#", class: "text-indigo-600 hover:text-indigo-700", "Terms of Service" }
                            " and "
                            a { href: "#", class: "text-indigo-600 hover:text-indigo-700", "Privacy Policy" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_copy_per_mode() {
        assert_eq!(
            header_copy(AuthMode::SignIn),
            ("Welcome Back", "Connect with your local community")
        );
        assert_eq!(
            header_copy(AuthMode::SignUp),
            ("Join Cityscope", "Connect with your neighborhood")
        );
        assert_eq!(header_copy(AuthMode::SignIn.toggled()).0, "Join Cityscope");
    }
}
