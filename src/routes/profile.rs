use dioxus::prelude::*;

use crate::components::icons::{AlertCircleIcon, CheckIcon, MapPinIcon};
use crate::context::use_app_context;
use crate::hooks::use_http;
use crate::routes::Route;
use crate::services::profile::{ProfileUpdate, User};
use crate::stores::session::{self, SESSION};
use crate::utils::validation::{
    validate_profile, FieldErrors, ProfileField, ProfileForm, BIO_MAX_CHARS, BIO_WARN_CHARS, NAME_MAX_CHARS,
};

/// Profile completion step shown after sign-up
#[component]
pub fn ProfileCompletion() -> Element {
    let ctx = use_app_context();
    let navigator = navigator();

    // Start from whatever the account already has
    let mut form = use_signal(|| {
        SESSION
            .peek()
            .user
            .as_ref()
            .map(|user| ProfileForm {
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
                bio: user.bio.clone(),
                city: user.city.clone().unwrap_or_default(),
            })
            .unwrap_or_default()
    });
    let mut errors = use_signal(FieldErrors::<ProfileField>::default);
    let profile_http = use_http::<User>();

    let is_submitting = profile_http.is_loading();
    let cities = ctx.config().available_cities.clone();

    let mut edit = move |field: ProfileField, value: String| {
        form.write().edit(field, value, &mut errors.write());
        if profile_http.error().is_some() {
            profile_http.reset();
        }
    };

    let handle_submit = {
        let ctx = ctx.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if is_submitting {
                return;
            }

            let validation = validate_profile(&form.read(), &ctx.config().available_cities);
            let valid = validation.is_empty();
            errors.set(validation);
            if !valid {
                return;
            }

            let update = ProfileUpdate::from(&*form.read());
            let api = ctx.api();

            spawn(async move {
                profile_http
                    .send_request(
                        api.update_profile(&update),
                        |user| {
                            log::info!("Profile updated for {}", user.email);
                            session::update_user(user);
                            navigator.push(Route::Dashboard {});
                        },
                        |e| log::error!("Profile update failed: {}", e),
                    )
                    .await;
            });
        }
    };

    let data = form.read().clone();
    let bio_len = data.bio.chars().count();
    let bio_counter_class = if bio_len > BIO_WARN_CHARS { "text-orange-500" } else { "text-gray-400" };
    let can_submit = data.is_submittable() && !is_submitting;
    let field_class = |field: ProfileField| {
        if errors.read().get(field).is_some() {
            "border-red-300 bg-red-50"
        } else {
            "border-gray-300"
        }
    };
    let first_name_class = field_class(ProfileField::FirstName);
    let last_name_class = field_class(ProfileField::LastName);
    let city_class = field_class(ProfileField::City);

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
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Complete Your Profile" }
                    p { class: "text-gray-600 text-sm", "Help your neighbors get to know you better" }
                }

                form {
                    class: "space-y-6",
                    onsubmit: handle_submit,

                    if let Some(message) = profile_http.error() {
                        div {
                            class: "bg-red-50 border border-red-200 rounded-lg p-3 flex items-start gap-2",
                            AlertCircleIcon { class: "w-5 h-5 text-red-500 flex-shrink-0 mt-0.5" }
                            div {
                                class: "flex-1",
                                p { class: "text-sm text-red-800 font-medium", "Profile Update Failed" }
                                p { class: "text-sm text-red-600 mt-1", "{message}" }
                            }
                        }
                    }

                    div {
                        label {
                            r#for: "firstName",
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "First Name "
                            span { class: "text-red-500", "*" }
                        }
                        input {
                            id: "firstName",
                            r#type: "text",
                            class: "w-full px-4 py-3 border rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 {first_name_class}",
                            placeholder: "Enter your first name",
                            maxlength: "{NAME_MAX_CHARS}",
                            value: "{data.first_name}",
                            disabled: is_submitting,
                            oninput: move |evt| edit(ProfileField::FirstName, evt.value()),
                        }
                        FieldError { errors, field: ProfileField::FirstName }
                    }

                    div {
                        label {
                            r#for: "lastName",
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Last Name "
                            span { class: "text-red-500", "*" }
                        }
                        input {
                            id: "lastName",
                            r#type: "text",
                            class: "w-full px-4 py-3 border rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 {last_name_class}",
                            placeholder: "Enter your last name",
                            maxlength: "{NAME_MAX_CHARS}",
                            value: "{data.last_name}",
                            disabled: is_submitting,
                            oninput: move |evt| edit(ProfileField::LastName, evt.value()),
                        }
                        FieldError { errors, field: ProfileField::LastName }
                    }

                    div {
                        label {
                            r#for: "city",
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "City "
                            span { class: "text-red-500", "*" }
                        }
                        select {
                            id: "city",
                            class: "w-full px-4 py-3 border rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 {city_class}",
                            value: "{data.city}",
                            disabled: is_submitting,
                            onchange: move |evt| edit(ProfileField::City, evt.value()),
                            option { value: "", selected: data.city.is_empty(), "Select your city" }
                            for city in cities.iter() {
                                option {
                                    key: "{city}",
                                    value: "{city}",
                                    selected: *city == data.city,
                                    "{city}"
                                }
                            }
                        }
                        FieldError { errors, field: ProfileField::City }
                    }

                    div {
                        label {
                            r#for: "bio",
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Bio "
                            span { class: "text-gray-400 text-xs", "(Optional)" }
                        }
                        textarea {
                            id: "bio",
                            rows: "3",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 resize-none",
                            placeholder: "Tell your neighbors a bit about yourself...",
                            maxlength: "{BIO_MAX_CHARS}",
                            value: "{data.bio}",
                            disabled: is_submitting,
                            oninput: move |evt| edit(ProfileField::Bio, evt.value()),
                        }
                        div {
                            class: "mt-1 flex justify-between items-center",
                            p {
                                class: "text-xs text-gray-500",
                                "Share your interests, profession, or what you love about your neighborhood"
                            }
                            span { class: "text-xs {bio_counter_class}", "{bio_len}/{BIO_MAX_CHARS}" }
                        }
                        FieldError { errors, field: ProfileField::Bio }
                    }

                    button {
                        r#type: "submit",
                        class: if can_submit {
                            "w-full py-3 px-4 rounded-lg font-medium flex items-center justify-center bg-gray-900 text-white hover:bg-gray-800"
                        } else {
                            "w-full py-3 px-4 rounded-lg font-medium flex items-center justify-center bg-gray-300 text-gray-500 cursor-not-allowed"
                        },
                        disabled: !can_submit,
                        if is_submitting {
                            div { class: "animate-spin rounded-full h-5 w-5 border-b-2 border-white mr-2" }
                            span { "Completing Profile..." }
                        } else {
                            CheckIcon { class: "w-5 h-5 mr-2" }
                            span { "Complete Profile" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldError(errors: Signal<FieldErrors<ProfileField>>, field: ProfileField) -> Element {
    let message = errors.read().get(field).map(str::to_string);

    rsx! {
        if let Some(message) = message {
            p { class: "mt-1 text-sm text-red-600", "{message}" }
        }
    }
}
