//! Client-side field validation for the profile and auth forms.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Max length of first/last name
pub const NAME_MAX_CHARS: usize = 50;
/// Bio input beyond this is ignored
pub const BIO_MAX_CHARS: usize = 160;
/// Bio counter turns orange past this
pub const BIO_WARN_CHARS: usize = 140;
pub const PASSWORD_MIN_CHARS: usize = 6;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex is valid"));

/// Per-field error messages; a field without an entry is valid
#[derive(Clone, Debug, PartialEq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self { errors: BTreeMap::new() }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Drop the error for `field`, returns whether one was present
    pub fn clear(&mut self, field: F) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfileField {
    FirstName,
    LastName,
    Bio,
    City,
}

/// Editable profile completion form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub city: String,
}

impl ProfileForm {
    /// Apply a keystroke to `field`, clearing that field's error.
    ///
    /// Bio edits that would exceed the limit are dropped entirely.
    pub fn edit(&mut self, field: ProfileField, value: String, errors: &mut FieldErrors<ProfileField>) {
        if field == ProfileField::Bio && value.chars().count() > BIO_MAX_CHARS {
            return;
        }

        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Bio => self.bio = value,
            ProfileField::City => self.city = value,
        }

        errors.clear(field);
    }

    /// Names filled in; gates the submit button before full validation
    pub fn is_submittable(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty()
    }
}

/// Validate the profile form; `cities` lists the selectable cities
pub fn validate_profile(form: &ProfileForm, cities: &[String]) -> FieldErrors<ProfileField> {
    let mut errors = FieldErrors::default();

    validate_name(&mut errors, ProfileField::FirstName, &form.first_name, "First name");
    validate_name(&mut errors, ProfileField::LastName, &form.last_name, "Last name");

    if form.city.is_empty() || !cities.iter().any(|c| c == &form.city) {
        errors.insert(ProfileField::City, "Please select a city");
    }

    if form.bio.trim().chars().count() > BIO_MAX_CHARS {
        errors.insert(
            ProfileField::Bio,
            format!("Bio cannot exceed {} characters", BIO_MAX_CHARS),
        );
    }

    errors
}

fn validate_name(errors: &mut FieldErrors<ProfileField>, field: ProfileField, value: &str, label: &str) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, format!("{} is required", label));
    } else if trimmed.chars().count() > NAME_MAX_CHARS {
        errors.insert(
            field,
            format!("{} cannot exceed {} characters", label, NAME_MAX_CHARS),
        );
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AuthField {
    Email,
    Password,
}

/// Validate sign-in / sign-up credentials
pub fn validate_credentials(email: &str, password: &str) -> FieldErrors<AuthField> {
    let mut errors = FieldErrors::default();

    if email.trim().is_empty() {
        errors.insert(AuthField::Email, "Email is required");
    } else if !EMAIL_SHAPE.is_match(email) {
        errors.insert(AuthField::Email, "Please enter a valid email address");
    }

    if password.trim().is_empty() {
        errors.insert(AuthField::Password, "Password is required");
    } else if password.chars().count() < PASSWORD_MIN_CHARS {
        errors.insert(
            AuthField::Password,
            format!("Password must be at least {} characters", PASSWORD_MIN_CHARS),
        );
    }

    errors
}
