use std::collections::BTreeMap;

use rust_i18n::t;

pub const MIN_USERNAME: usize = 4;
pub const MIN_PASSWORD: usize = 6;

/// Field-keyed validation of the signup form, same keys the backend
/// uses in its validation envelope so the two sources of errors land on
/// the same inputs.
pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    password_repeat: &str,
) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();
    if username.trim().chars().count() < MIN_USERNAME {
        errors.insert(
            "username".to_string(),
            t!("signup.username_too_short", min = MIN_USERNAME).to_string(),
        );
    }
    if email.trim().is_empty() || !email.contains('@') {
        errors.insert("email".to_string(), t!("signup.invalid_email").to_string());
    }
    if password.chars().count() < MIN_PASSWORD {
        errors.insert(
            "password".to_string(),
            t!("signup.password_too_short", min = MIN_PASSWORD).to_string(),
        );
    }
    if password != password_repeat {
        errors.insert(
            "passwordRepeat".to_string(),
            t!("signup.password_mismatch").to_string(),
        );
    }
    errors
}
