use rust_i18n::t;

/// Client-side checks before the login request goes out. The backend
/// re-validates; this only catches the obvious slips.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(t!("login.invalid_email").to_string());
    }
    if password.is_empty() {
        return Err(t!("login.missing_password").to_string());
    }
    Ok(())
}
