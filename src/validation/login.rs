//! # Login Validator Chain
//!
//! Fixed order: email-required, email-format, password-required,
//! password-min-length. The first failure terminates the chain; a body that
//! passes all four is entitled to a freshly issued token.

use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};

/// Minimum accepted password length
const PASSWORD_MIN_LEN: usize = 6;

/// Runs the full login chain over a raw request body.
pub fn validate_login(body: &Value) -> ValidationResult {
    email_required(body)?;
    email_format(body)?;
    password_required(body)?;
    password_min_length(body)?;
    Ok(())
}

fn email_required(body: &Value) -> ValidationResult {
    match body.get("email").and_then(Value::as_str) {
        None | Some("") => Err(ValidationError::EmailRequired),
        Some(_) => Ok(()),
    }
}

/// Intentionally naive: substring checks, not RFC validation.
fn email_format(body: &Value) -> ValidationResult {
    let email = body["email"].as_str().unwrap_or_default();
    if email.contains('@') && email.contains(".com") {
        Ok(())
    } else {
        Err(ValidationError::EmailFormat)
    }
}

fn password_required(body: &Value) -> ValidationResult {
    match body.get("password").and_then(Value::as_str) {
        None | Some("") => Err(ValidationError::PasswordRequired),
        Some(_) => Ok(()),
    }
}

fn password_min_length(body: &Value) -> ValidationResult {
    let password = body["password"].as_str().unwrap_or_default();
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_login_passes() {
        let body = json!({ "email": "a@a.com", "password": "123456" });
        assert!(validate_login(&body).is_ok());
    }

    #[test]
    fn test_missing_email_short_circuits() {
        let body = json!({ "password": "123456" });
        assert_eq!(validate_login(&body), Err(ValidationError::EmailRequired));
    }

    #[test]
    fn test_empty_email_reports_required() {
        let body = json!({ "email": "", "password": "123456" });
        assert_eq!(validate_login(&body), Err(ValidationError::EmailRequired));
    }

    #[test]
    fn test_bad_email_format() {
        for email in ["bad", "no-at.com", "no-dot-com@x"] {
            let body = json!({ "email": email, "password": "123456" });
            assert_eq!(validate_login(&body), Err(ValidationError::EmailFormat));
        }
    }

    #[test]
    fn test_substring_check_is_naive() {
        // '@' and '.com' anywhere is enough
        let body = json!({ "email": ".com@", "password": "123456" });
        assert!(validate_login(&body).is_ok());
    }

    #[test]
    fn test_email_checked_before_password() {
        // Both fields invalid: the email error wins
        let body = json!({ "email": "bad", "password": "" });
        assert_eq!(validate_login(&body), Err(ValidationError::EmailFormat));
    }

    #[test]
    fn test_missing_password() {
        let body = json!({ "email": "a@a.com" });
        assert_eq!(validate_login(&body), Err(ValidationError::PasswordRequired));
    }

    #[test]
    fn test_short_password() {
        let body = json!({ "email": "a@a.com", "password": "12345" });
        assert_eq!(validate_login(&body), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_six_char_password_is_enough() {
        let body = json!({ "email": "a@a.com", "password": "123456" });
        assert!(validate_login(&body).is_ok());
    }
}
