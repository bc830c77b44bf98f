//! Validation of form input before anything is sent

use rust_decimal::Decimal;
use std::str::FromStr;

/// Minimum password length accepted by the auth backend
pub const MIN_PASSWORD_LEN: usize = 6;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// First failing result of a sequence of checks
    pub fn first_error(results: impl IntoIterator<Item = ValidationResult>) -> Option<String> {
        results.into_iter().find_map(|r| r.error)
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return ValidationResult::err("Invalid email format");
    };

    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return ValidationResult::err("Invalid email format");
    }

    let domain_ok = domain
        .split('.')
        .collect::<Vec<_>>()
        .windows(2)
        .next()
        .is_some()
        && domain.split('.').all(|label| !label.is_empty());
    if !domain_ok {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate password length
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }

    ValidationResult::ok()
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> ValidationResult {
    if password != confirmation {
        return ValidationResult::err("Passwords don't match");
    }
    ValidationResult::ok()
}

/// Parse a positive amount typed into a form
pub fn parse_positive_amount(text: &str) -> Result<Decimal, String> {
    match Decimal::from_str(text.trim()) {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => Err("Please enter a valid amount".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("test@localhost").is_valid);
        assert!(!validate_email("a@b@c.com").is_valid);
        assert!(!validate_email("test@example..com").is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("secret").is_valid);
        assert!(!validate_password("short").is_valid);
        assert!(!validate_password("").is_valid);
    }

    #[test]
    fn test_password_confirmation() {
        assert!(validate_password_confirmation("secret1", "secret1").is_valid);
        let result = validate_password_confirmation("secret1", "secret2");
        assert_eq!(result.error.as_deref(), Some("Passwords don't match"));
    }

    #[test]
    fn test_first_error() {
        let error = ValidationResult::first_error([
            validate_email("a@b.io"),
            validate_password("123"),
            validate_password_confirmation("1", "2"),
        ]);
        assert_eq!(error.as_deref(), Some("Password must be at least 6 characters"));
    }

    #[test]
    fn test_parse_positive_amount() {
        assert_eq!(parse_positive_amount(" 12.50 "), Ok(Decimal::new(1250, 2)));
        assert!(parse_positive_amount("0").is_err());
        assert!(parse_positive_amount("-3").is_err());
        assert_eq!(parse_positive_amount("ten").unwrap_err(), "Please enter a valid amount");
    }
}
