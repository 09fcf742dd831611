//! Field validation for registration and resource payloads.
//!
//! Validation is structural only: usernames have a fixed shape, emails get a
//! basic format check, titles must be non-empty. Anything stronger (MX
//! lookups, password strength) is out of scope.

use std::fmt;

/// A field-level validation failure.
///
/// Carries the field name and a human-readable reason, ready to be turned
/// into a 400 response by the API layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a username.
///
/// Usernames must be:
/// - 3-30 characters long
/// - Start with a letter
/// - Contain only alphanumeric characters and underscores
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::new("username", "is required"));
    }
    if username.len() < 3 || username.len() > 30 {
        return Err(ValidationError::new(
            "username",
            "must be 3-30 characters long",
        ));
    }

    let mut chars = username.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => {
            return Err(ValidationError::new(
                "username",
                "must start with a letter",
            ));
        }
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new(
            "username",
            "may contain only letters, numbers, and underscores",
        ));
    }

    Ok(())
}

/// Validate an email address.
///
/// Structural check only: exactly one '@' with a non-empty local part and a
/// dotted, non-empty domain.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("email", "is required"));
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next();

    let Some(domain) = domain else {
        return Err(ValidationError::new("email", "is not a valid email address"));
    };

    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(ValidationError::new("email", "is not a valid email address"));
    }

    Ok(())
}

/// Validate a title field (books, sections, subsections).
///
/// Titles must be non-empty after trimming whitespace.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("title", "cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_accepts_typical_names() {
        assert!(validate_username("bob").is_ok());
        assert!(validate_username("alice_42").is_ok());
        assert!(validate_username("a".repeat(30).as_str()).is_ok());
    }

    #[test]
    fn username_rejects_empty() {
        let err = validate_username("").unwrap_err();
        assert_eq!(err.field, "username");
        assert_eq!(err.reason, "is required");
    }

    #[test]
    fn username_rejects_bad_shapes() {
        assert!(validate_username("1bob").is_err()); // starts with digit
        assert!(validate_username("_bob").is_err()); // starts with underscore
        assert!(validate_username("bo b").is_err()); // whitespace
        assert!(validate_username("bob!").is_err()); // punctuation
        assert!(validate_username("zz").is_err()); // too short
        assert!(validate_username("a".repeat(31).as_str()).is_err()); // too long
    }

    #[test]
    fn email_accepts_typical_addresses() {
        assert!(validate_email("b@x.com").is_ok());
        assert!(validate_email("first.last@sub.example.org").is_ok());
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(validate_email("").is_err());
        assert!(validate_email("plainaddress").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("b@").is_err());
        assert!(validate_email("b@nodot").is_err());
        assert!(validate_email("b@.com").is_err());
        assert!(validate_email("b@x.com.").is_err());
        assert!(validate_email("a@b@c.com").is_err());
    }

    #[test]
    fn title_rejects_blank() {
        assert!(validate_title("My Book").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn validation_error_display() {
        let err = validate_title("").unwrap_err();
        assert_eq!(err.to_string(), "title: cannot be empty");
    }
}
