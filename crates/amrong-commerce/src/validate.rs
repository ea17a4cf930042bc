//! Form field validators.
//!
//! These are shape checks, not full address validation: the email pattern
//! only asks for `local@domain.suffix` with no whitespace or extra `@`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CommerceError;

/// Message shown when a required field is empty.
pub const MISSING_FIELDS: &str = "Please fill all fields!";
/// Message shown for a malformed email.
pub const INVALID_EMAIL: &str = "Please enter a valid email address!";
/// Message shown for a malformed phone number.
pub const INVALID_PHONE: &str = "Please enter a valid phone number!";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern"));

/// Check an email address against the storefront's email shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check a phone number after stripping spaces, hyphens and parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    let stripped: String = phone
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect();
    PHONE_RE.is_match(&stripped)
}

/// A field counts as filled in when it is non-empty. Whitespace is content.
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// Fail with [`MISSING_FIELDS`] unless every field is filled in.
pub fn require_fields(fields: &[&str]) -> Result<(), CommerceError> {
    if fields.iter().all(|f| is_present(f)) {
        Ok(())
    } else {
        Err(CommerceError::validation(MISSING_FIELDS))
    }
}

/// Fail with [`INVALID_EMAIL`] unless `email` has a valid shape.
pub fn require_email(email: &str) -> Result<(), CommerceError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(CommerceError::validation(INVALID_EMAIL))
    }
}

/// Fail with [`INVALID_PHONE`] unless `phone` has a valid shape.
pub fn require_phone(phone: &str) -> Result<(), CommerceError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(CommerceError::validation(INVALID_PHONE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts() {
        for email in ["a@b.co", "jane.doe@example.com", "x@sub.domain.org", "a@b.c.d"] {
            assert!(is_valid_email(email), "{} should be valid", email);
        }
    }

    #[test]
    fn test_email_rejects() {
        for email in ["foo@bar", "foo", "@b.co", "a@.co.", "a b@c.de", "a@@b.co", "a@b.", ""] {
            assert!(!is_valid_email(email), "{} should be invalid", email);
        }
    }

    #[test]
    fn test_email_pattern_is_minimal() {
        // The domain only needs a dot with something after it.
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("weird!#$@x.y"));
    }

    #[test]
    fn test_phone_accepts() {
        for phone in [
            "5551234567",
            "+15551234567",
            "(555) 123-4567",
            "+1 (555) 123-4567",
            "9",
            "1234567890123456",
        ] {
            assert!(is_valid_phone(phone), "{} should be valid", phone);
        }
    }

    #[test]
    fn test_phone_rejects() {
        for phone in [
            "",
            "0551234567",
            "+0123",
            "12345678901234567",
            "555.123.4567",
            "phone",
            "++15551234567",
        ] {
            assert!(!is_valid_phone(phone), "{} should be invalid", phone);
        }
    }

    #[test]
    fn test_require_fields() {
        assert!(require_fields(&["Jane", "jane@example.com"]).is_ok());
        assert!(require_fields(&[" "]).is_ok());

        let err = require_fields(&["Jane", ""]).unwrap_err();
        assert_eq!(err.to_string(), MISSING_FIELDS);
    }

    #[test]
    fn test_require_messages() {
        assert_eq!(require_email("foo@bar").unwrap_err().to_string(), INVALID_EMAIL);
        assert_eq!(require_phone("abc").unwrap_err().to_string(), INVALID_PHONE);
    }
}
