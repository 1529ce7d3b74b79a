//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::FieldError;

// local@domain.tld, TLD of two or more letters
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("compile email regex")
});

/// Validates email shape. The caller trims.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Email rule: required after trimming, then a `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}
