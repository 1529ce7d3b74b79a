//! Phone number rule and keystroke sanitization

use once_cell::sync::Lazy;
use regex::Regex;

use crate::FieldError;

/// Exact number of digits in a phone number
pub const PHONE_DIGITS: usize = 10;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("compile phone regex"));

/// Exactly ten ASCII digits, nothing else
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Strips every non-digit character from a keystroke value.
///
/// Input handlers run this before the value reaches the phone field, so the
/// stored value only ever holds digits.
pub fn sanitize_phone_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Phone rule: required after trimming, then exactly [`PHONE_DIGITS`] digits.
pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(FieldError::PhoneRequired);
    }
    if !is_valid_phone(phone) {
        return Err(FieldError::PhoneInvalid {
            digits: PHONE_DIGITS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1234567890", true)]
    #[case("12345", false)]
    #[case("12345678901", false)]
    #[case("123-456-7890", false)]
    #[case("12345abcde", false)]
    #[case("١٢٣٤٥٦٧٨٩٠", false)]
    fn test_phone_shape(#[case] phone: &str, #[case] valid: bool) {
        assert_eq!(is_valid_phone(phone), valid);
    }

    #[test]
    fn test_sanitize_strips_non_digits() {
        assert_eq!(sanitize_phone_input("(555) 123-4567"), "5551234567");
        assert_eq!(sanitize_phone_input("abc"), "");
        assert_eq!(sanitize_phone_input("+1 555"), "1555");
    }

    #[test]
    fn test_phone_rule_order() {
        assert_eq!(validate_phone(" "), Err(FieldError::PhoneRequired));
        assert_eq!(
            validate_phone("12345"),
            Err(FieldError::PhoneInvalid { digits: 10 })
        );
        assert!(validate_phone("1234567890").is_ok());
    }
}
