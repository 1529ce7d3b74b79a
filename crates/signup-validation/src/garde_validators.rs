//! Custom garde validators for the registration fields
//!
//! Thin adapters so a struct deriving `garde::Validate` can reuse the exact
//! rules of this crate through `#[garde(custom(...))]`.
//!
//! ```ignore
//! use garde::Validate;
//!
//! #[derive(Validate)]
//! struct SignupForm {
//!     #[garde(custom(signup_validation::garde_validators::phone))]
//!     phone: String,
//!     #[garde(custom(signup_validation::garde_validators::password))]
//!     password: String,
//!     #[garde(custom(signup_validation::garde_validators::matches_password(&self.password)))]
//!     confirm_password: String,
//! }
//! ```

use chrono::NaiveDate;

use crate::FieldError;

fn to_garde(result: Result<(), FieldError>) -> Result<(), garde::Error> {
    result.map_err(|err| garde::Error::new(err.to_string()))
}

pub fn name(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(crate::validate_name(value))
}

pub fn email(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(crate::validate_email(value))
}

pub fn phone(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(crate::validate_phone(value))
}

/// Age check against the local date
pub fn adult(value: &Option<NaiveDate>, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(crate::validate_birth_date(*value, crate::today()))
}

pub fn password(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    to_garde(crate::validate_password(value))
}

/// Validator: confirmation must equal `password`
pub fn matches_password(password: &str) -> impl FnOnce(&str, &()) -> Result<(), garde::Error> + '_ {
    move |value, _ctx| to_garde(crate::validate_confirm_password(value, password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_carry_field_messages() {
        let err = phone("12345", &()).unwrap_err();
        assert_eq!(err.message(), "Phone number must have exactly 10 digits.");

        let err = name("Al", &()).unwrap_err();
        assert_eq!(err.message(), "Name must be at least 3 characters long.");
    }

    #[test]
    fn test_valid_values_pass() {
        assert!(name("Ana", &()).is_ok());
        assert!(email("a@b.com", &()).is_ok());
        assert!(phone("1234567890", &()).is_ok());
        assert!(password("Abcdefgh1!", &()).is_ok());
        assert!(adult(&NaiveDate::from_ymd_opt(1990, 1, 1), &()).is_ok());
    }

    #[test]
    fn test_missing_birth_date() {
        let err = adult(&None, &()).unwrap_err();
        assert_eq!(err.message(), "Birth date is required.");
    }

    #[test]
    fn test_matches_password() {
        assert!(matches_password("Abcdefgh1!")("Abcdefgh1!", &()).is_ok());
        let err = matches_password("Abcdefgh1!")("Abcdefgh1?", &()).unwrap_err();
        assert_eq!(err.message(), "Passwords do not match.");
    }
}
