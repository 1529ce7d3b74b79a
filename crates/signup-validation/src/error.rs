//! Typed field failures. The `Display` output is the message shown under the
//! offending input.

use thiserror::Error;

/// A single failed rule for one form field.
///
/// Each validator stops at its first failing rule, so a field never carries
/// more than one of these at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Name must be at least {min} characters long.")]
    NameTooShort { min: usize },

    #[error("Email is required.")]
    EmailRequired,
    #[error("Enter a valid email address.")]
    EmailInvalid,

    #[error("Phone number is required.")]
    PhoneRequired,
    #[error("Phone number must have exactly {digits} digits.")]
    PhoneInvalid { digits: usize },

    #[error("Birth date is required.")]
    BirthDateRequired,
    #[error("You must be at least {min_age} years old.")]
    Underage { min_age: i32 },

    #[error("Password is required.")]
    PasswordRequired,
    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },
    #[error("Password must contain at least one uppercase letter.")]
    PasswordMissingUppercase,
    #[error("Password must contain at least one lowercase letter.")]
    PasswordMissingLowercase,
    #[error("Password must contain at least one number.")]
    PasswordMissingNumber,
    #[error("Password must contain at least one special character.")]
    PasswordMissingSpecial,

    #[error("Please confirm your password.")]
    ConfirmPasswordRequired,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}
