//! Password validation functions

use serde::{Deserialize, Serialize};

use crate::string::has_min_chars;
use crate::FieldError;

/// Minimum password length in characters
pub const PASSWORD_MIN_LENGTH: usize = 10;

/// Characters that satisfy the special character rule
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub fn has_upper_case(password: &str) -> bool {
    password.chars().any(char::is_uppercase)
}

pub fn has_lower_case(password: &str) -> bool {
    password.chars().any(char::is_lowercase)
}

pub fn has_number(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special_char(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

pub fn has_min_length(password: &str) -> bool {
    has_min_chars(password, PASSWORD_MIN_LENGTH)
}

/// Snapshot of every password predicate, for live strength feedback
/// while the user is still typing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrength {
    pub has_min_length: bool,
    pub has_upper_case: bool,
    pub has_lower_case: bool,
    pub has_number: bool,
    pub has_special_char: bool,
}

impl PasswordStrength {
    pub fn evaluate(password: &str) -> Self {
        Self {
            has_min_length: has_min_length(password),
            has_upper_case: has_upper_case(password),
            has_lower_case: has_lower_case(password),
            has_number: has_number(password),
            has_special_char: has_special_char(password),
        }
    }

    /// Number of satisfied predicates, 0 to 5
    pub fn score(&self) -> usize {
        [
            self.has_min_length,
            self.has_upper_case,
            self.has_lower_case,
            self.has_number,
            self.has_special_char,
        ]
        .into_iter()
        .filter(|passed| *passed)
        .count()
    }

    pub fn is_strong(&self) -> bool {
        self.score() == 5
    }

    /// First unmet requirement, in the order the validator reports them
    pub fn first_failure(&self) -> Option<FieldError> {
        if !self.has_min_length {
            Some(FieldError::PasswordTooShort {
                min: PASSWORD_MIN_LENGTH,
            })
        } else if !self.has_upper_case {
            Some(FieldError::PasswordMissingUppercase)
        } else if !self.has_lower_case {
            Some(FieldError::PasswordMissingLowercase)
        } else if !self.has_number {
            Some(FieldError::PasswordMissingNumber)
        } else if !self.has_special_char {
            Some(FieldError::PasswordMissingSpecial)
        } else {
            None
        }
    }
}

/// Password rule: required, then length, uppercase, lowercase, digit and
/// special character. The first unmet requirement is reported.
pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    match PasswordStrength::evaluate(password).first_failure() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Confirmation rule: required, then an exact match with `password`.
pub fn validate_confirm_password(confirm: &str, password: &str) -> Result<(), FieldError> {
    if confirm.is_empty() {
        return Err(FieldError::ConfirmPasswordRequired);
    }
    if confirm != password {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}
