// File: src/register.rs
// Purpose: Registration validation over six independent fields

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use signup_validation::{self as rules, FieldError};

/// The six fields of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistrationField {
    Name,
    Email,
    Phone,
    BirthDate,
    Password,
    ConfirmPassword,
}

impl RegistrationField {
    pub const ALL: [RegistrationField; 6] = [
        RegistrationField::Name,
        RegistrationField::Email,
        RegistrationField::Phone,
        RegistrationField::BirthDate,
        RegistrationField::Password,
        RegistrationField::ConfirmPassword,
    ];

    /// Field name as used by the view
    pub fn as_str(self) -> &'static str {
        match self {
            RegistrationField::Name => "name",
            RegistrationField::Email => "email",
            RegistrationField::Phone => "phone",
            RegistrationField::BirthDate => "birthDate",
            RegistrationField::Password => "password",
            RegistrationField::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values submitted from the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

// Date inputs post "" when cleared
fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Error message per field; an empty string means the field passed.
///
/// Always holds all six fields. It is rebuilt on every validation pass,
/// never merged with a previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationErrors {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationErrors {
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Email => &self.email,
            RegistrationField::Phone => &self.phone,
            RegistrationField::BirthDate => &self.birth_date,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegistrationField, &str)> + '_ {
        RegistrationField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// True when every field passed
    pub fn is_clear(&self) -> bool {
        self.iter().all(|(_, message)| message.is_empty())
    }

    pub fn failing_fields(&self) -> Vec<RegistrationField> {
        self.iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Field name to message, all six keys present
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(field, message)| (field.as_str().to_string(), message.to_string()))
            .collect()
    }
}

/// Aggregate outcome of a registration submit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: RegistrationErrors,
}

fn message(result: Result<(), FieldError>) -> String {
    result.err().map(|err| err.to_string()).unwrap_or_default()
}

/// Validates every field with the age computed as of `today`.
///
/// Each field stops at its first failing rule and no field affects another,
/// except confirm-password which is compared to password.
pub fn validate_registration_on(input: &RegistrationInput, today: NaiveDate) -> ValidationResult {
    let errors = RegistrationErrors {
        name: message(rules::validate_name(&input.name)),
        email: message(rules::validate_email(&input.email)),
        phone: message(rules::validate_phone(&input.phone)),
        birth_date: message(rules::validate_birth_date(input.birth_date, today)),
        password: message(rules::validate_password(&input.password)),
        confirm_password: message(rules::validate_confirm_password(
            &input.confirm_password,
            &input.password,
        )),
    };

    ValidationResult {
        valid: errors.is_clear(),
        errors,
    }
}

/// Same as [`validate_registration_on`] using the local date
pub fn validate_registration(input: &RegistrationInput) -> ValidationResult {
    validate_registration_on(input, rules::today())
}
