// File: src/form_context.rs
// Purpose: Display model handed to the rendering layer after each submit

use std::collections::BTreeMap;

use serde::Serialize;

use crate::login::{LoginInput, LoginOutcome};
use crate::register::{RegistrationInput, ValidationResult};

/// Key for messages that belong to the whole form rather than one field
pub const FORM_KEY: &str = "_form";

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to login...";

/// Errors, echoed values and an optional success banner for one form.
///
/// Password values are never echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormContext {
    /// Field names to error messages (empty message = field passed)
    pub errors: BTreeMap<String, String>,
    /// Submitted values to re-render
    pub values: BTreeMap<String, String>,
    /// Success text, set only when the submit was accepted
    pub success: Option<String>,
}

impl FormContext {
    pub fn new(errors: BTreeMap<String, String>, values: BTreeMap<String, String>) -> Self {
        Self {
            errors,
            values,
            success: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Display model for a registration submit
    pub fn from_registration(result: &ValidationResult, input: &RegistrationInput) -> Self {
        let values = [
            ("name", input.name.clone()),
            ("email", input.email.clone()),
            ("phone", input.phone.clone()),
            (
                "birthDate",
                input
                    .birth_date
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            ),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();

        Self {
            errors: result.errors.to_map(),
            values,
            success: result
                .valid
                .then(|| REGISTRATION_SUCCESS_MESSAGE.to_string()),
        }
    }

    /// Display model for a login submit
    pub fn from_login(outcome: &LoginOutcome, input: &LoginInput) -> Self {
        let mut errors = BTreeMap::new();
        let mut success = None;
        if outcome.is_valid() {
            success = Some(outcome.message.clone());
        } else {
            errors.insert(FORM_KEY.to_string(), outcome.message.clone());
        }

        let mut values = BTreeMap::new();
        values.insert("email".to_string(), input.email.clone());

        Self {
            errors,
            values,
            success,
        }
    }

    /// Check if field has a non-empty error
    pub fn has_error(&self, field: &str) -> bool {
        self.get_error(field).is_some()
    }

    /// Error message for a field, if it failed
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|message| !message.is_empty())
    }

    pub fn get_value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.as_deref()
    }
}
