// File: src/login.rs
// Purpose: Login validation against an injected allow-list of credentials

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::form_context::FormContext;

pub const EMPTY_FIELDS_MESSAGE: &str = "All fields are required.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect credentials. Try again.";
pub const WELCOME_MESSAGE: &str = "Welcome back! You have logged in successfully.";

/// An email/password pair accepted by the login form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Values submitted from the login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginStatus {
    EmptyFields,
    Invalid,
    Success,
}

impl LoginStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LoginStatus::EmptyFields => "empty-fields",
            LoginStatus::Invalid => "invalid",
            LoginStatus::Success => "success",
        }
    }
}

/// Outcome of a login attempt, with the message to display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub status: LoginStatus,
    pub message: String,
}

impl LoginOutcome {
    fn new(status: LoginStatus, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == LoginStatus::Success
    }
}

/// Checks a login attempt against `allow_list`.
///
/// The email is trimmed before comparison, the password is compared as typed.
/// A password made only of whitespace counts as missing.
pub fn validate_login(input: &LoginInput, allow_list: &[Credential]) -> LoginOutcome {
    let email = input.email.trim();

    if email.is_empty() || input.password.trim().is_empty() {
        return LoginOutcome::new(LoginStatus::EmptyFields, EMPTY_FIELDS_MESSAGE);
    }

    if allow_list
        .iter()
        .any(|credential| credential.matches(email, &input.password))
    {
        LoginOutcome::new(LoginStatus::Success, WELCOME_MESSAGE)
    } else {
        LoginOutcome::new(LoginStatus::Invalid, INVALID_CREDENTIALS_MESSAGE)
    }
}

/// Field state of the login view.
///
/// Success only reports a message; the login view does not navigate.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    email: String,
    password: String,
    submitted: bool,
    outcome: Option<LoginOutcome>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn input(&self) -> LoginInput {
        LoginInput::new(self.email.clone(), self.password.clone())
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Last outcome, if the form was submitted
    pub fn outcome(&self) -> Option<&LoginOutcome> {
        self.outcome.as_ref()
    }

    /// Checks the current values and returns the display model
    pub fn submit(&mut self, allow_list: &[Credential]) -> FormContext {
        let input = self.input();
        let outcome = validate_login(&input, allow_list);
        self.submitted = true;

        match outcome.status {
            LoginStatus::Success => info!(email = %self.email.trim(), "login succeeded"),
            status => debug!(status = status.as_str(), "login rejected"),
        }

        let context = FormContext::from_login(&outcome, &input);
        self.outcome = Some(outcome);
        context
    }
}
