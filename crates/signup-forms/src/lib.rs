//! # signup-forms
//!
//! Login and registration forms for a single-page application, without the
//! UI. Validators are pure functions over an input record; the `LoginForm`
//! and `RegisterForm` state holders stand in for the reactive fields of the
//! view and hand a complete [`FormContext`] back to the rendering layer
//! after every submit.
//!
//! ```rust,ignore
//! use signup_forms::{validate_registration, RegistrationInput};
//!
//! let result = validate_registration(&RegistrationInput {
//!     name: "Ana".into(),
//!     email: "ana@example.com".into(),
//!     phone: "5551234567".into(),
//!     birth_date: chrono::NaiveDate::from_ymd_opt(1990, 5, 20),
//!     password: "Abcdefgh1!".into(),
//!     confirm_password: "Abcdefgh1!".into(),
//! });
//! assert!(result.valid);
//! ```

pub mod config;
pub mod form_context;
pub mod login;
pub mod navigation;
pub mod register;
pub mod register_form;

pub use config::Config;
pub use form_context::FormContext;
pub use login::{validate_login, Credential, LoginForm, LoginInput, LoginOutcome, LoginStatus};
pub use register::{
    validate_registration, validate_registration_on, RegistrationErrors, RegistrationField,
    RegistrationInput, ValidationResult,
};
pub use register_form::RegisterForm;

pub use navigation::{Navigator, Route};
#[cfg(feature = "runtime")]
pub use navigation::{NavigationScheduler, ScheduledNavigation};

// Field-level rules live in the validation crate
pub use signup_validation as validation;
pub use signup_validation::{FieldError, PasswordStrength};
