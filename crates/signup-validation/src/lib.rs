//! Signup Validation Core
//!
//! Field-level rules for the login and registration forms. Every rule is a
//! pure function over the raw field value, so the same checks run on the
//! server, in tests, and in the browser through the WASM bindings.

pub mod date;
pub mod email;
pub mod error;
pub mod password;
pub mod phone;
pub mod string;

#[cfg(feature = "garde")]
pub mod garde_validators;

// Re-export all validators
pub use date::*;
pub use email::*;
pub use error::FieldError;
pub use password::*;
pub use phone::*;
pub use string::*;
