//! Signup Forms WASM
//!
//! WebAssembly bindings for the login and registration forms.
//! The browser runs the exact validators the Rust side uses, so live
//! feedback and submit results never disagree.

use chrono::NaiveDate;
use serde::Serialize;
use signup_forms::validation as rules;
use signup_forms::{Credential, LoginInput, RegistrationInput};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn payload_error(what: &str, err: impl std::fmt::Display) -> JsValue {
    let message = format!("Failed to parse {}: {}", what, err);
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Check a login attempt against an allow-list
///
/// # Example (JavaScript)
/// ```javascript
/// const outcome = validateLogin(
///     { email: 'user@example.com', password: 'User12345!' },
///     [{ email: 'user@example.com', password: 'User12345!' }],
/// );
/// // outcome.status === 'success'
/// ```
#[wasm_bindgen(js_name = validateLogin)]
pub fn validate_login(input: JsValue, allow_list: JsValue) -> Result<JsValue, JsValue> {
    let input: LoginInput =
        serde_wasm_bindgen::from_value(input).map_err(|e| payload_error("login input", e))?;
    let allow_list: Vec<Credential> = serde_wasm_bindgen::from_value(allow_list)
        .map_err(|e| payload_error("allow-list", e))?;

    to_js(&signup_forms::validate_login(&input, &allow_list))
}

/// Validate all six registration fields
///
/// Returns `{ valid, errors }` where `errors` always has the keys
/// `name`, `email`, `phone`, `birthDate`, `password` and `confirmPassword`.
/// `birthDate` is a `YYYY-MM-DD` string; an empty string counts as missing.
#[wasm_bindgen(js_name = validateRegistration)]
pub fn validate_registration(input: JsValue) -> Result<JsValue, JsValue> {
    let input: RegistrationInput = serde_wasm_bindgen::from_value(input)
        .map_err(|e| payload_error("registration input", e))?;

    to_js(&signup_forms::validate_registration(&input))
}

/// Live password feedback: `{ hasMinLength, hasUpperCase, hasLowerCase, hasNumber, hasSpecialChar }`
#[wasm_bindgen(js_name = passwordStrength)]
pub fn password_strength(password: &str) -> Result<JsValue, JsValue> {
    to_js(&rules::PasswordStrength::evaluate(password))
}

/// Live age check for a `YYYY-MM-DD` birth date
#[wasm_bindgen(js_name = isAdult)]
pub fn is_adult(birth_date: &str) -> Result<bool, JsValue> {
    let birth_date = NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d")
        .map_err(|e| payload_error("birth date", e))?;
    Ok(rules::is_adult(birth_date))
}

/// Strip non-digits from a phone keystroke value
#[wasm_bindgen(js_name = sanitizePhone)]
pub fn sanitize_phone(raw: &str) -> String {
    rules::sanitize_phone_input(raw)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email(email: &str) -> bool {
    rules::is_valid_email(email.trim())
}
