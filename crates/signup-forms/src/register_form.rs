// File: src/register_form.rs
// Purpose: Field state of the registration view, live feedback and submit

use chrono::NaiveDate;
use signup_validation::{self as rules, PasswordStrength};
use tracing::{debug, info};

use crate::form_context::FormContext;
use crate::register::{validate_registration_on, RegistrationInput, ValidationResult};

#[cfg(feature = "runtime")]
use crate::navigation::{NavigationScheduler, Navigator, Route, ScheduledNavigation};
#[cfg(feature = "runtime")]
use std::sync::Arc;

/// Current values of the registration form.
///
/// Setters are the change events of the view. Phone keystrokes are stripped
/// of non-digits before they are stored.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    input: RegistrationInput,
    submitted: bool,
    last_result: Option<ValidationResult>,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.input.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.input.email = email.into();
    }

    pub fn set_phone(&mut self, raw: &str) {
        self.input.phone = rules::sanitize_phone_input(raw);
    }

    pub fn set_birth_date(&mut self, birth_date: Option<NaiveDate>) {
        self.input.birth_date = birth_date;
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.input.password = password.into();
    }

    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.input.confirm_password = confirm_password.into();
    }

    pub fn phone(&self) -> &str {
        &self.input.phone
    }

    /// Snapshot of the current values
    pub fn input(&self) -> RegistrationInput {
        self.input.clone()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last_result.as_ref()
    }

    /// Live password feedback, same predicates the validator uses
    pub fn password_strength(&self) -> PasswordStrength {
        PasswordStrength::evaluate(&self.input.password)
    }

    pub fn is_adult_on(&self, today: NaiveDate) -> bool {
        self.input
            .birth_date
            .is_some_and(|birth_date| rules::is_adult_on(birth_date, today))
    }

    pub fn is_adult(&self) -> bool {
        self.is_adult_on(rules::today())
    }

    /// Validates every field as of `today` and returns the display model
    pub fn submit_on(&mut self, today: NaiveDate) -> FormContext {
        let result = validate_registration_on(&self.input, today);
        self.submitted = true;

        if result.valid {
            info!("registration accepted");
        } else {
            debug!(failing = ?result.errors.failing_fields(), "registration rejected");
        }

        let context = FormContext::from_registration(&result, &self.input);
        self.last_result = Some(result);
        context
    }

    pub fn submit(&mut self) -> FormContext {
        self.submit_on(rules::today())
    }

    /// Submits and, when accepted, schedules the move to the login view.
    ///
    /// Navigation never happens immediately; it waits for the scheduler's
    /// delay and the returned handle can cancel it. Without a tokio runtime
    /// the form is left untouched and an error is returned.
    #[cfg(feature = "runtime")]
    pub fn submit_and_schedule_on(
        &mut self,
        today: NaiveDate,
        scheduler: &NavigationScheduler,
        navigator: Arc<dyn Navigator>,
    ) -> anyhow::Result<(FormContext, Option<ScheduledNavigation>)> {
        scheduler.runtime()?;

        let context = self.submit_on(today);
        if context.success.is_none() {
            return Ok((context, None));
        }

        let scheduled = scheduler.schedule(navigator, Route::Login)?;
        Ok((context, Some(scheduled)))
    }

    #[cfg(feature = "runtime")]
    pub fn submit_and_schedule(
        &mut self,
        scheduler: &NavigationScheduler,
        navigator: Arc<dyn Navigator>,
    ) -> anyhow::Result<(FormContext, Option<ScheduledNavigation>)> {
        self.submit_and_schedule_on(rules::today(), scheduler, navigator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled_form() -> RegisterForm {
        let mut form = RegisterForm::new();
        form.set_name("Ana");
        form.set_email("a@b.com");
        form.set_phone("1234567890");
        form.set_birth_date(Some(date(1990, 5, 20)));
        form.set_password("Abcdefgh1!");
        form.set_confirm_password("Abcdefgh1!");
        form
    }

    #[test]
    fn test_phone_keystrokes_are_sanitized() {
        let mut form = RegisterForm::new();
        form.set_phone("(555) 123-45ab67");
        assert_eq!(form.phone(), "5551234567");
    }

    #[test]
    fn test_live_password_strength() {
        let mut form = RegisterForm::new();
        form.set_password("abc");
        assert_eq!(form.password_strength().score(), 1);

        form.set_password("Abcdefgh1!");
        assert!(form.password_strength().is_strong());
    }

    #[test]
    fn test_is_adult_needs_a_date() {
        let today = date(2026, 10, 17);
        let mut form = RegisterForm::new();
        assert!(!form.is_adult_on(today));

        form.set_birth_date(Some(date(2008, 10, 17)));
        assert!(form.is_adult_on(today));

        form.set_birth_date(Some(date(2008, 10, 18)));
        assert!(!form.is_adult_on(today));
    }

    #[test]
    fn test_submit_success() {
        let mut form = filled_form();
        let context = form.submit_on(date(2026, 10, 17));

        assert!(form.is_submitted());
        assert!(!context.has_errors());
        assert_eq!(
            context.success_message(),
            Some("Registration successful! Redirecting to login...")
        );
        assert!(form.last_result().is_some_and(|result| result.valid));
    }

    #[test]
    fn test_resubmit_recomputes_errors() {
        let today = date(2026, 10, 17);
        let mut form = filled_form();
        form.set_name("Al");
        let context = form.submit_on(today);
        assert!(context.has_error("name"));
        assert!(context.success_message().is_none());

        form.set_name("Ana");
        let context = form.submit_on(today);
        assert!(!context.has_error("name"));
        assert_eq!(context.errors.len(), 6);
    }

    #[cfg(feature = "runtime")]
    #[test]
    fn test_submit_without_runtime_leaves_form_untouched() {
        let scheduler = NavigationScheduler::new(std::time::Duration::from_millis(2000)).unwrap();
        let navigator: Arc<dyn Navigator> = Arc::new(|_route: Route, _path: &str| {});
        let mut form = filled_form();

        let result = form.submit_and_schedule_on(date(2026, 10, 17), &scheduler, navigator);

        assert!(result.is_err());
        assert!(!form.is_submitted());
        assert!(form.last_result().is_none());
    }
}
