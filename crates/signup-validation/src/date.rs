//! Birth date and age rules

use chrono::{Datelike, Local, NaiveDate};

use crate::FieldError;

/// Minimum age in whole years to register
pub const MIN_AGE: i32 = 18;

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Age in whole years on `today`.
///
/// Year difference, minus one when today's (month, day) comes before the
/// birthday's. A date in the future yields a negative age.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

pub fn is_adult_on(birth_date: NaiveDate, today: NaiveDate) -> bool {
    age_on(birth_date, today) >= MIN_AGE
}

/// Same as [`is_adult_on`] using the local date
pub fn is_adult(birth_date: NaiveDate) -> bool {
    is_adult_on(birth_date, today())
}

/// Birth date rule: present, then at least [`MIN_AGE`] years old on `today`.
pub fn validate_birth_date(
    birth_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), FieldError> {
    let Some(birth_date) = birth_date else {
        return Err(FieldError::BirthDateRequired);
    };
    if !is_adult_on(birth_date, today) {
        return Err(FieldError::Underage { min_age: MIN_AGE });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_counts_full_years() {
        let today = date(2026, 10, 17);
        assert_eq!(age_on(date(2008, 10, 17), today), 18);
        assert_eq!(age_on(date(2008, 10, 18), today), 17);
        assert_eq!(age_on(date(2008, 9, 30), today), 18);
        assert_eq!(age_on(date(2008, 11, 1), today), 17);
    }

    #[test]
    fn test_adult_boundary() {
        let today = date(2026, 10, 17);
        // exactly eighteen years
        assert!(is_adult_on(date(2008, 10, 17), today));
        // one day short
        assert!(!is_adult_on(date(2008, 10, 18), today));
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = date(2008, 2, 29);
        assert!(!is_adult_on(birth, date(2026, 2, 28)));
        assert!(is_adult_on(birth, date(2026, 3, 1)));
    }

    #[test]
    fn test_future_birth_date_is_not_adult() {
        let today = date(2026, 10, 17);
        assert!(age_on(date(2030, 1, 1), today) < 0);
        assert!(!is_adult_on(date(2030, 1, 1), today));
    }

    #[test]
    fn test_birth_date_rule_order() {
        let today = date(2026, 10, 17);
        assert_eq!(
            validate_birth_date(None, today),
            Err(FieldError::BirthDateRequired)
        );
        assert_eq!(
            validate_birth_date(Some(date(2010, 1, 1)), today),
            Err(FieldError::Underage { min_age: 18 })
        );
        assert!(validate_birth_date(Some(date(1990, 5, 20)), today).is_ok());
    }
}
