//! Age calculation from a date of birth.

use chrono::{Datelike, Months, NaiveDate};

/// Returns the age in whole years on `today` for someone born on `date_of_birth`.
///
/// The birthday counts as reached on its anniversary date. Someone born on
/// February 29 has their birthday on February 28 in common years.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use course_library::utils::age::current_age;
///
/// let born = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
/// assert_eq!(current_age(born, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()), 23);
/// assert_eq!(current_age(born, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()), 24);
/// ```
pub fn current_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - date_of_birth.year();

    let birthday_reached = u32::try_from(years)
        .ok()
        .and_then(|y| y.checked_mul(12))
        .and_then(|months| date_of_birth.checked_add_months(Months::new(months)))
        .map(|anniversary| today >= anniversary)
        .unwrap_or_else(|| {
            (today.month(), today.day()) >= (date_of_birth.month(), date_of_birth.day())
        });

    if birthday_reached { years } else { years - 1 }
}
