//! Validation of user-supplied city, month and day choices.
//!
//! Each validator is a pure function returning a [`Validation`]; retrying on invalid input
//! is left to the caller (see [`crate::app::interactive`]).

use chrono::Month;

use crate::catalog::City;
use crate::processing::filter::{month_from_name, weekday_from_name, DayFilter, MonthFilter};

/// Months offered for selection. The published datasets only cover January–June.
pub const SELECTABLE_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Result of validating one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T> {
    Valid(T),
    Invalid { input: String, reason: String },
}

impl<T> Validation<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The validated value, if any.
    pub fn valid(self) -> Option<T> {
        match self {
            Self::Valid(v) => Some(v),
            Self::Invalid { .. } => None,
        }
    }

    fn invalid(input: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Accepts `chicago`, `new york city` or `washington` (case-insensitive).
pub fn validate_city(input: &str) -> Validation<City> {
    match City::from_name(input) {
        Some(city) => Validation::Valid(city),
        None => Validation::invalid(input, "expected one of: Chicago, New York City, Washington"),
    }
}

/// Accepts `all` or a month from [`SELECTABLE_MONTHS`] (case-insensitive).
pub fn validate_month(input: &str) -> Validation<MonthFilter> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("all") {
        return Validation::Valid(MonthFilter::All);
    }
    match month_from_name(trimmed) {
        Some(m) if SELECTABLE_MONTHS.contains(&m) => Validation::Valid(MonthFilter::Only(m)),
        _ => Validation::invalid(input, "expected January through June, or all"),
    }
}

/// Accepts `all` or a full weekday name (case-insensitive).
pub fn validate_day(input: &str) -> Validation<DayFilter> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("all") {
        return Validation::Valid(DayFilter::All);
    }
    match weekday_from_name(trimmed) {
        Some(d) => Validation::Valid(DayFilter::Only(d)),
        None => Validation::invalid(input, "expected Monday through Sunday, or all"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Month, Weekday};

    use super::{validate_city, validate_day, validate_month, Validation};
    use crate::catalog::City;
    use crate::processing::filter::{DayFilter, MonthFilter};

    #[test]
    fn city_validation() {
        assert_eq!(validate_city(" Chicago\n"), Validation::Valid(City::Chicago));
        let bad = validate_city("boston");
        assert!(!bad.is_valid());
        match bad {
            Validation::Invalid { input, .. } => assert_eq!(input, "boston"),
            Validation::Valid(_) => unreachable!(),
        }
    }

    #[test]
    fn month_validation_limits_to_first_half_year() {
        assert_eq!(validate_month("ALL"), Validation::Valid(MonthFilter::All));
        assert_eq!(
            validate_month("june"),
            Validation::Valid(MonthFilter::Only(Month::June))
        );
        assert!(!validate_month("july").is_valid());
        assert!(!validate_month("jan").is_valid());
        assert!(!validate_month("").is_valid());
    }

    #[test]
    fn day_validation() {
        assert_eq!(validate_day("all"), Validation::Valid(DayFilter::All));
        assert_eq!(
            validate_day("Sunday").valid(),
            Some(DayFilter::Only(Weekday::Sun))
        );
        assert!(!validate_day("funday").is_valid());
        assert!(!validate_day("sun").is_valid());
    }
}
