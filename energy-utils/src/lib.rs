//! Shared utility functions for energy dashboard crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::NaiveDate;

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| DateError(format!("{s:?}: {e}")))
    }

    /// Parse a day-first date string ("DD/MM/YYYY" or "DD-MM-YYYY").
    pub fn parse_date_day_first(s: &str) -> Result<NaiveDate, DateError> {
        let trimmed = s.trim();
        NaiveDate::parse_from_str(trimmed, "%d/%m/%Y")
            .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d-%m-%Y"))
            .map_err(|e| DateError(format!("{s:?}: {e}")))
    }

    /// Parse a dataset date cell. ISO dates are tried first, then day-first.
    pub fn parse_dataset_date(s: &str) -> Result<NaiveDate, DateError> {
        parse_date(s).or_else(|_| parse_date_day_first(s))
    }

}

/// Numeric helpers shared by the aggregation stages.
pub mod numbers {
    /// Arithmetic mean of `values`, or 0 when there are none.
    pub fn mean_or_zero<I>(values: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        let (sum, count) = values
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
        sum / count.max(1) as f64
    }

    /// Render a value with two decimal places, as every dashboard label does.
    pub fn fixed2(value: f64) -> String {
        format!("{value:.2}")
    }

}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
