//! Reporting periods

use jiff::civil::Date;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{year}-{month} is not a valid calendar month")]
pub struct InvalidMonth {
    pub year: i16,
    pub month: i8,
}

/// A calendar month used for daily reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    first: Date,
}

impl Month {
    /// Build a month from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMonth`] if the pair does not name a calendar month.
    pub fn new(year: i16, month: i8) -> Result<Self, InvalidMonth> {
        Date::new(year, month, 1)
            .map(|first| Self { first })
            .map_err(|_error| InvalidMonth { year, month })
    }

    #[must_use]
    pub fn first_day(self) -> Date {
        self.first
    }

    #[must_use]
    pub fn last_day(self) -> Date {
        self.first.last_of_month()
    }
}
