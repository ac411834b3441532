//! A single calendar day.

use std::fmt;

use jiff::civil::{Date, Weekday};

use super::{Month, Year};

/// One day, carrying the weekday its calendar's weeks start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    date: Date,
    first_weekday: Weekday,
}

impl Day {
    pub(crate) fn new(date: Date, first_weekday: Weekday) -> Self {
        Self {
            date,
            first_weekday,
        }
    }

    /// The civil date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Day of the month, 1-based.
    pub fn number(&self) -> i8 {
        self.date.day()
    }

    /// Day of the year, 1-based.
    pub fn ordinal(&self) -> i16 {
        self.date.day_of_year()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// The month this day belongs to.
    pub fn month(&self) -> Month {
        Month::of(self.date, self.first_weekday)
    }

    /// Page title, e.g. `Thu Feb 29` or `Mon Jan  1`.
    pub fn name(&self) -> String {
        self.date.strftime("%a %b %e").to_string()
    }

    /// Anchor of the daily page, e.g. `2024-day-60`.
    pub fn reference(&self) -> String {
        format!(
            "{}-day-{}",
            Year::of(self.date, self.first_weekday).number(),
            self.ordinal()
        )
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
