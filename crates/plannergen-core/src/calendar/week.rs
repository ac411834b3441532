//! Weeks tiling a calendar year.

use std::fmt;

use jiff::{civil::Date, ToSpan};

use super::{Day, Month, Year};

/// Seven consecutive days starting on the calendar's first weekday.
///
/// The first and last week of a year may contain days of the neighbouring
/// years; [`Week::days_in_year`] skips those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    year: Year,
    start: Date,
    number: u8,
}

impl Week {
    pub(crate) fn new(year: Year, start: Date, number: u8) -> Self {
        Self {
            year,
            start,
            number,
        }
    }

    /// The calendar year this week was produced for.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Position of the week within its year, starting at 1.
    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.start.saturating_add(6.days())
    }

    /// Label such as `Week 9`.
    pub fn name(&self) -> String {
        format!("Week {}", self.number)
    }

    /// Anchor of the weekly page, e.g. `2024-week-9`.
    pub fn reference(&self) -> String {
        format!("{}-week-{}", self.year.number(), self.number)
    }

    /// All seven days, including those outside the year.
    pub fn days(&self) -> impl Iterator<Item = Day> {
        let first_weekday = self.year.first_weekday();
        self.start
            .series(1.day())
            .take(7)
            .map(move |date| Day::new(date, first_weekday))
    }

    /// Only the days that fall inside the week's year.
    pub fn days_in_year(&self) -> impl Iterator<Item = Day> {
        let number = self.year.number();
        self.days().filter(move |day| day.date().year() == number)
    }

    /// Month of the week's first day.
    pub fn head_month(&self) -> Month {
        Month::of(self.start, self.year.first_weekday())
    }

    /// Month of the week's last day.
    pub fn tail_month(&self) -> Month {
        Month::of(self.end(), self.year.first_weekday())
    }

    /// Whether the week crosses a month boundary.
    pub fn spans_months(&self) -> bool {
        self.head_month() != self.tail_month()
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end()
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week {}", self.number)
    }
}
