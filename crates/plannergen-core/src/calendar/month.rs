//! Months of a calendar year.

use std::fmt;

use jiff::{
    civil::{date, Date, Weekday},
    ToSpan,
};

use super::{Day, Quarter, Week, Year};

const NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    year: Year,
    number: i8,
}

impl Month {
    pub(crate) fn new(year: Year, number: i8) -> Self {
        Self { year, number }
    }

    /// The month containing `date`.
    pub(crate) fn of(date: Date, first_weekday: Weekday) -> Self {
        Self::new(Year::of(date, first_weekday), date.month())
    }

    pub fn year(&self) -> Year {
        self.year
    }

    /// Month number, 1 for January.
    pub fn number(&self) -> i8 {
        self.number
    }

    /// Full English month name.
    pub fn name(&self) -> &'static str {
        NAMES[usize::from(self.number.unsigned_abs() - 1)]
    }

    /// Three-letter abbreviation used on margin tabs.
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    /// Anchor of the monthly page, e.g. `2024-month-2`.
    pub fn reference(&self) -> String {
        format!("{}-month-{}", self.year.number(), self.number)
    }

    pub fn first_day(&self) -> Date {
        date(self.year.number(), self.number, 1)
    }

    pub fn last_day(&self) -> Date {
        self.first_day().last_of_month()
    }

    /// The quarter this month belongs to.
    pub fn quarter(&self) -> Quarter {
        Quarter::new(self.year, (self.number.unsigned_abs() - 1) / 3 + 1)
    }

    /// Every day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = Day> {
        let first_weekday = self.year.first_weekday();
        let last = self.last_day();
        self.first_day()
            .series(1.day())
            .take_while(move |date| *date <= last)
            .map(move |date| Day::new(date, first_weekday))
    }

    /// The weeks of this month's year that overlap this month.
    pub fn weeks(&self) -> impl Iterator<Item = Week> {
        let (first, last) = (self.first_day(), self.last_day());
        self.year
            .in_weeks()
            .skip_while(move |week| week.end() < first)
            .take_while(move |week| week.start() <= last)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
