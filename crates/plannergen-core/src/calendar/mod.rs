//! Calendar model for one planner year.
//!
//! A [`Year`] is decomposed on demand into [`Quarter`]s, [`Month`]s,
//! [`Week`]s and [`Day`]s. Every accessor returns a fresh iterator, so the
//! sequences are lazy, finite and restartable, and always chronological.
//!
//! ```text
//! Year ──▶ Quarter (4) ──▶ Month (3 each) ──▶ Day
//!   └────▶ Week (52..=54, starting on the configured weekday) ──▶ Day (7)
//! ```
//!
//! Weeks tile the year: the first week is the one containing January 1 and
//! the last one contains December 31, so the first and last weeks may borrow
//! days from the neighbouring years.
//!
//! Every entity exposes a [`reference`](Year::reference) that is unique within
//! one generated document and is used as a hyperlink anchor.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::Weekday;
//! use plannergen_core::calendar::Year;
//!
//! let year = Year::new(2024, Weekday::Monday);
//! assert_eq!(year.days().count(), 366);
//! assert_eq!(year.months().count(), 12);
//!
//! let leap_week = year
//!     .in_weeks()
//!     .find(|week| week.days().any(|day| day.reference() == "2024-day-60"))
//!     .unwrap();
//! assert_eq!(leap_week.head_month().name(), "February");
//! assert_eq!(leap_week.tail_month().name(), "March");
//! ```

use jiff::{
    civil::{date, Date, Weekday},
    ToSpan,
};

pub mod day;
pub mod month;
pub mod quarter;
pub mod week;

#[cfg(test)]
mod tests;

pub use day::Day;
pub use month::Month;
pub use quarter::Quarter;
pub use week::Week;

/// Smallest year accepted by [`Year::new`]; smaller values are clamped.
pub const MIN_YEAR: i16 = -9998;

/// Largest year accepted by [`Year::new`]; larger values are clamped.
pub const MAX_YEAR: i16 = 9998;

/// Root of the calendar: a year number plus the weekday weeks start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Year {
    number: i16,
    first_weekday: Weekday,
}

impl Year {
    /// Creates a calendar year.
    ///
    /// Years are never rejected. Year 0 is the proleptic Gregorian year 0
    /// (a leap year). Values outside [`MIN_YEAR`]..=[`MAX_YEAR`] are clamped
    /// so the weeks spilling into neighbouring years stay representable.
    pub fn new(year: i32, first_weekday: Weekday) -> Self {
        let clamped = year.clamp(i32::from(MIN_YEAR), i32::from(MAX_YEAR));
        Self {
            number: i16::try_from(clamped).unwrap_or(MAX_YEAR),
            first_weekday,
        }
    }

    /// Year of a date borrowed from a neighbouring year; skips clamping.
    pub(crate) fn of(date: Date, first_weekday: Weekday) -> Self {
        Self {
            number: date.year(),
            first_weekday,
        }
    }

    /// The year number.
    pub fn number(&self) -> i16 {
        self.number
    }

    /// The weekday every week of this calendar starts on.
    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Anchor of the annual overview page.
    pub fn reference(&self) -> String {
        self.number.to_string()
    }

    /// Whether the year has 366 days.
    pub fn is_leap(&self) -> bool {
        self.first_day().in_leap_year()
    }

    /// January 1 of this year.
    pub fn first_day(&self) -> Date {
        date(self.number, 1, 1)
    }

    /// December 31 of this year.
    pub fn last_day(&self) -> Date {
        date(self.number, 12, 31)
    }

    /// The four quarters, in order.
    pub fn quarters(&self) -> impl Iterator<Item = Quarter> {
        let year = *self;
        (1..=4).map(move |number| Quarter::new(year, number))
    }

    /// The twelve months, in order.
    pub fn months(&self) -> impl Iterator<Item = Month> {
        let year = *self;
        (1..=12).map(move |number| Month::new(year, number))
    }

    /// Every day of the year, January 1 through December 31.
    pub fn days(&self) -> impl Iterator<Item = Day> {
        let year = *self;
        self.first_day()
            .series(1.day())
            .take_while(move |date| date.year() == year.number)
            .map(move |date| Day::new(date, year.first_weekday))
    }

    /// The weeks tiling this year, numbered from 1.
    pub fn in_weeks(&self) -> impl Iterator<Item = Week> {
        let year = *self;
        let last = self.last_day();
        week_start(self.first_day(), self.first_weekday)
            .series(1.week())
            .take_while(move |start| *start <= last)
            .zip(1u8..)
            .map(move |(start, number)| Week::new(year, start, number))
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// First day of the week containing `date`, for weeks starting on `first`.
pub(crate) fn week_start(date: Date, first: Weekday) -> Date {
    let offset =
        (date.weekday().to_monday_zero_offset() - first.to_monday_zero_offset()).rem_euclid(7);
    date.saturating_sub(i64::from(offset).days())
}

/// Weekdays in display order for weeks starting on `first`.
pub fn weekdays_from(first: Weekday) -> impl Iterator<Item = Weekday> {
    (0..7).map(move |offset| first.wrapping_add(offset))
}
