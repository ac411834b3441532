//! Quarters of a calendar year.

use std::fmt;

use super::{Month, Year};

/// One of the four quarters of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quarter {
    year: Year,
    number: u8,
}

impl Quarter {
    pub(crate) fn new(year: Year, number: u8) -> Self {
        Self { year, number }
    }

    pub fn year(&self) -> Year {
        self.year
    }

    /// Quarter number, 1 to 4.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Label such as `Q3`.
    pub fn name(&self) -> String {
        format!("Q{}", self.number)
    }

    /// Anchor of the quarterly page, e.g. `2024-quarter-3`.
    pub fn reference(&self) -> String {
        format!("{}-quarter-{}", self.year.number(), self.number)
    }

    /// The three months of the quarter, in order.
    pub fn months(&self) -> impl Iterator<Item = Month> {
        let year = self.year;
        let first = i8::try_from(self.number * 3 - 2).unwrap_or(1);
        (first..first + 3).map(move |number| Month::new(year, number))
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number)
    }
}
