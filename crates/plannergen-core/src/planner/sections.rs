//! One generator per section.
//!
//! Every generator writes header-plus-contents pages into a fresh
//! [`PageBuffer`] and returns it. Page failures are labelled with the
//! `write to buffer` stage.

use super::{
    contents::{
        AnnualContents, DailyContents, MonthlyContents, NotesContents, NotesIndex,
        QuarterlyContents, TitleContents, TodoContents, TodoIndex, WeeklyContents,
        NUMBERED_PAGES,
    },
    header::{select_months, select_quarter, with_right},
    Planner, CALENDAR_TEXT, NOTES_TEXT, TODO_TEXT,
};
use crate::{
    error::{Result, StageResultExt},
    pages::PageBuffer,
};

impl Planner {
    pub(super) fn title_section(&self) -> Result<PageBuffer> {
        let mut buffer = PageBuffer::new();
        let contents = TitleContents { year: self.year };
        buffer
            .write_blocks(&[&contents])
            .stage("write to buffer")?;
        Ok(buffer)
    }

    pub(super) fn annual_section(&self) -> Result<PageBuffer> {
        let mut buffer = PageBuffer::new();
        let header = self
            .header_with_title(self.year.to_string())
            .apply([with_right(self.right_cells().select(CALENDAR_TEXT))]);
        let contents = AnnualContents { year: self.year };

        buffer
            .write_blocks(&[&header, &contents])
            .stage("write to buffer")?;
        Ok(buffer)
    }

    pub(super) fn quarterlies_section(&self) -> Result<PageBuffer> {
        let mut buffer = PageBuffer::new();
        for quarter in self.year.quarters() {
            let header = self
                .header_with_title(quarter.to_string())
                .apply([select_quarter(quarter)]);
            let contents = QuarterlyContents { quarter };

            buffer
                .write_blocks(&[&header, &contents])
                .stage("write to buffer")?;
        }
        Ok(buffer)
    }

    pub(super) fn monthlies_section(&self) -> Result<PageBuffer> {
        let mut buffer = PageBuffer::new();
        for month in self.year.months() {
            let header = self
                .header_with_title(month.name())
                .apply([select_months(vec![month])]);
            let contents = MonthlyContents { month };

            buffer
                .write_blocks(&[&header, &contents])
                .stage("write to buffer")?;
        }
        Ok(buffer)
    }

    pub(super) fn weeklies_section(&self) -> Result<PageBuffer> {
        let mut buffer = PageBuffer::new();
        for week in self.year.in_weeks() {
            let mut months = vec![week.head_month()];
            if week.spans_months() {
                months.push(week.tail_month());
            }

            let header = self
                .header_with_title(week.name())
                .apply([select_months(months)]);
            let contents = WeeklyContents { week };

            buffer
                .write_blocks(&[&header, &contents])
                .stage("write to buffer")?;
        }
        Ok(buffer)
    }

    pub(super) fn dailies_section(&self) -> Result<PageBuffer> {
        let mut buffer = PageBuffer::new();
        for day in self.year.days() {
            let header = self
                .header_with_title(day.name())
                .apply([select_months(vec![day.month()])]);
            let contents = DailyContents {
                day,
                hand: self.hand,
            };

            buffer
                .write_blocks(&[&header, &contents])
                .stage("write to buffer")?;
        }
        Ok(buffer)
    }

    pub(super) fn todo_section(&self) -> Result<PageBuffer> {
        let mut buffer = PageBuffer::new();

        let header = self
            .header_with_title(TODO_TEXT)
            .apply([with_right(self.right_cells().select(TODO_TEXT))]);
        let index = TodoIndex {
            pages: NUMBERED_PAGES,
        };
        buffer
            .write_blocks(&[&header, &index])
            .stage("write to buffer")?;

        for number in 1..=NUMBERED_PAGES {
            let header = self.header_with_title(number.to_string());
            let contents = TodoContents { number };
            buffer
                .write_blocks(&[&header, &contents])
                .stage("write to buffer")?;
        }

        Ok(buffer)
    }

    pub(super) fn notes_section(&self) -> Result<PageBuffer> {
        let mut buffer = PageBuffer::new();

        let header = self
            .header_with_title(NOTES_TEXT)
            .apply([with_right(self.right_cells().select(NOTES_TEXT))]);
        let index = NotesIndex {
            pages: NUMBERED_PAGES,
        };
        buffer
            .write_blocks(&[&header, &index])
            .stage("write to buffer")?;

        for number in 1..=NUMBERED_PAGES {
            let header = self.header_with_title(number.to_string());
            let contents = NotesContents { number };
            buffer
                .write_blocks(&[&header, &contents])
                .stage("write to buffer")?;
        }

        Ok(buffer)
    }
}
