//! Planner orchestration: from a configured year to section markup.
//!
//! A [`Planner`] owns everything a run needs, resolved once by the
//! [`PlannerBuilder`]: the calendar year, the stylus hand, the page layout and
//! the device's header constants. Generation is a pure function of those
//! values.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ PlannerBuilder  │    │     Planner     │    │    Document     │
//! │ (device, layout,│───▶│ generate(sect.) │───▶│ section texts + │
//! │  ui constants)  │    │  per section    │    │ root preamble   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Resolves device, layout and UI constants into a [`Planner`]
//! - [`header`]: The header value and its modifiers
//! - [`contents`]: Content blocks for every page family
//! - [`ui`]: Device constants of the months-on-sides header template
//!
//! # Usage
//!
//! ```rust
//! use jiff::civil::Weekday;
//! use plannergen_core::{params::Section, planner::PlannerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new(2024).with_weekday(Weekday::Sunday).build()?;
//! let dailies = planner.generate(Section::Dailies)?;
//! assert_eq!(dailies.page_count(), 366);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use log::debug;

pub mod builder;
pub mod contents;
pub mod header;
mod sections;
pub mod ui;


pub use builder::PlannerBuilder;
use header::{with_left, with_right, with_year, Header};
use ui::MosUi;

use crate::{
    calendar::Year,
    config::Layout,
    devices::Device,
    document::{Document, SectionOutput},
    error::Result,
    pages::PageBuffer,
    params::{MainHand, Section},
    tex::{snippets::PreambleOptions, Cell, Cells},
};

/// Label of the navigation cell linking to the annual page.
pub const CALENDAR_TEXT: &str = "Calendar";

/// Label of the navigation cell linking to the to-do index.
pub const TODO_TEXT: &str = "To Do";

/// Label of the navigation cell linking to the notes index.
pub const NOTES_TEXT: &str = "Notes";

/// A fully configured planner.
#[derive(Debug, Clone)]
pub struct Planner {
    year: Year,
    hand: MainHand,
    device: Device,
    layout: Layout,
    ui: MosUi,
    options: PreambleOptions,
}

impl Planner {
    pub fn year(&self) -> Year {
        self.year
    }

    pub fn hand(&self) -> MainHand {
        self.hand
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn ui(&self) -> &MosUi {
        &self.ui
    }

    /// Generates the pages of one section.
    ///
    /// # Errors
    ///
    /// Returns the first page failure, wrapped with the `write to buffer`
    /// stage.
    pub fn generate(&self, section: Section) -> Result<PageBuffer> {
        let buffer = match section {
            Section::Title => self.title_section(),
            Section::Annual => self.annual_section(),
            Section::Quarterlies => self.quarterlies_section(),
            Section::Monthlies => self.monthlies_section(),
            Section::Weeklies => self.weeklies_section(),
            Section::Dailies => self.dailies_section(),
            Section::ToDo => self.todo_section(),
            Section::Notes => self.notes_section(),
        }?;

        debug!("generated section {section}: {} pages", buffer.page_count());
        Ok(buffer)
    }

    /// Generates `sections` in canonical order, regardless of the order given.
    ///
    /// # Errors
    ///
    /// Stops at the first failing section and returns its error wrapped as
    /// `PlannerError::Section`.
    pub fn generate_document(&self, sections: &[Section]) -> Result<Document> {
        let mut selected = sections.to_vec();
        selected.sort();
        selected.dedup();

        let outputs = selected
            .into_iter()
            .map(|section| {
                let buffer = self.generate(section).map_err(|e| e.in_section(section))?;
                Ok(SectionOutput {
                    section,
                    pages: buffer.page_count(),
                    text: buffer.into_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Document::new(self.layout.clone(), self.options, outputs))
    }

    /// Top-level navigation: the annual page and the two index pages.
    fn right_cells(&self) -> Cells {
        Cells(vec![
            Cell::new(CALENDAR_TEXT).with_reference(self.year.reference()),
            Cell::new(TODO_TEXT).with_reference(contents::TODO_INDEX_REFERENCE),
            Cell::new(NOTES_TEXT).with_reference(contents::NOTES_INDEX_REFERENCE),
        ])
    }

    /// The header every page starts from: year tabs and navigation attached.
    fn header_with_title(&self, title: impl Into<String>) -> Header<'_> {
        Header::new(&self.layout, &self.ui).apply([
            with_year(self.year),
            with_right(self.right_cells()),
            with_left(title),
        ])
    }
}
