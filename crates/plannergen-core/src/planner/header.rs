//! Page header composer.
//!
//! A [`Header`] is an immutable value built from a base by applying
//! [`Modifier`]s left to right. Each modifier consumes a header and returns a
//! new one, so later modifiers overwrite what earlier ones set:
//!
//! ```text
//! Header::new(layout, ui)
//!     .apply([with_year(year), with_left("March"), with_right(cells)])
//!     .apply([select_months(vec![march])])
//! ```
//!
//! The rendered header has three navigation groups: the title row with the
//! top-level section cells, and the month and quarter tabs in the margins.
//! Selection modifiers only mark cells that already exist, so they must run
//! after [`with_year`] and [`with_right`].

use crate::{
    calendar::{Month, Quarter, Year},
    config::Layout,
    error::{PlannerError, Result},
    pages::Block,
    planner::ui::MosUi,
    tex::{Cell, Cells},
};

/// A pure header transform.
pub type Modifier<'a> = Box<dyn FnOnce(Header<'a>) -> Header<'a> + 'a>;

/// Per-page title and navigation strip.
#[derive(Debug, Clone)]
pub struct Header<'a> {
    layout: &'a Layout,
    ui: &'a MosUi,
    left: String,
    right: Cells,
    quarters: Cells,
    months: Cells,
    year: Option<Year>,
}

impl<'a> Header<'a> {
    /// A header seeded with the layout and device constants only.
    pub fn new(layout: &'a Layout, ui: &'a MosUi) -> Self {
        Self {
            layout,
            ui,
            left: String::new(),
            right: Cells::default(),
            quarters: Cells::default(),
            months: Cells::default(),
            year: None,
        }
    }

    /// Applies `modifiers` in order.
    pub fn apply<I>(self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = Modifier<'a>>,
    {
        modifiers
            .into_iter()
            .fold(self, |header, modifier| modifier(header))
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    /// Top-level navigation cells.
    pub fn right(&self) -> &Cells {
        &self.right
    }

    /// Quarter tabs.
    pub fn quarters(&self) -> &Cells {
        &self.quarters
    }

    /// Month tabs.
    pub fn months(&self) -> &Cells {
        &self.months
    }

    pub fn year(&self) -> Option<Year> {
        self.year
    }

    fn margin_tabs(&self, cells: &Cells, width: &str) -> String {
        format!(
            "\\marginnote{{\\makebox[{}][l]{{\\rotatebox[origin=tl]{{-90}}{{\\renewcommand{{\\arraystretch}}{{{}}}\\begin{{tabularx}}{{{}}}{{*{{{}}}{{|Y}}|}}\\hline {} \\\\ \\hline\\end{{tabularx}}}}}}}}",
            self.layout.margin_notes.width,
            self.ui.header_margin_notes_array_stretch,
            width,
            cells.len(),
            cells.render_row(),
        )
    }
}

impl Block for Header<'_> {
    fn build(&self) -> Result<Vec<String>> {
        if self.year.is_none() {
            return Err(PlannerError::invalid_input("header")
                .with_reason(format!("no calendar year attached to '{}'", self.left)));
        }

        let months = self.margin_tabs(&self.months, &self.ui.header_margin_notes_months_width);
        let quarters =
            self.margin_tabs(&self.quarters, &self.ui.header_margin_notes_quarters_width);
        let columns = "|r".repeat(self.right.len());
        let title_row = if self.right.is_empty() {
            format!("{{\\Huge {}}} & \\\\", self.left)
        } else {
            format!("{{\\Huge {}}} & & {} \\\\", self.left, self.right.render_row())
        };

        Ok(vec![
            format!("{months}%"),
            format!("\\reversemarginpar{quarters}\\normalmarginpar%"),
            format!("\\renewcommand{{\\arraystretch}}{{{}}}%", self.ui.header_array_stretch),
            format!("\\begin{{tabularx}}{{\\linewidth}}{{@{{}}lY{columns}@{{}}}}"),
            title_row,
            "\\end{tabularx}".to_string(),
            "\\myLineThick".to_string(),
        ])
    }
}

/// Sets the title text.
pub fn with_left<'a>(title: impl Into<String>) -> Modifier<'a> {
    let title = title.into();
    Box::new(move |header: Header<'a>| Header {
        left: title,
        ..header
    })
}

/// Sets the top-level navigation cells.
pub fn with_right<'a>(cells: Cells) -> Modifier<'a> {
    Box::new(move |header: Header<'a>| Header {
        right: cells,
        ..header
    })
}

/// Attaches the calendar year and fills the quarter and month tabs with
/// links to their pages.
pub fn with_year<'a>(year: Year) -> Modifier<'a> {
    Box::new(move |header: Header<'a>| Header {
        quarters: year
            .quarters()
            .map(|quarter| Cell::new(quarter.name()).with_reference(quarter.reference()))
            .collect(),
        months: year
            .months()
            .map(|month| Cell::new(month.short_name()).with_reference(month.reference()))
            .collect(),
        year: Some(year),
        ..header
    })
}

/// Highlights the tab of `quarter`.
pub fn select_quarter<'a>(quarter: Quarter) -> Modifier<'a> {
    Box::new(move |header: Header<'a>| Header {
        quarters: header.quarters.select_references(&[quarter.reference()]),
        ..header
    })
}

/// Highlights the tabs of `months`. Months of other years have no tab and are
/// ignored.
pub fn select_months<'a>(months: Vec<Month>) -> Modifier<'a> {
    Box::new(move |header: Header<'a>| {
        let references: Vec<String> = months.iter().map(Month::reference).collect();
        Header {
            months: header.months.select_references(&references),
            ..header
        }
    })
}
