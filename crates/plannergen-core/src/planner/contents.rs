//! Content blocks, one per page family.

use crate::{
    calendar::{weekdays_from, Day, Month, Quarter, Week, Year},
    error::Result,
    pages::Block,
    params::MainHand,
    tex::{
        calendar::weekday_abbreviation, dot_grid, link, little_calendar, snippets, strut, target,
        Tabularx,
    },
};

/// Pages in each of the to-do and notes sections, index excluded.
pub const NUMBERED_PAGES: usize = 100;

/// Anchor of the to-do index page.
pub const TODO_INDEX_REFERENCE: &str = "todo-index";

/// Anchor of the notes index page.
pub const NOTES_INDEX_REFERENCE: &str = "notes-index";

/// Anchor of the notes page attached to a calendar entity.
pub fn notes_reference(entity_reference: &str) -> String {
    format!("{entity_reference}-notes")
}

/// Month name linked to its page, above its little calendar.
fn titled_little_calendar(month: &Month) -> String {
    format!(
        "{}\\newline {}",
        link(month.name(), &month.reference()),
        little_calendar(month)
    )
}

pub struct TitleContents {
    pub year: Year,
}

impl Block for TitleContents {
    fn build(&self) -> Result<Vec<String>> {
        Ok(snippets::title(&self.year.to_string()))
    }
}

/// The whole year as twelve little calendars.
pub struct AnnualContents {
    pub year: Year,
}

impl Block for AnnualContents {
    fn build(&self) -> Result<Vec<String>> {
        let months: Vec<Month> = self.year.months().collect();

        let mut table = Tabularx::new("\\linewidth", "@{}YYY@{}");
        for row in months.chunks(3) {
            table.add_row(row.iter().map(titled_little_calendar).collect());
        }

        let mut lines = vec![target(&self.year.reference())];
        lines.extend(table.render());
        Ok(lines)
    }
}

pub struct QuarterlyContents {
    pub quarter: Quarter,
}

impl Block for QuarterlyContents {
    fn build(&self) -> Result<Vec<String>> {
        let mut table = Tabularx::new("\\linewidth", "@{}YYY@{}");
        table.add_row(self.quarter.months().map(|month| titled_little_calendar(&month)).collect());

        let mut lines = vec![target(&self.quarter.reference())];
        lines.extend(table.render());
        lines.extend([
            "\\vskip5mm\\myUnderline{Notes}".to_string(),
            format!("\\vspace{{5mm}}\\hspace{{.5mm}}\\vbox to 0mm{{{}}}", dot_grid(26, 28)),
        ]);
        Ok(lines)
    }
}

/// A full month grid: week numbers down the side, days linked to their pages.
pub struct MonthlyContents {
    pub month: Month,
}

impl MonthlyContents {
    fn day_cell(&self, day: &Day) -> String {
        if day.month() == self.month {
            format!("\\hfill{}", link(&day.number().to_string(), &day.reference()))
        } else {
            String::new()
        }
    }
}

impl Block for MonthlyContents {
    fn build(&self) -> Result<Vec<String>> {
        let mut table = Tabularx::new("\\linewidth", "|c|*{7}{Y|}").with_hlines();

        let first_weekday = self.month.year().first_weekday();
        let mut headings = vec![String::new()];
        headings.extend(
            weekdays_from(first_weekday).map(|weekday| weekday_abbreviation(weekday).to_string()),
        );
        table.add_row(headings);

        for week in self.month.weeks() {
            let mut cells = vec![format!(
                "{}{}",
                strut("18mm"),
                link(&week.number().to_string(), &week.reference())
            )];
            cells.extend(week.days().map(|day| self.day_cell(&day)));
            table.add_row(cells);
        }

        let mut lines = vec![target(&self.month.reference())];
        lines.extend(table.render());
        lines.extend([
            "\\vskip5mm\\myUnderline{Notes}".to_string(),
            format!("\\vspace{{5mm}}\\hspace{{.5mm}}\\vbox to 0mm{{{}}}", dot_grid(10, 28)),
        ]);
        Ok(lines)
    }
}

/// Seven day boxes and a notes box, two per row.
pub struct WeeklyContents {
    pub week: Week,
}

impl WeeklyContents {
    fn day_box(&self, day: &Day) -> String {
        let label = if day.date().year() == self.week.year().number() {
            link(&day.name(), &day.reference())
        } else {
            day.name()
        };
        format!("\\parbox[t][40mm][t]{{\\linewidth}}{{{label}}}")
    }
}

impl Block for WeeklyContents {
    fn build(&self) -> Result<Vec<String>> {
        let mut boxes: Vec<String> = self.week.days().map(|day| self.day_box(&day)).collect();
        boxes.push("\\parbox[t][40mm][t]{\\linewidth}{Notes}".to_string());

        let mut table = Tabularx::new("\\linewidth", "|X|X|").with_hlines();
        for row in boxes.chunks(2) {
            table.add_row(row.to_vec());
        }

        let mut lines = vec![target(&self.week.reference())];
        lines.extend(table.render());
        Ok(lines)
    }
}

/// Schedule and priorities columns for one day; mirrored for left hands.
pub struct DailyContents {
    pub day: Day,
    pub hand: MainHand,
}

impl DailyContents {
    fn schedule_column(&self) -> String {
        let hours: Vec<String> = (5..=23)
            .map(|hour| format!("{}{hour:02}\\myLineLightGray\n\\vskip5mm\\myLineGray", self.height()))
            .collect();

        format!(
            "\\begin{{minipage}}[t]{{\\myLengthThreeColumnWidth}}\n\\myUnderline{{Schedule\\textcolor{{white}}{{g}}}}\n{}\n\\vskip5mm\\myLineLightGray\n\\end{{minipage}}",
            hours.join("\n")
        )
    }

    fn priorities_and_notes_column(&self) -> String {
        let priorities: Vec<String> = (0..8)
            .map(|_| format!("{}$\\square$\\myLineGray", self.height()))
            .collect();

        format!(
            "\\begin{{minipage}}[t]{{\\dimexpr2\\myLengthThreeColumnWidth+\\myLengthThreeColumnsSeparatorWidth}}\n\\myUnderline{{Top Priorities}}\n{}\n\\vskip7mm\\myUnderline{{Notes | {}}}\n\\vspace{{5mm}}\\hspace{{.5mm}}\\vbox to 0mm{{{}}}\n\\end{{minipage}}",
            priorities.join("\n"),
            link("More", &notes_reference(&self.day.reference())),
            dot_grid(30, 19),
        )
    }

    fn height(&self) -> String {
        strut("5mm")
    }
}

impl Block for DailyContents {
    fn build(&self) -> Result<Vec<String>> {
        let mut left = self.schedule_column();
        let mut right = self.priorities_and_notes_column();

        if self.hand == MainHand::Left {
            std::mem::swap(&mut left, &mut right);
        }

        Ok(vec![
            target(&self.day.reference()),
            format!("\\noindent\\vskip1mm{left}\\hspace{{5mm}}{right}"),
        ])
    }
}

/// Index page linking to every numbered page of a section.
fn index_lines(index_reference: &str, page_prefix: &str, label: &str, pages: usize) -> Vec<String> {
    let links: Vec<String> = (1..=pages)
        .map(|number| link(&format!("{label} {number}"), &format!("{page_prefix}-{number}")))
        .collect();

    let mut table = Tabularx::new("\\linewidth", "@{}*{4}{Y}@{}");
    for row in links.chunks(4) {
        table.add_row(row.to_vec());
    }

    let mut lines = vec![target(index_reference)];
    lines.extend(table.render());
    lines
}

pub struct TodoIndex {
    pub pages: usize,
}

impl Block for TodoIndex {
    fn build(&self) -> Result<Vec<String>> {
        Ok(index_lines(TODO_INDEX_REFERENCE, "todo", "To Do", self.pages))
    }
}

/// One checklist page.
pub struct TodoContents {
    pub number: usize,
}

impl Block for TodoContents {
    fn build(&self) -> Result<Vec<String>> {
        let mut lines = vec![target(&format!("todo-{}", self.number))];
        lines.extend((0..25).map(|_| format!("{}$\\square$\\myLineGray", strut("5mm"))));
        Ok(lines)
    }
}

pub struct NotesIndex {
    pub pages: usize,
}

impl Block for NotesIndex {
    fn build(&self) -> Result<Vec<String>> {
        Ok(index_lines(NOTES_INDEX_REFERENCE, "notes", "Notes", self.pages))
    }
}

/// One dot-grid notes page.
pub struct NotesContents {
    pub number: usize,
}

impl Block for NotesContents {
    fn build(&self) -> Result<Vec<String>> {
        Ok(vec![
            target(&format!("notes-{}", self.number)),
            format!("\\vspace{{5mm}}\\hspace{{.5mm}}\\vbox to 0mm{{{}}}", dot_grid(36, 28)),
        ])
    }
}
