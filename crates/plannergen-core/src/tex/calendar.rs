//! Compact month calendars used on the annual and quarterly pages.

use jiff::civil::Weekday;

use super::link;
use crate::calendar::{weekdays_from, Month};

/// One-letter column heading for a weekday.
pub fn weekday_letter(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "M",
        Weekday::Tuesday | Weekday::Thursday => "T",
        Weekday::Wednesday => "W",
        Weekday::Friday => "F",
        Weekday::Saturday | Weekday::Sunday => "S",
    }
}

/// Three-letter column heading for a weekday.
pub fn weekday_abbreviation(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

/// A small `tabular` grid of `month`: week numbers on the left, one row per
/// week, every day and week number linked to its page.
pub fn little_calendar(month: &Month) -> String {
    let first_weekday = month.year().first_weekday();

    let mut rows = Vec::new();
    let headings: Vec<&str> = std::iter::once("W")
        .chain(weekdays_from(first_weekday).map(weekday_letter))
        .collect();
    rows.push(format!("{} \\\\ \\hline", headings.join(" & ")));

    for week in month.weeks() {
        let mut cells = vec![link(&week.number().to_string(), &week.reference())];
        cells.extend(week.days().map(|day| {
            if day.month() == *month {
                link(&day.number().to_string(), &day.reference())
            } else {
                String::new()
            }
        }));
        rows.push(format!("{} \\\\", cells.join(" & ")));
    }

    format!(
        "{{\\setlength{{\\tabcolsep}}{{2pt}}\\begin{{tabular}}{{c|ccccccc}}\n{}\n\\end{{tabular}}}}",
        rows.join("\n")
    )
}
