//! Tests for the calendar module.

use jiff::civil::{date, Weekday};

use super::*;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

#[test]
fn test_days_count_is_leap_year_correct() {
    for (number, expected) in [(2023, 365), (2024, 366), (1900, 365), (2000, 366), (0, 366)] {
        for weekday in WEEKDAYS {
            let year = Year::new(number, weekday);
            assert_eq!(year.days().count(), expected, "year {number}");
        }
    }
}

#[test]
fn test_days_are_contiguous_and_chronological() {
    let year = Year::new(2024, Weekday::Sunday);
    let days: Vec<Day> = year.days().collect();

    assert_eq!(days[0].date(), date(2024, 1, 1));
    assert_eq!(days[days.len() - 1].date(), date(2024, 12, 31));
    for pair in days.windows(2) {
        assert_eq!(pair[0].date().tomorrow().unwrap(), pair[1].date());
    }
}

#[test]
fn test_every_day_maps_to_one_month_and_one_week() {
    for weekday in WEEKDAYS {
        let year = Year::new(2025, weekday);
        let months: Vec<Month> = year.months().collect();
        let weeks: Vec<Week> = year.in_weeks().collect();

        for day in year.days() {
            let in_months = months
                .iter()
                .filter(|month| month.days().any(|d| d == day))
                .count();
            let in_weeks = weeks
                .iter()
                .filter(|week| week.contains(day.date()))
                .count();
            assert_eq!(in_months, 1, "{day} months");
            assert_eq!(in_weeks, 1, "{day} weeks");
            assert_eq!(day.month(), months[usize::from(day.month().number().unsigned_abs()) - 1]);
        }
    }
}

#[test]
fn test_sequences_are_restartable() {
    let year = Year::new(2024, Weekday::Monday);
    let first: Vec<String> = year.in_weeks().map(|w| w.reference()).collect();
    let second: Vec<String> = year.in_weeks().map(|w| w.reference()).collect();
    assert_eq!(first, second);
    assert_eq!(year.quarters().count(), 4);
    assert_eq!(year.quarters().count(), 4);
}

#[test]
fn test_weeks_start_on_configured_weekday() {
    for weekday in WEEKDAYS {
        let year = Year::new(2024, weekday);
        for week in year.in_weeks() {
            assert_eq!(week.start().weekday(), weekday);
            let days: Vec<Weekday> = week.days().map(|day| day.weekday()).collect();
            assert_eq!(days, weekdays_from(weekday).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_weeks_cover_year_boundaries() {
    // 2025-01-01 is a Wednesday, so a Monday week starts in December 2024.
    let year = Year::new(2025, Weekday::Monday);
    let weeks: Vec<Week> = year.in_weeks().collect();

    let first = weeks[0];
    assert_eq!(first.number(), 1);
    assert_eq!(first.start(), date(2024, 12, 30));
    assert_eq!(first.days_in_year().count(), 5);
    assert_eq!(first.head_month().year().number(), 2024);
    assert_eq!(first.head_month().name(), "December");
    assert_eq!(first.tail_month().name(), "January");

    let last = weeks[weeks.len() - 1];
    assert!(last.contains(date(2025, 12, 31)));
    assert_eq!(last.number() as usize, weeks.len());
}

#[test]
fn test_head_and_tail_month_equal_unless_spanning() {
    for weekday in WEEKDAYS {
        for week in Year::new(2024, weekday).in_weeks() {
            let spans = week.start().month() != week.end().month();
            assert_eq!(week.spans_months(), spans);
            if spans {
                assert_ne!(week.head_month(), week.tail_month());
            } else {
                assert_eq!(week.head_month(), week.tail_month());
            }
        }
    }
}

#[test]
fn test_leap_day_week_2024_monday() {
    let year = Year::new(2024, Weekday::Monday);
    let weeks: Vec<Week> = year
        .in_weeks()
        .filter(|week| week.contains(date(2024, 2, 29)))
        .collect();

    assert_eq!(weeks.len(), 1);
    let week = weeks[0];
    assert_eq!(week.start(), date(2024, 2, 26));
    assert_eq!(week.number(), 9);
    assert_eq!(week.head_month().name(), "February");
    assert_eq!(week.tail_month().name(), "March");
}

#[test]
fn test_references_and_labels() {
    let year = Year::new(2024, Weekday::Monday);
    assert_eq!(year.reference(), "2024");

    let q3 = year.quarters().nth(2).unwrap();
    assert_eq!(q3.name(), "Q3");
    assert_eq!(q3.reference(), "2024-quarter-3");
    let names: Vec<&str> = q3.months().map(|m| m.name()).collect();
    assert_eq!(names, ["July", "August", "September"]);

    let feb = year.months().nth(1).unwrap();
    assert_eq!(feb.reference(), "2024-month-2");
    assert_eq!(feb.short_name(), "Feb");
    assert_eq!(feb.quarter().number(), 1);
    assert_eq!(feb.days().count(), 29);

    let leap_day = year.days().nth(59).unwrap();
    assert_eq!(leap_day.reference(), "2024-day-60");
    assert_eq!(leap_day.name(), "Thu Feb 29");
    assert_eq!(year.days().next().unwrap().name(), "Mon Jan  1");
}

#[test]
fn test_references_are_unique() {
    let year = Year::new(2026, Weekday::Sunday);
    let mut refs: Vec<String> = year
        .quarters()
        .map(|q| q.reference())
        .chain(year.months().map(|m| m.reference()))
        .chain(year.in_weeks().map(|w| w.reference()))
        .chain(year.days().map(|d| d.reference()))
        .collect();
    let total = refs.len();
    refs.sort();
    refs.dedup();
    assert_eq!(refs.len(), total);
}

#[test]
fn test_month_weeks_overlap_month() {
    let year = Year::new(2024, Weekday::Monday);
    let march = year.months().nth(2).unwrap();
    let weeks: Vec<Week> = march.weeks().collect();

    // March 2024 starts on a Friday and ends on a Sunday.
    assert_eq!(weeks.len(), 5);
    assert_eq!(weeks[0].start(), date(2024, 2, 26));
    assert!(weeks[4].contains(date(2024, 3, 31)));
}

#[test]
fn test_degenerate_years_are_clamped() {
    let low = Year::new(-20_000, Weekday::Monday);
    assert_eq!(low.number(), MIN_YEAR);
    assert!(low.in_weeks().count() >= 52);

    let high = Year::new(i32::MAX, Weekday::Saturday);
    assert_eq!(high.number(), MAX_YEAR);
    assert!(high.days().count() >= 365);

    let zero = Year::new(0, Weekday::Monday);
    assert!(zero.is_leap());
    assert_eq!(zero.reference(), "0");
}

#[test]
fn test_weekdays_from_rotates() {
    let order: Vec<Weekday> = weekdays_from(Weekday::Sunday).collect();
    assert_eq!(order[0], Weekday::Sunday);
    assert_eq!(order[1], Weekday::Monday);
    assert_eq!(order[6], Weekday::Saturday);
}
