//! Parameter structures for planner generation
//!
//! This module contains the run parameters shared by every interface (the CLI
//! today) without framework-specific derives. Interface layers parse their
//! own arguments and convert them into these types:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │ PlannerBuilder  │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   / Planner     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! String parsing lives here (`FromStr`) so every interface accepts the same
//! spellings for sections, hands and weekdays.

use std::{fmt, str::FromStr};

use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

use crate::{
    devices::Device,
    error::{PlannerError, Result},
};

/// Top-level groups of generated pages, in document order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Title,
    Annual,
    Quarterlies,
    Monthlies,
    Weeklies,
    Dailies,
    #[serde(rename = "todo")]
    ToDo,
    Notes,
}

impl Section {
    /// Every section in canonical document order.
    pub const ALL: [Section; 8] = [
        Section::Title,
        Section::Annual,
        Section::Quarterlies,
        Section::Monthlies,
        Section::Weeklies,
        Section::Dailies,
        Section::ToDo,
        Section::Notes,
    ];

    /// Constant name, also used as the section's file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Title => "title",
            Section::Annual => "annual",
            Section::Quarterlies => "quarterlies",
            Section::Monthlies => "monthlies",
            Section::Weeklies => "weeklies",
            Section::Dailies => "dailies",
            Section::ToDo => "todo",
            Section::Notes => "notes",
        }
    }

    /// Parses a comma-separated list, deduplicating and sorting into
    /// canonical order. An empty list selects every section.
    pub fn parse_list(names: &[String]) -> Result<Vec<Section>> {
        if names.is_empty() {
            return Ok(Section::ALL.to_vec());
        }

        let mut sections = names
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<Section>>>()?;
        sections.sort();
        sections.dedup();
        Ok(sections)
    }
}

impl FromStr for Section {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == normalized)
            .ok_or_else(|| {
                PlannerError::invalid_input("sections").with_reason(format!("unknown section: {s}"))
            })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hand holding the stylus; mirrors the daily page layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MainHand {
    #[default]
    Right,
    Left,
}

impl MainHand {
    pub fn as_str(&self) -> &'static str {
        match self {
            MainHand::Right => "right",
            MainHand::Left => "left",
        }
    }
}

impl FromStr for MainHand {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "right" => Ok(MainHand::Right),
            "left" => Ok(MainHand::Left),
            _ => Err(PlannerError::invalid_input("hand").with_reason(format!("expected right or left, got {s}"))),
        }
    }
}

impl fmt::Display for MainHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a first-weekday argument.
///
/// Accepts English names (`monday`, `mon`) or a number where 0 is Sunday and
/// 6 is Saturday.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    let normalized = s.trim().to_lowercase();
    let weekday = match normalized.as_str() {
        "0" | "sunday" | "sun" => Weekday::Sunday,
        "1" | "monday" | "mon" => Weekday::Monday,
        "2" | "tuesday" | "tue" => Weekday::Tuesday,
        "3" | "wednesday" | "wed" => Weekday::Wednesday,
        "4" | "thursday" | "thu" => Weekday::Thursday,
        "5" | "friday" | "fri" => Weekday::Friday,
        "6" | "saturday" | "sat" => Weekday::Saturday,
        _ => {
            return Err(PlannerError::invalid_input("weekday")
                .with_reason(format!("expected a weekday name or 0-6, got {s}")))
        }
    };
    Ok(weekday)
}

/// Lowercase English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "sunday",
        Weekday::Monday => "monday",
        Weekday::Tuesday => "tuesday",
        Weekday::Wednesday => "wednesday",
        Weekday::Thursday => "thursday",
        Weekday::Friday => "friday",
        Weekday::Saturday => "saturday",
    }
}

/// Parameters for one planner generation run.
#[derive(Debug, Clone)]
pub struct Generate {
    /// Calendar year to generate
    pub year: i32,
    /// Weekday every week starts on
    pub weekday: Weekday,
    /// Stylus hand, mirrors daily pages when left
    pub hand: MainHand,
    /// Target device
    pub device: Device,
    /// Sections to generate, in canonical order
    pub sections: Vec<Section>,
    /// Draw geometry frames in the compiled document
    pub show_frames: bool,
    /// Draw visible borders around hyperlinks
    pub show_links: bool,
}

impl Default for Generate {
    fn default() -> Self {
        Self {
            year: 2024,
            weekday: Weekday::Monday,
            hand: MainHand::Right,
            device: Device::SupernoteA5X,
            sections: Section::ALL.to_vec(),
            show_frames: false,
            show_links: false,
        }
    }
}
