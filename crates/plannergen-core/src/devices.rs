//! Device table: target tablets and their page geometry.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    config::{Layout, Lengths, Margin, MarginNotes, Paper},
    error::PlannerError,
};

/// Tablets the planner can be laid out for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Device {
    #[default]
    #[serde(rename = "supernote_a5x")]
    SupernoteA5X,
    #[serde(rename = "supernote_a6x")]
    SupernoteA6X,
    #[serde(rename = "remarkable2")]
    ReMarkable2,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::SupernoteA5X, Device::SupernoteA6X, Device::ReMarkable2];

    /// Name used on the command line and in layout files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::SupernoteA5X => "supernote_a5x",
            Device::SupernoteA6X => "supernote_a6x",
            Device::ReMarkable2 => "remarkable2",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Device::SupernoteA5X => "Supernote A5 X, 10.3\" 1404x1872",
            Device::SupernoteA6X => "Supernote A6 X, 7.8\" 1404x1872",
            Device::ReMarkable2 => "reMarkable 2, 10.3\" 1404x1872",
        }
    }

    /// Default page geometry for the device's screen.
    pub fn layout(&self) -> Layout {
        match self {
            Device::SupernoteA5X => Layout {
                paper: paper("15.6cm", "20.8cm"),
                margin: margin("1cm", "1cm", "0.5cm", "0.5cm"),
                margin_notes: margin_notes("1cm", "1mm"),
                lengths: lengths("4.16cm", "5mm"),
            },
            Device::SupernoteA6X => Layout {
                paper: paper("11.9cm", "15.9cm"),
                margin: margin("0.8cm", "0.8cm", "0.4cm", "0.4cm"),
                margin_notes: margin_notes("0.8cm", "1mm"),
                lengths: lengths("3.05cm", "4mm"),
            },
            Device::ReMarkable2 => Layout {
                paper: paper("15.7cm", "20.9cm"),
                margin: margin("1cm", "1cm", "1.2cm", "0.5cm"),
                margin_notes: margin_notes("1cm", "1mm"),
                lengths: lengths("3.98cm", "5mm"),
            },
        }
    }
}

impl FromStr for Device {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Device::ALL
            .into_iter()
            .find(|device| device.as_str() == normalized)
            .ok_or_else(|| PlannerError::unknown_device(s))
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn paper(width: &str, height: &str) -> Paper {
    Paper {
        width: width.to_string(),
        height: height.to_string(),
    }
}

fn margin(top: &str, bottom: &str, left: &str, right: &str) -> Margin {
    Margin {
        top: top.to_string(),
        bottom: bottom.to_string(),
        left: left.to_string(),
        right: right.to_string(),
    }
}

fn margin_notes(width: &str, separator: &str) -> MarginNotes {
    MarginNotes {
        width: width.to_string(),
        separator: separator.to_string(),
    }
}

fn lengths(three_column_width: &str, three_columns_separator_width: &str) -> Lengths {
    Lengths {
        three_column_width: three_column_width.to_string(),
        three_columns_separator_width: three_columns_separator_width.to_string(),
    }
}
