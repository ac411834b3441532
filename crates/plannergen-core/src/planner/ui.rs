//! Device-specific header constants of the months-on-sides template.

use serde::{Deserialize, Serialize};

use crate::{
    config::UiOverrides,
    devices::Device,
    error::{PlannerError, Result},
};

/// Name of the template these constants belong to.
pub const TEMPLATE: &str = "mos";

/// Header constants for one device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MosUi {
    /// Row stretch of the month and quarter margin tabs
    pub header_margin_notes_array_stretch: String,
    /// Length of the rotated month tab row
    pub header_margin_notes_months_width: String,
    /// Length of the rotated quarter tab row
    pub header_margin_notes_quarters_width: String,
    /// Row stretch of the title row
    pub header_array_stretch: String,
}

impl MosUi {
    /// Looks up the constants for `device`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::UnsupportedDevice` for devices the template has
    /// no constants for.
    pub fn for_device(device: Device) -> Result<Self> {
        match device {
            Device::SupernoteA5X => Ok(Self::new("2.042", "15.7cm", "5cm", "1.8185")),
            Device::SupernoteA6X => Ok(Self::new("1.6", "11.8cm", "3.8cm", "1.5")),
            other => Err(PlannerError::unsupported_device(other.as_str(), TEMPLATE)),
        }
    }

    fn new(
        margin_notes_array_stretch: &str,
        months_width: &str,
        quarters_width: &str,
        array_stretch: &str,
    ) -> Self {
        Self {
            header_margin_notes_array_stretch: margin_notes_array_stretch.to_string(),
            header_margin_notes_months_width: months_width.to_string(),
            header_margin_notes_quarters_width: quarters_width.to_string(),
            header_array_stretch: array_stretch.to_string(),
        }
    }

    /// Replaces every constant the layout file sets.
    pub fn with_overrides(self, overrides: &UiOverrides) -> Self {
        let pick = |value: &Option<String>, default: String| value.clone().unwrap_or(default);

        Self {
            header_margin_notes_array_stretch: pick(
                &overrides.header_margin_notes_array_stretch,
                self.header_margin_notes_array_stretch,
            ),
            header_margin_notes_months_width: pick(
                &overrides.header_margin_notes_months_width,
                self.header_margin_notes_months_width,
            ),
            header_margin_notes_quarters_width: pick(
                &overrides.header_margin_notes_quarters_width,
                self.header_margin_notes_quarters_width,
            ),
            header_array_stretch: pick(&overrides.header_array_stretch, self.header_array_stretch),
        }
    }
}
