//! Listings of the values the CLI accepts.

use std::fmt;

use crate::{devices::Device, params::Section};

/// Wrapper type for displaying the supported devices.
pub struct Devices(pub Vec<Device>);

impl fmt::Display for Devices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Devices")?;
        writeln!(f)?;
        for device in &self.0 {
            writeln!(f, "- **{}**: {}", device.as_str(), device.description())?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying the available sections, in canonical order.
pub struct Sections(pub Vec<Section>);

impl fmt::Display for Sections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Sections")?;
        writeln!(f)?;
        for (index, section) in self.0.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, section)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devices_listing() {
        let output = Devices(Device::ALL.to_vec()).to_string();
        assert!(output.starts_with("# Devices\n\n"));
        assert!(output.contains("- **supernote_a6x**: "));
        assert!(output.contains("- **remarkable2**: "));
    }

    #[test]
    fn test_sections_listing_is_numbered() {
        let output = Sections(Section::ALL.to_vec()).to_string();
        assert!(output.contains("1. title\n"));
        assert!(output.contains("8. notes\n"));
    }
}
