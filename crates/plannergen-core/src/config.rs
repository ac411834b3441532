//! Layout configuration.
//!
//! A [`Layout`] is the fully resolved set of page geometry constants the
//! generators and the document preamble consume. Defaults come from the
//! device table ([`Device::layout`]); a TOML [`ConfigFile`] may override whole
//! groups of them and individual template UI constants:
//!
//! ```toml
//! device = "supernote_a5x"
//!
//! [margin]
//! top = "1cm"
//! bottom = "1cm"
//! left = "0.5cm"
//! right = "0.5cm"
//!
//! [ui]
//! header_array_stretch = "2"
//! ```
//!
//! All lengths are kept as TeX dimension strings and passed through verbatim.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    devices::Device,
    error::{PlannerError, Result, ResultExt},
};

/// Physical page size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paper {
    pub width: String,
    pub height: String,
}

/// Page margins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Margin {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
}

/// Width of the margin-note column holding the month and quarter tabs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarginNotes {
    pub width: String,
    pub separator: String,
}

/// Lengths shared by the content builders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lengths {
    /// Width of one of three equal columns
    pub three_column_width: String,
    /// Gap between two of those columns
    pub three_columns_separator_width: String,
}

/// Resolved page geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Layout {
    pub paper: Paper,
    pub margin: Margin,
    pub margin_notes: MarginNotes,
    pub lengths: Lengths,
}

/// Field-by-field overrides for the months-on-sides header constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UiOverrides {
    pub header_margin_notes_array_stretch: Option<String>,
    pub header_margin_notes_months_width: Option<String>,
    pub header_margin_notes_quarters_width: Option<String>,
    pub header_array_stretch: Option<String>,
}

/// Contents of a layout file. Every table is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Device name, see [`Device`]
    pub device: Option<String>,
    pub paper: Option<Paper>,
    pub margin: Option<Margin>,
    pub margin_notes: Option<MarginNotes>,
    pub lengths: Option<Lengths>,
    #[serde(default)]
    pub ui: UiOverrides,
}

impl ConfigFile {
    /// Parses a layout file from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).with_context("parse layout file")
    }

    /// Reads and parses a layout file.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the file cannot be read and
    /// `PlannerError::Configuration` if it is not a valid layout file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| PlannerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&contents).with_context_lazy(|| format!("parse {}", path.display()))
    }

    /// The device named in the file, if any.
    pub fn device(&self) -> Result<Option<Device>> {
        self.device.as_deref().map(str::parse).transpose()
    }

    /// Merges the file's overrides over a device's default layout.
    pub fn resolve_layout(&self, device: Device) -> Layout {
        let defaults = device.layout();
        Layout {
            paper: self.paper.clone().unwrap_or(defaults.paper),
            margin: self.margin.clone().unwrap_or(defaults.margin),
            margin_notes: self.margin_notes.clone().unwrap_or(defaults.margin_notes),
            lengths: self.lengths.clone().unwrap_or(defaults.lengths),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_device_defaults() {
        let config = ConfigFile::from_toml_str("").unwrap();
        assert_eq!(config.device().unwrap(), None);
        assert_eq!(
            config.resolve_layout(Device::SupernoteA5X),
            Device::SupernoteA5X.layout()
        );
    }

    #[test]
    fn test_overrides_replace_whole_groups() {
        let config = ConfigFile::from_toml_str(
            r#"
            device = "remarkable2"

            [margin]
            top = "1cm"
            bottom = "2cm"
            left = "3mm"
            right = "4mm"

            [ui]
            header_array_stretch = "2"
            "#,
        )
        .unwrap();

        assert_eq!(config.device().unwrap(), Some(Device::ReMarkable2));
        let layout = config.resolve_layout(Device::ReMarkable2);
        assert_eq!(layout.margin.bottom, "2cm");
        assert_eq!(layout.paper, Device::ReMarkable2.layout().paper);
        assert_eq!(config.ui.header_array_stretch.as_deref(), Some("2"));
        assert_eq!(config.ui.header_margin_notes_months_width, None);
    }

    #[test]
    fn test_unknown_keys_are_configuration_errors() {
        let err = ConfigFile::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, PlannerError::Configuration { .. }));
    }

    #[test]
    fn test_unknown_device_name_is_rejected() {
        let config = ConfigFile::from_toml_str("device = \"kindle\"").unwrap();
        assert!(config.device().unwrap_err().is_device_error());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let err = ConfigFile::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, PlannerError::FileSystem { .. }));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("layout.toml");
        std::fs::write(&path, "[ui]\nheader_array_stretch = \"1.5\"\n").unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.ui.header_array_stretch.as_deref(), Some("1.5"));
    }
}
