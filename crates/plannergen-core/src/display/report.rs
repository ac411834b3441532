//! Summary of one generation run.

use std::{fmt, path::Path};

use serde::Serialize;

use crate::{
    document::Document,
    error::Result,
    params::{weekday_name, MainHand, Section},
    planner::Planner,
};

/// One written section.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SectionEntry {
    pub section: Section,
    pub file: String,
    pub pages: usize,
}

/// Wrapper type for displaying what a run produced.
///
/// Renders as markdown for the terminal and serializes to JSON for
/// `--json`.
///
/// # Examples
///
/// ```rust
/// use plannergen_core::{display::GenerationReport, params::Section, planner::PlannerBuilder};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let planner = PlannerBuilder::new(2024).build()?;
/// let document = planner.generate_document(&[Section::Title])?;
/// let report = GenerationReport::new(&planner, &document, "out".as_ref());
/// assert!(report.to_string().contains("| title | title.tex | 1 |"));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerationReport {
    pub year: i16,
    pub device: String,
    pub hand: MainHand,
    pub first_weekday: String,
    pub output_dir: String,
    pub sections: Vec<SectionEntry>,
    pub total_pages: usize,
}

impl GenerationReport {
    pub fn new(planner: &Planner, document: &Document, output_dir: &Path) -> Self {
        Self {
            year: planner.year().number(),
            device: planner.device().to_string(),
            hand: planner.hand(),
            first_weekday: weekday_name(planner.year().first_weekday()).to_string(),
            output_dir: output_dir.display().to_string(),
            sections: document
                .sections()
                .iter()
                .map(|output| SectionEntry {
                    section: output.section,
                    file: output.file_name(),
                    pages: output.pages,
                })
                .collect(),
            total_pages: document.total_pages(),
        }
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Planner {}", self.year)?;
        writeln!(f)?;
        writeln!(f, "**Device:** {}", self.device)?;
        writeln!(f, "**Hand:** {}", self.hand)?;
        writeln!(f, "**Weeks start on:** {}", self.first_weekday)?;
        writeln!(f, "**Output:** {}", self.output_dir)?;
        writeln!(f)?;
        writeln!(f, "| Section | File | Pages |")?;
        writeln!(f, "|---|---|---|")?;
        for entry in &self.sections {
            writeln!(f, "| {} | {} | {} |", entry.section, entry.file, entry.pages)?;
        }
        writeln!(f)?;
        write!(f, "Total: {} pages", self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::PlannerBuilder;

    fn report() -> GenerationReport {
        let planner = PlannerBuilder::new(2024)
            .with_hand(MainHand::Left)
            .build()
            .unwrap();
        let document = planner
            .generate_document(&[Section::Quarterlies, Section::Title])
            .unwrap();
        GenerationReport::new(&planner, &document, Path::new("/tmp/planner"))
    }

    #[test]
    fn test_markdown_report() {
        let output = report().to_string();

        assert!(output.starts_with("# Planner 2024\n"));
        assert!(output.contains("**Device:** supernote_a5x"));
        assert!(output.contains("**Hand:** left"));
        assert!(output.contains("**Weeks start on:** monday"));
        assert!(output.contains("| title | title.tex | 1 |\n| quarterlies | quarterlies.tex | 4 |"));
        assert!(output.ends_with("Total: 5 pages"));
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();

        assert_eq!(json["year"], 2024);
        assert_eq!(json["hand"], "left");
        assert_eq!(json["sections"][1]["section"], "quarterlies");
        assert_eq!(json["sections"][1]["pages"], 4);
        assert_eq!(json["total_pages"], 5);
    }
}
