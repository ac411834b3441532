//! Generated document: section texts plus the root file that includes them.

use std::path::{Path, PathBuf};

use log::info;

use crate::{
    config::Layout,
    error::{PlannerError, Result},
    params::Section,
    tex::snippets::{self, PreambleOptions},
};

/// File name of the root document.
pub const ROOT_FILE: &str = "document.tex";

/// Markup and page count of one generated section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutput {
    pub section: Section,
    pub text: String,
    pub pages: usize,
}

impl SectionOutput {
    /// Name of the file the section is written to.
    pub fn file_name(&self) -> String {
        format!("{}.tex", self.section)
    }
}

/// All sections of one run, in canonical order.
#[derive(Debug, Clone)]
pub struct Document {
    layout: Layout,
    options: PreambleOptions,
    sections: Vec<SectionOutput>,
}

impl Document {
    pub fn new(layout: Layout, options: PreambleOptions, sections: Vec<SectionOutput>) -> Self {
        Self {
            layout,
            options,
            sections,
        }
    }

    pub fn sections(&self) -> &[SectionOutput] {
        &self.sections
    }

    pub fn total_pages(&self) -> usize {
        self.sections.iter().map(|output| output.pages).sum()
    }

    /// The root file: preamble and one `\input` per section.
    pub fn root(&self) -> String {
        let inputs: Vec<&str> = self
            .sections
            .iter()
            .map(|output| output.section.as_str())
            .collect();
        snippets::document(&self.layout, self.options, &inputs)
    }

    /// Writes every section file and the root file into `dir`, creating it
    /// if needed. Returns the written paths, root file last.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` with the offending path.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir).map_err(|e| PlannerError::FileSystem {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut written = Vec::with_capacity(self.sections.len() + 1);
        for output in &self.sections {
            written.push(write_file(&dir.join(output.file_name()), &output.text)?);
        }
        written.push(write_file(&dir.join(ROOT_FILE), &self.root())?);

        info!("wrote {} files to {}", written.len(), dir.display());
        Ok(written)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<PathBuf> {
    std::fs::write(path, contents).map_err(|e| PlannerError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(path.to_path_buf())
}
