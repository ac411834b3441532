//! Block contract and page assembly.
//!
//! Every piece of generated markup, headers included, is a [`Block`]: a value
//! that produces an ordered list of markup lines or fails. A [`Page`] builds
//! its blocks in the order they were supplied and joins their lines into one
//! physical page. A [`PageBuffer`] accumulates the pages of one section, each
//! followed by a page-break marker:
//!
//! ```text
//! <page 1 lines>\n\n\pagebreak{}\n<page 2 lines>\n\n\pagebreak{}\n
//! ```
//!
//! The marker follows every page, the last one of a section included, so
//! section files can be concatenated without further glue.

use crate::error::{Result, StageResultExt};

/// Page-break marker written after every page.
pub const PAGE_BREAK: &str = "\\pagebreak{}";

/// A unit of markup.
pub trait Block {
    /// Produces the block's lines, in order.
    fn build(&self) -> Result<Vec<String>>;
}

/// Blocks rendered together onto one page.
pub struct Page<'a> {
    blocks: &'a [&'a dyn Block],
}

impl<'a> Page<'a> {
    pub fn new(blocks: &'a [&'a dyn Block]) -> Self {
        Self { blocks }
    }

    /// Builds every block in order and returns the rendered physical pages.
    ///
    /// Stops at the first failing block; its error is returned unchanged.
    pub fn build(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for block in self.blocks {
            lines.extend(block.build()?);
        }

        Ok(vec![lines.join("\n")])
    }
}

/// Running output of one section.
#[derive(Debug, Default)]
pub struct PageBuffer {
    text: String,
    pages: usize,
}

impl PageBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `blocks` as one page and appends it.
    ///
    /// A failing page appends nothing; pages written before it stay in the
    /// buffer.
    pub fn write_blocks(&mut self, blocks: &[&dyn Block]) -> Result<()> {
        let compiled = Page::new(blocks).build().stage("build new page")?;

        for page in compiled {
            self.text.push_str(&page);
            self.text.push_str("\n\n");
            self.text.push_str(PAGE_BREAK);
            self.text.push('\n');
            self.pages += 1;
        }

        Ok(())
    }

    /// Number of physical pages written so far.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
