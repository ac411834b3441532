//! LaTeX markup primitives.
//!
//! Small string builders shared by the headers and content blocks. Nothing
//! here is evaluated; the output is passed to the typesetting compiler as is.

pub mod calendar;
pub mod cell;
pub mod snippets;
pub mod tabularx;

pub use calendar::little_calendar;
pub use cell::{Cell, Cells};
pub use tabularx::Tabularx;

/// A hyperlink to `reference` showing `text`.
pub fn link(text: &str, reference: &str) -> String {
    format!("\\hyperlink{{{reference}}}{{{text}}}")
}

/// An anchor other pages can link to.
pub fn target(reference: &str) -> String {
    format!("\\hypertarget{{{reference}}}{{}}")
}

/// An invisible box forcing a line of the given height.
pub fn strut(height: &str) -> String {
    format!("\\parbox{{0pt}}{{\\vskip{height}}}")
}

/// A dot grid of `rows` by `columns` dots spaced 5mm apart.
pub fn dot_grid(rows: u32, columns: u32) -> String {
    format!("\\myDotGrid{{{rows}}}{{{columns}}}")
}
