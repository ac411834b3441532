//! `tabularx` environment builder.

/// A `tabularx` table of pre-rendered cells.
#[derive(Debug, Clone)]
pub struct Tabularx {
    width: String,
    format: String,
    rows: Vec<Vec<String>>,
    hlines: bool,
}

impl Tabularx {
    /// A table `width` wide with the given column specification.
    pub fn new(width: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            format: format.into(),
            rows: Vec::new(),
            hlines: false,
        }
    }

    /// Draws a rule above the first row and below every row.
    pub fn with_hlines(mut self) -> Self {
        self.hlines = true;
        self
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Renders the environment, one line per row.
    pub fn render(&self) -> Vec<String> {
        let row_end = if self.hlines { " \\\\ \\hline" } else { " \\\\" };

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format!(
            "\\begin{{tabularx}}{{{}}}{{{}}}{}",
            self.width,
            self.format,
            if self.hlines { "\\hline" } else { "" }
        ));
        lines.extend(
            self.rows
                .iter()
                .map(|row| format!("{}{row_end}", row.join(" & "))),
        );
        lines.push("\\end{tabularx}".to_string());
        lines
    }
}
