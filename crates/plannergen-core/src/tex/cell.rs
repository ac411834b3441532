//! Navigation cells: linkable labels that can be highlighted.

use super::link;

/// One label in a navigation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    reference: Option<String>,
    selected: bool,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reference: None,
            selected: false,
        }
    }

    /// Makes the cell a link to `reference`.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Renders the cell; selected cells are inverted.
    pub fn render(&self) -> String {
        let text = match &self.reference {
            Some(reference) => link(&self.text, reference),
            None => self.text.clone(),
        };

        if self.selected {
            format!("\\cellcolor{{black}}\\textcolor{{white}}{{{text}}}")
        } else {
            text
        }
    }
}

/// An ordered row of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cells(pub Vec<Cell>);

impl Cells {
    /// Unlinked cells with the given labels.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Cell::new).collect())
    }

    /// Marks the cells with label `text` as selected.
    pub fn select(self, text: &str) -> Self {
        self.select_where(|cell| cell.text == text)
    }

    /// Marks the cells linking to any of `references` as selected.
    pub fn select_references(self, references: &[String]) -> Self {
        self.select_where(|cell| {
            cell.reference
                .as_ref()
                .is_some_and(|reference| references.contains(reference))
        })
    }

    fn select_where(mut self, predicate: impl Fn(&Cell) -> bool) -> Self {
        for cell in &mut self.0 {
            if predicate(cell) {
                cell.selected = true;
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.0.iter()
    }

    /// Labels of the selected cells, in row order.
    pub fn selected(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|cell| cell.is_selected())
            .map(Cell::text)
            .collect()
    }

    /// Every cell rendered, joined as one table row body.
    pub fn render_row(&self) -> String {
        self.0
            .iter()
            .map(Cell::render)
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

impl FromIterator<Cell> for Cells {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
