//! Unparsed input rows.

use super::Category;

/// One flat input record before type conversion.
///
/// Cells are kept as text so that parsing, sentinel handling and range checks
/// happen in one place when the dataset is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    /// 1-based source line, when the row came from a file
    pub line: Option<usize>,
    pub year: String,
    pub sex: String,
    pub min_degree: String,
    /// Cells by category; categories without a cell are missing
    pub values: Vec<(Category, String)>,
}

impl RawRow {
    pub fn new(year: impl Into<String>, sex: impl Into<String>, min_degree: impl Into<String>) -> Self {
        Self {
            line: None,
            year: year.into(),
            sex: sex.into(),
            min_degree: min_degree.into(),
            values: Vec::new(),
        }
    }

    /// Add a cell.
    pub fn with(mut self, category: Category, cell: impl Into<String>) -> Self {
        self.values.push((category, cell.into()));
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}
