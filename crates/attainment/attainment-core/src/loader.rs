//! CSV loading for the attainment table.

use crate::dataset::Dataset;
use attainment_api::LoadConfig;
use attainment_spi::{AttainmentError, Category, RawRow, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Role of a header column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Year,
    Sex,
    MinDegree,
    Value(Category),
}

impl Column {
    fn from_header(header: &str) -> Result<Self> {
        let key: String = header
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "year" => Ok(Column::Year),
            "sex" => Ok(Column::Sex),
            "mindegree" => Ok(Column::MinDegree),
            _ => header
                .parse::<Category>()
                .map(Column::Value)
                .map_err(|_| {
                    AttainmentError::parse(format!("unrecognized column header '{}'", header.trim()))
                }),
        }
    }
}

/// Header positions resolved from the first line.
struct Layout {
    year: usize,
    sex: usize,
    min_degree: usize,
    values: Vec<(Category, usize)>,
}

impl Layout {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let mut columns: Vec<(Column, usize)> = Vec::with_capacity(headers.len());
        for (pos, header) in headers.iter().enumerate() {
            let column = Column::from_header(header)?;
            if columns.iter().any(|(c, _)| *c == column) {
                return Err(AttainmentError::parse(format!(
                    "column '{}' appears twice",
                    header.trim()
                )));
            }
            columns.push((column, pos));
        }

        let find = |wanted: Column, name: &str| {
            columns
                .iter()
                .find(|(c, _)| *c == wanted)
                .map(|(_, pos)| *pos)
                .ok_or_else(|| AttainmentError::parse(format!("missing column '{}'", name)))
        };

        let year = find(Column::Year, "Year")?;
        let sex = find(Column::Sex, "Sex")?;
        let min_degree = find(Column::MinDegree, "Min degree")?;
        let values = Category::ALL
            .iter()
            .map(|&c| find(Column::Value(c), c.label()).map(|pos| (c, pos)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            year,
            sex,
            min_degree,
            values,
        })
    }

    fn row(&self, record: &csv::StringRecord, line: usize) -> RawRow {
        let cell = |pos: usize| record.get(pos).unwrap_or_default();
        let mut row = RawRow::new(cell(self.year), cell(self.sex), cell(self.min_degree)).at_line(line);
        for &(category, pos) in &self.values {
            row = row.with(category, cell(pos));
        }
        row
    }
}

fn csv_error(error: csv::Error) -> AttainmentError {
    if error.is_io_error() {
        return AttainmentError::Io(error.to_string());
    }
    let line = error.position().map(|p| p.line() as usize);
    let parse = AttainmentError::parse(error.to_string());
    match line {
        Some(line) => parse.at_line(line),
        None => parse,
    }
}

/// Reads the comma-delimited attainment table into a raw [`Dataset`].
///
/// The header must name `Year`, `Sex`, `Min degree` and every category;
/// matching ignores case and surrounding whitespace and columns may come in
/// any order.
#[derive(Debug, Clone, Default)]
pub struct AttainmentLoader {
    config: LoadConfig,
}

impl AttainmentLoader {
    pub fn new(config: LoadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Parse rows without building a dataset.
    pub fn read_rows<R: Read>(&self, reader: R) -> Result<Vec<RawRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers().map_err(csv_error)?.clone();
        let layout = Layout::from_headers(&headers).map_err(|e| e.at_line(1))?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(csv_error)?;
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(rows.len() + 2);
            rows.push(layout.row(&record, line));
        }

        tracing::debug!(rows = rows.len(), "attainment rows read");
        Ok(rows)
    }

    /// Load from any reader.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Dataset> {
        let rows = self.read_rows(reader)?;
        Dataset::load(rows, &self.config)
    }

    /// Load from a file on disk.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| AttainmentError::Io(format!("{}: {}", path.display(), e)))?;
        self.load_reader(BufReader::new(file))
    }
}
