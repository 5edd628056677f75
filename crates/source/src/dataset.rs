//! A named, in-memory table of string cells.
//!
//! Datasets are loaded once and never mutated; filtering produces a new
//! dataset holding copies of the matching rows in their original order.

use crate::error::SourceError;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// A test applied to one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    OneOf(Vec<String>),
    Equals(String),
}

impl Predicate {
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::OneOf(values.into_iter().map(Into::into).collect())
    }

    pub fn equals(value: impl Into<String>) -> Self {
        Predicate::Equals(value.into())
    }

    pub fn matches(&self, cell: &str) -> bool {
        match self {
            Predicate::OneOf(values) => values.iter().any(|v| v == cell),
            Predicate::Equals(value) => value == cell,
        }
    }
}

/// A column name paired with the predicate its cells must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub predicate: Predicate,
}

impl Filter {
    pub fn new(column: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            column: column.into(),
            predicate,
        }
    }
}

impl Dataset {
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    pub fn from_csv_path(name: impl Into<String>, path: &Path) -> Result<Self, SourceError> {
        let name = name.into();
        let file = std::fs::File::open(path).map_err(|e| SourceError::io(path, e))?;
        let dataset = Self::from_csv_reader(name, file)?;
        log::info!(
            "Loaded dataset '{}' from {} ({} rows)",
            dataset.name,
            path.display(),
            dataset.len()
        );
        Ok(dataset)
    }

    /// Reads a headed CSV table. A leading UTF-8 byte-order mark is dropped
    /// from the first header; short or long rows are padded or cut to the
    /// header width.
    pub fn from_csv_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self, SourceError> {
        let name = name.into();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| SourceError::csv(&name, e))?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches('\u{FEFF}').to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| SourceError::csv(&name, e))?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { name, headers, rows })
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), SourceError> {
        let mut writer = csv::Writer::from_writer(writer);
        writer
            .write_record(&self.headers)
            .map_err(|e| SourceError::csv(&self.name, e))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|e| SourceError::csv(&self.name, e))?;
        }
        writer
            .flush()
            .map_err(|e| SourceError::io(format!("<{}>", self.name), e))
    }

    pub fn write_csv_path(&self, path: &Path) -> Result<(), SourceError> {
        let file = std::fs::File::create(path).map_err(|e| SourceError::io(path, e))?;
        self.write_csv(file)?;
        log::debug!("Wrote {} rows of '{}' to {}", self.len(), self.name, path.display());
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, matched exactly and case-sensitively.
    pub fn column_index(&self, column: &str) -> Result<usize, SourceError> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| SourceError::MissingColumn {
                dataset: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Resolves several columns at once, failing on the first one missing.
    pub fn column_indices(&self, columns: &[&str]) -> Result<Vec<usize>, SourceError> {
        columns.iter().map(|c| self.column_index(c)).collect()
    }

    /// All cells of one column, in row order.
    pub fn column<'a>(&'a self, column: &str) -> Result<impl Iterator<Item = &'a str> + 'a, SourceError> {
        let idx = self.column_index(column)?;
        Ok(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// The rows whose `filter.column` cell satisfies the predicate.
    pub fn filter(&self, filter: &Filter) -> Result<Dataset, SourceError> {
        let idx = self.column_index(&filter.column)?;
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .filter(|row| filter.predicate.matches(&row[idx]))
            .cloned()
            .collect();
        log::debug!(
            "Filter on '{}'.'{}' kept {} of {} rows",
            self.name,
            filter.column,
            rows.len(),
            self.rows.len()
        );
        Ok(Dataset {
            name: self.name.clone(),
            headers: self.headers.clone(),
            rows,
        })
    }
}
