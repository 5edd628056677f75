//! Builds fixed-geometry table elements.
//!
//! Tables never grow or wrap: every column has an absolute width and a
//! character limit, and the number of data rows is capped. A table always
//! has at least one data row so that the header never floats alone.

use crate::LayoutError;
use factsheet_idf::{Element, ElementKind, TableCell, TableElement, TableRow};
use factsheet_style::FontAttributes;
use factsheet_types::{Color, DataShapeError, FormatWarning, Point, Rect};

/// Geometry and typography of one kind of table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub name: String,
    pub headers: Vec<String>,
    pub column_widths: Vec<f32>,
    pub char_limits: Vec<usize>,
    pub row_cap: usize,
    pub row_height: f32,
    pub font: FontAttributes,
    pub header_fill: Option<Color>,
    pub header_color: Color,
}

impl TableSpec {
    pub fn new(name: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            name: name.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            column_widths: vec![60.0; headers.len()],
            char_limits: vec![12; headers.len()],
            row_cap: 5,
            row_height: 18.0,
            font: FontAttributes::new("Helvetica", 8.0),
            header_fill: None,
            header_color: Color::BLACK,
        }
    }

    pub fn with_column_widths(mut self, widths: &[f32]) -> Self {
        self.column_widths = widths.to_vec();
        self
    }

    pub fn with_char_limits(mut self, limits: &[usize]) -> Self {
        self.char_limits = limits.to_vec();
        self
    }

    pub fn with_row_cap(mut self, cap: usize) -> Self {
        self.row_cap = cap;
        self
    }

    pub fn with_row_height(mut self, height: f32) -> Self {
        self.row_height = height;
        self
    }

    pub fn with_font(mut self, font: FontAttributes) -> Self {
        self.font = font;
        self
    }

    pub fn with_header_fill(mut self, fill: Color, text: Color) -> Self {
        self.header_fill = Some(fill);
        self.header_color = text;
        self
    }

    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    fn validate(&self) -> Result<(), DataShapeError> {
        let n = self.headers.len();
        if self.column_widths.len() != n {
            return Err(DataShapeError::new(
                &self.name,
                format!("{} column widths for {} headers", self.column_widths.len(), n),
            ));
        }
        if self.char_limits.len() != n {
            return Err(DataShapeError::new(
                &self.name,
                format!("{} character limits for {} headers", self.char_limits.len(), n),
            ));
        }
        Ok(())
    }
}

/// A laid-out table plus anything worth telling the caller about it.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedTable {
    pub element: Element,
    pub warnings: Vec<FormatWarning>,
}

impl FormattedTable {
    pub fn table(&self) -> Option<&TableElement> {
        self.element.as_table()
    }
}

/// Lays out `rows` under `spec.headers` with its top-left corner at `origin`.
pub fn format_table(
    spec: &TableSpec,
    origin: Point,
    rows: &[Vec<String>],
) -> Result<FormattedTable, LayoutError> {
    spec.validate()?;
    let width = spec.headers.len();
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(DataShapeError::new(
            &spec.name,
            format!("row {} has {} cells, expected {}", i, row.len(), width),
        )
        .into());
    }

    let mut warnings = Vec::new();
    if rows.len() > spec.row_cap {
        warnings.push(FormatWarning::new(
            &spec.name,
            format!(
                "showing first {} of {} rows; {} dropped",
                spec.row_cap,
                rows.len(),
                rows.len() - spec.row_cap
            ),
        ));
    }

    let body_font = spec.font.clone();
    let header_font = spec.font.clone().bold().with_color(spec.header_color);

    let header = TableRow {
        cells: spec
            .headers
            .iter()
            .map(|h| TableCell {
                text: h.clone(),
                font: header_font.clone(),
            })
            .collect(),
    };

    let mut body: Vec<TableRow> = rows
        .iter()
        .take(spec.row_cap)
        .map(|row| TableRow {
            cells: row
                .iter()
                .zip(&spec.char_limits)
                .map(|(text, &limit)| TableCell {
                    text: truncate(text, limit),
                    font: body_font.clone(),
                })
                .collect(),
        })
        .collect();

    if body.is_empty() {
        body.push(TableRow {
            cells: (0..width)
                .map(|_| TableCell {
                    text: String::new(),
                    font: body_font.clone(),
                })
                .collect(),
        });
    }

    let table = TableElement {
        column_widths: spec.column_widths.clone(),
        row_height: spec.row_height,
        header,
        rows: body,
        header_fill: spec.header_fill,
        border: Color::gray(160),
    };
    let frame = Rect::new(origin.x, origin.y, table.width(), table.height());
    log::debug!(
        "Formatted '{}' table with {} data rows at ({}, {})",
        spec.name,
        table.rows.len(),
        origin.x,
        origin.y
    );

    Ok(FormattedTable {
        element: Element::new(frame, ElementKind::Table(table)).named(spec.name.clone()),
        warnings,
    })
}

/// Cuts `text` to at most `limit` characters. No ellipsis is added.
fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
