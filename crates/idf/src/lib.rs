//! Intermediate Document Format (IDF)
//!
//! The in-memory representation of a fact sheet: fixed-size pages holding
//! absolutely positioned elements. Templates deserialize into this model,
//! the assembler edits a per-vendor copy of it, and the renderer turns it
//! into PDF. There is no flow layout; every element carries its own frame.

use factsheet_style::FontAttributes;
use factsheet_types::{Color, Rect, Size};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A reference-counted container for shared, immutable data like embedded charts.
pub type SharedData = Arc<Vec<u8>>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Finds the first element with the given name on any page.
    pub fn element(&self, name: &str) -> Option<&Element> {
        self.pages
            .iter()
            .flat_map(|p| p.elements.iter())
            .find(|e| e.name.as_deref() == Some(name))
    }

    /// Iterates over every element of every page, in page then z-order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.pages.iter().flat_map(|p| p.elements.iter())
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.pages.iter_mut().flat_map(|p| p.elements.iter_mut())
    }

    /// The visible text of every text frame, in document order.
    pub fn text_content(&self) -> Vec<String> {
        self.elements()
            .filter_map(|e| match &e.kind {
                ElementKind::TextFrame(frame) => Some(frame.text()),
                _ => None,
            })
            .collect()
    }
}

/// A single fixed-size page (or slide). Later elements paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub size: Size,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Page {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }
}

/// A positioned element. `frame` is in points from the page's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub frame: Rect,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    pub fn new(frame: Rect, kind: ElementKind) -> Self {
        Self {
            name: None,
            frame,
            kind,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn as_text_frame(&self) -> Option<&TextFrame> {
        match &self.kind {
            ElementKind::TextFrame(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableElement> {
        match &self.kind {
            ElementKind::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Returns a string identifier for the element type, used in log output.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ElementKind::TextFrame(_) => "text-frame",
            ElementKind::Table(_) => "table",
            ElementKind::Picture(_) => "picture",
            ElementKind::Rectangle { .. } => "rectangle",
        }
    }

    /// A label for diagnostics: the element name if it has one, else its kind.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.kind_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ElementKind {
    /// A box of paragraphs. The only text-bearing element kind.
    TextFrame(TextFrame),
    /// A fixed-geometry grid of single-line cells.
    Table(TableElement),
    /// An embedded single-page PDF graphic, scaled to the frame.
    Picture(Picture),
    /// A filled rectangle, used for banners and rules.
    Rectangle { fill: Color },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(default = "default_padding")]
    pub padding: f32,
}

fn default_padding() -> f32 {
    4.0
}

impl TextFrame {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            fill: None,
            padding: default_padding(),
        }
    }

    /// The visible text: paragraphs joined by newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// A paragraph made of one run.
    pub fn single(text: impl Into<String>, font: FontAttributes) -> Self {
        Self {
            runs: vec![Run::new(text, font)],
        }
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A run of text sharing one set of font attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default)]
    pub font: FontAttributes,
}

impl Run {
    pub fn new(text: impl Into<String>, font: FontAttributes) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

// --- Table-specific Structures ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableElement {
    /// Absolute column widths in points.
    pub column_widths: Vec<f32>,
    pub row_height: f32,
    pub header: TableRow,
    pub rows: Vec<TableRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_fill: Option<Color>,
    #[serde(default = "default_border")]
    pub border: Color,
}

fn default_border() -> Color {
    Color::gray(160)
}

impl TableElement {
    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// Header plus data rows.
    pub fn height(&self) -> f32 {
        self.row_height * (self.rows.len() + 1) as f32
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.text.is_empty())
    }

    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub text: String,
    pub font: FontAttributes,
}

/// A reference to a graphic artifact plus, once loaded, its bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub src: String,
    #[serde(skip)]
    pub data: Option<SharedData>,
}
