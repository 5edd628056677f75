//! Fluent builders for composing fact sheet pages in code.
//!
//! Import with `use factsheet_template::builders::*;`.

use factsheet_idf::{Element, ElementKind, Page, Paragraph, Run, TextFrame};
use factsheet_style::FontAttributes;
use factsheet_types::{Color, Rect, Size};

pub const BRAND_BLUE: Color = Color::rgb(0x00, 0x37, 0x81);
pub const FAMILY: &str = "Helvetica";

/// Builder for a fixed-size page.
#[derive(Debug, Clone)]
pub struct PageBuilder {
    size: Size,
    elements: Vec<Element>,
}

impl PageBuilder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            elements: Vec::new(),
        }
    }

    /// Adds an element on top of everything added so far.
    pub fn element(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }

    pub fn build(self) -> Page {
        Page {
            size: self.size,
            elements: self.elements,
        }
    }
}

/// Builder for a text frame element.
#[derive(Debug, Clone)]
pub struct TextBox {
    name: Option<String>,
    frame: Rect,
    paragraphs: Vec<Paragraph>,
    fill: Option<Color>,
    padding: Option<f32>,
}

impl TextBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            name: None,
            frame: Rect::new(x, y, width, height),
            paragraphs: Vec::new(),
            fill: None,
            padding: None,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }
}

impl From<TextBox> for Element {
    fn from(b: TextBox) -> Self {
        let mut frame = TextFrame::new(b.paragraphs);
        frame.fill = b.fill;
        if let Some(padding) = b.padding {
            frame.padding = padding;
        }
        Element {
            name: b.name,
            frame: b.frame,
            kind: ElementKind::TextFrame(frame),
        }
    }
}

/// A solid rectangle.
pub fn rect(x: f32, y: f32, width: f32, height: f32, fill: Color) -> Element {
    Element::new(Rect::new(x, y, width, height), ElementKind::Rectangle { fill })
}

/// Builder for a paragraph of differently styled runs.
#[derive(Debug, Clone, Default)]
pub struct Line {
    runs: Vec<Run>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(mut self, text: &str, font: FontAttributes) -> Self {
        self.runs.push(Run::new(text, font));
        self
    }
}

impl From<Line> for Paragraph {
    fn from(line: Line) -> Self {
        Paragraph::new(line.runs)
    }
}

// Semantic text widgets

pub fn h1(text: &str) -> Paragraph {
    Paragraph::single(text, FontAttributes::new(FAMILY, 24.0).bold().with_color(BRAND_BLUE))
}

pub fn h2(text: &str) -> Paragraph {
    Paragraph::single(text, FontAttributes::new(FAMILY, 11.0).bold().with_color(BRAND_BLUE))
}

pub fn banner(text: &str) -> Paragraph {
    Paragraph::single(text, FontAttributes::new(FAMILY, 14.0).bold().with_color(Color::WHITE))
}

pub fn p(text: &str) -> Paragraph {
    Paragraph::single(text, FontAttributes::new(FAMILY, 9.0).with_color(Color::gray(34)))
}

pub fn caption(text: &str) -> Paragraph {
    Paragraph::single(text, FontAttributes::new(FAMILY, 7.0).italic().with_color(Color::gray(102)))
}
