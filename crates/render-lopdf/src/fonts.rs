//! Mapping of requested font families onto the PDF base-14 set.

use factsheet_style::FontAttributes;
use lopdf::{Dictionary, Object, dictionary};

/// The base-14 family used for a requested family name. Unknown families
/// fall back to Helvetica.
pub fn base_family(family: &str) -> &'static str {
    let lower = family.trim().to_ascii_lowercase();
    if lower.starts_with("times") || (lower.contains("serif") && !lower.contains("sans")) {
        "Times"
    } else if lower.starts_with("courier") || lower.contains("mono") {
        "Courier"
    } else {
        "Helvetica"
    }
}

/// PostScript name of the base-14 face for the given attributes.
pub fn styled_font_name(font: &FontAttributes) -> &'static str {
    let bold = font.is_bold();
    let italic = font.is_italic();
    match (base_family(&font.family), bold, italic) {
        ("Times", false, false) => "Times-Roman",
        ("Times", true, false) => "Times-Bold",
        ("Times", false, true) => "Times-Italic",
        ("Times", true, true) => "Times-BoldItalic",
        ("Courier", false, false) => "Courier",
        ("Courier", true, false) => "Courier-Bold",
        ("Courier", false, true) => "Courier-Oblique",
        ("Courier", true, true) => "Courier-BoldOblique",
        (_, false, false) => "Helvetica",
        (_, true, false) => "Helvetica-Bold",
        (_, false, true) => "Helvetica-Oblique",
        (_, true, true) => "Helvetica-BoldOblique",
    }
}

/// Assigns resource names (`F1`, `F2`, ...) to faces in first-use order.
#[derive(Debug, Default, Clone)]
pub struct FontRegistry {
    faces: Vec<&'static str>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The resource name for `font`, registering its face if needed.
    pub fn resource_name(&mut self, font: &FontAttributes) -> String {
        self.resource_for_face(styled_font_name(font))
    }

    pub fn resource_for_face(&mut self, face: &'static str) -> String {
        let index = match self.faces.iter().position(|f| *f == face) {
            Some(i) => i,
            None => {
                self.faces.push(face);
                self.faces.len() - 1
            }
        };
        format!("F{}", index + 1)
    }

    pub fn faces(&self) -> &[&'static str] {
        &self.faces
    }

    /// The `/Font` resource dictionary for every registered face.
    pub fn to_dictionary(&self) -> Dictionary {
        let mut fonts = Dictionary::new();
        for (i, face) in self.faces.iter().enumerate() {
            fonts.set(
                format!("F{}", i + 1).into_bytes(),
                Object::Dictionary(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => *face,
                    "Encoding" => "WinAnsiEncoding",
                }),
            );
        }
        fonts
    }
}
