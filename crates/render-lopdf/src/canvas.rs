//! Drawing primitives in top-left page coordinates.
//!
//! Callers position everything with `y` growing downwards; the canvas flips
//! to PDF user space when emitting operators.

use crate::encoding::to_win_ansi;
use factsheet_types::{Color, Rect};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

fn real(v: f32) -> Object {
    Object::Real(v)
}

fn name(n: &str) -> Object {
    Object::Name(n.as_bytes().to_vec())
}

/// Collects content stream operations for one page.
pub struct PageContext {
    page_height: f32,
    ops: Vec<Operation>,
}

impl PageContext {
    pub fn new(page_height: f32) -> Self {
        Self {
            page_height,
            ops: Vec::new(),
        }
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    fn set_fill_color(&mut self, color: Color) {
        let [r, g, b] = color.to_unit_rgb();
        self.ops.push(Operation::new("rg", vec![real(r), real(g), real(b)]));
    }

    fn set_stroke_color(&mut self, color: Color) {
        let [r, g, b] = color.to_unit_rgb();
        self.ops.push(Operation::new("RG", vec![real(r), real(g), real(b)]));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.set_fill_color(color);
        self.ops.push(Operation::new(
            "re",
            vec![
                real(rect.x),
                real(flip_y(rect.y + rect.height, self.page_height)),
                real(rect.width),
                real(rect.height),
            ],
        ));
        self.ops.push(Operation::new("f", vec![]));
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.set_stroke_color(color);
        self.ops.push(Operation::new("w", vec![real(width)]));
        self.ops.push(Operation::new(
            "re",
            vec![
                real(rect.x),
                real(flip_y(rect.y + rect.height, self.page_height)),
                real(rect.width),
                real(rect.height),
            ],
        ));
        self.ops.push(Operation::new("S", vec![]));
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Color, width: f32) {
        self.set_stroke_color(color);
        self.ops.push(Operation::new("w", vec![real(width)]));
        self.ops.push(Operation::new(
            "m",
            vec![real(from.0), real(flip_y(from.1, self.page_height))],
        ));
        self.ops.push(Operation::new(
            "l",
            vec![real(to.0), real(flip_y(to.1, self.page_height))],
        ));
        self.ops.push(Operation::new("S", vec![]));
    }

    /// Starts a text object with its first baseline at `(x, baseline)`.
    pub fn begin_text(&mut self, x: f32, baseline: f32) {
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Td",
            vec![real(x), real(flip_y(baseline, self.page_height))],
        ));
    }

    /// Starts a text object rotated 90° counter-clockwise around `(x, baseline)`.
    pub fn begin_rotated_text(&mut self, x: f32, baseline: f32) {
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tm",
            vec![
                real(0.0),
                real(1.0),
                real(-1.0),
                real(0.0),
                real(x),
                real(flip_y(baseline, self.page_height)),
            ],
        ));
    }

    /// Shows `text` at the current text position, which the viewer advances.
    pub fn show_text(&mut self, font_resource: &str, size: f32, color: Color, text: &str) {
        self.ops.push(Operation::new("Tf", vec![name(font_resource), real(size)]));
        self.set_fill_color(color);
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
    }

    pub fn end_text(&mut self) {
        self.ops.push(Operation::new("ET", vec![]));
    }

    /// Single-run convenience wrapper.
    pub fn text(&mut self, x: f32, baseline: f32, font_resource: &str, size: f32, color: Color, text: &str) {
        self.begin_text(x, baseline);
        self.show_text(font_resource, size, color, text);
        self.end_text();
    }

    /// Paints a form XObject scaled to `width` x `height` with its top-left
    /// corner at `(x, y)`.
    pub fn draw_form(&mut self, resource: &str, x: f32, y: f32, width: f32, height: f32, form_size: (f32, f32)) {
        let sx = width / form_size.0;
        let sy = height / form_size.1;
        self.ops.push(Operation::new("q", vec![]));
        self.ops.push(Operation::new(
            "cm",
            vec![
                real(sx),
                real(0.0),
                real(0.0),
                real(sy),
                real(x),
                real(flip_y(y + height, self.page_height)),
            ],
        ));
        self.ops.push(Operation::new("Do", vec![name(resource)]));
        self.ops.push(Operation::new("Q", vec![]));
    }

    pub fn into_content(self) -> Content {
        Content { operations: self.ops }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_is_flipped() {
        let mut ctx = PageContext::new(540.0);
        ctx.fill_rect(Rect::new(10.0, 20.0, 100.0, 30.0), Color::BLACK);
        let content = ctx.into_content();
        let re = content.operations.iter().find(|op| op.operator == "re").unwrap();
        assert_eq!(re.operands[1].as_float().unwrap(), 490.0);
    }

    #[test]
    fn test_text_encodes_win_ansi() {
        let mut ctx = PageContext::new(100.0);
        ctx.text(0.0, 10.0, "F1", 9.0, Color::BLACK, "€5");
        let content = ctx.into_content();
        let operators: Vec<_> = content.operations.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(operators, vec!["BT", "Td", "Tf", "rg", "Tj", "ET"]);
        let tj = &content.operations[4];
        assert_eq!(tj.operands[0].as_str().unwrap(), &[0x80, b'5']);
    }
}
