//! Renders an IDF document into a PDF with `lopdf`.
//!
//! Every page shares one resource dictionary holding the base-14 fonts and
//! the form XObjects of embedded pictures. Content is written uncompressed.

use crate::canvas::PageContext;
use crate::error::RenderError;
use crate::fonts::FontRegistry;
use factsheet_idf::{Document, Element, ElementKind, Picture, TableElement, TextFrame};
use factsheet_pdf_composer::{FormXObject, import_page_as_form};
use factsheet_types::Rect;
use lopdf::{Dictionary, Object, StringFormat, dictionary};
use std::path::Path;

/// Line height as a multiple of the largest font size in a paragraph.
const LEADING: f32 = 1.25;
/// Distance from the top of a line box to its baseline, per point of font size.
const ASCENT: f32 = 0.8;
const CELL_PADDING: f32 = 3.0;

#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    title: Option<String>,
}

struct RenderState {
    fonts: FontRegistry,
    xobjects: Dictionary,
    forms: usize,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document title written to the `/Info` dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn render(&self, doc: &Document) -> Result<lopdf::Document, RenderError> {
        if doc.pages.is_empty() {
            return Err(RenderError::Other("Document has no pages".into()));
        }

        let mut pdf = lopdf::Document::with_version("1.7");
        let pages_id = pdf.new_object_id();
        let resources_id = pdf.new_object_id();
        let mut state = RenderState {
            fonts: FontRegistry::new(),
            xobjects: Dictionary::new(),
            forms: 0,
        };

        let mut page_ids = Vec::with_capacity(doc.pages.len());
        for (index, page) in doc.pages.iter().enumerate() {
            let mut ctx = PageContext::new(page.size.height);
            for element in &page.elements {
                draw_element(&mut pdf, &mut state, &mut ctx, element)?;
            }
            let content = ctx.into_content().encode()?;
            let content_id = pdf.add_object(lopdf::Stream::new(dictionary! {}, content));
            let page_id = pdf.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.0.into(), 0.0.into(), page.size.width.into(), page.size.height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            log::debug!(
                "Rendered page {} with {} elements",
                index + 1,
                page.elements.len()
            );
            page_ids.push(page_id);
        }

        let mut resources = dictionary! { "Font" => state.fonts.to_dictionary() };
        if !state.xobjects.is_empty() {
            resources.set("XObject", state.xobjects);
        }
        pdf.objects.insert(resources_id, resources.into());

        let count = page_ids.len() as i64;
        pdf.objects.insert(
            pages_id,
            dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids.into_iter().map(Object::Reference).collect::<Vec<_>>(),
                "Count" => count,
            }
            .into(),
        );
        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        pdf.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Producer" => Object::string_literal("factsheet"),
        };
        if let Some(title) = &self.title {
            info.set(
                "Title",
                Object::String(crate::encoding::to_win_ansi(title), StringFormat::Literal),
            );
        }
        let info_id = pdf.add_object(info);
        pdf.trailer.set("Info", info_id);

        Ok(pdf)
    }

    pub fn render_to_bytes(&self, doc: &Document) -> Result<Vec<u8>, RenderError> {
        let mut pdf = self.render(doc)?;
        let mut bytes = Vec::new();
        pdf.save_to(&mut bytes).map_err(|source| RenderError::Io {
            path: "<memory>".into(),
            source,
        })?;
        Ok(bytes)
    }
}

fn draw_element(
    pdf: &mut lopdf::Document,
    state: &mut RenderState,
    ctx: &mut PageContext,
    element: &Element,
) -> Result<(), RenderError> {
    match &element.kind {
        ElementKind::Rectangle { fill } => ctx.fill_rect(element.frame, *fill),
        ElementKind::TextFrame(frame) => draw_text_frame(state, ctx, element.frame, frame),
        ElementKind::Table(table) => draw_table(state, ctx, element.frame, table),
        ElementKind::Picture(picture) => {
            let (resource, form) = embed_picture(pdf, state, picture)?;
            let placed = fit_into(element.frame, form.width, form.height);
            ctx.draw_form(
                &resource,
                placed.x,
                placed.y,
                placed.width,
                placed.height,
                (form.width, form.height),
            );
        }
    }
    Ok(())
}

/// Paragraphs stack downwards from the padded top edge; each run of a
/// paragraph continues where the previous one ended. Text is not clipped.
fn draw_text_frame(state: &mut RenderState, ctx: &mut PageContext, area: Rect, frame: &TextFrame) {
    if let Some(fill) = frame.fill {
        ctx.fill_rect(area, fill);
    }
    let x = area.x + frame.padding;
    let mut top = area.y + frame.padding;
    for paragraph in &frame.paragraphs {
        let size = paragraph
            .runs
            .iter()
            .map(|r| r.font.size)
            .fold(0.0f32, f32::max);
        let size = if size > 0.0 { size } else { 10.0 };
        let runs: Vec<_> = paragraph.runs.iter().filter(|r| !r.text.is_empty()).collect();
        if !runs.is_empty() {
            ctx.begin_text(x, top + size * ASCENT);
            for run in runs {
                let resource = state.fonts.resource_name(&run.font);
                ctx.show_text(&resource, run.font.size, run.font.color, &run.text);
            }
            ctx.end_text();
        }
        top += size * LEADING;
    }
}

fn draw_table(state: &mut RenderState, ctx: &mut PageContext, area: Rect, table: &TableElement) {
    let width = table.width();
    let row_h = table.row_height;

    if let Some(fill) = table.header_fill {
        ctx.fill_rect(Rect::new(area.x, area.y, width, row_h), fill);
    }

    let rows = std::iter::once(&table.header).chain(table.rows.iter());
    for (r, row) in rows.enumerate() {
        let row_top = area.y + r as f32 * row_h;
        let mut cell_x = area.x;
        for (cell, col_w) in row.cells.iter().zip(&table.column_widths) {
            if !cell.text.is_empty() {
                let resource = state.fonts.resource_name(&cell.font);
                let baseline = row_top + row_h / 2.0 + cell.font.size * 0.35;
                ctx.text(
                    cell_x + CELL_PADDING,
                    baseline,
                    &resource,
                    cell.font.size,
                    cell.font.color,
                    &cell.text,
                );
            }
            cell_x += col_w;
        }
    }

    let height = table.height();
    ctx.stroke_rect(Rect::new(area.x, area.y, width, height), table.border, 0.5);
    for r in 1..=table.rows.len() {
        let y = area.y + r as f32 * row_h;
        ctx.line((area.x, y), (area.x + width, y), table.border, 0.5);
    }
    let mut x = area.x;
    for col_w in table.column_widths.iter().take(table.column_widths.len().saturating_sub(1)) {
        x += col_w;
        ctx.line((x, area.y), (x, area.y + height), table.border, 0.5);
    }
}

fn embed_picture(
    pdf: &mut lopdf::Document,
    state: &mut RenderState,
    picture: &Picture,
) -> Result<(String, FormXObject), RenderError> {
    let bytes = match &picture.data {
        Some(data) => data.as_ref().clone(),
        None => std::fs::read(Path::new(&picture.src)).map_err(|source| RenderError::Io {
            path: picture.src.clone().into(),
            source,
        })?,
    };
    let source = lopdf::Document::load_mem(&bytes)?;
    let form = import_page_as_form(pdf, &source, 1)?;
    state.forms += 1;
    let resource = format!("Im{}", state.forms);
    state.xobjects.set(resource.clone(), Object::Reference(form.id));
    log::debug!("Embedded '{}' as /{}", picture.src, resource);
    Ok((resource, form))
}

/// The largest rectangle of the given aspect ratio centred in `frame`.
fn fit_into(frame: Rect, width: f32, height: f32) -> Rect {
    let scale = (frame.width / width).min(frame.height / height);
    let w = width * scale;
    let h = height * scale;
    Rect::new(
        frame.x + (frame.width - w) / 2.0,
        frame.y + (frame.height - h) / 2.0,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use factsheet_idf::{Page, Paragraph, Run, TableCell, TableRow};
    use factsheet_style::FontAttributes;
    use factsheet_types::{Color, Size};

    fn text_of(pdf: &lopdf::Document) -> String {
        let pages = pdf.get_pages();
        let id = *pages.get(&1).unwrap();
        String::from_utf8_lossy(&pdf.get_page_content(id).unwrap()).into_owned()
    }

    fn sample() -> Document {
        let mut page = Page::new(Size::new(960.0, 540.0));
        page.push(Element::new(
            Rect::new(0.0, 0.0, 960.0, 36.0),
            ElementKind::Rectangle { fill: Color::rgb(0, 55, 129) },
        ));
        page.push(Element::new(
            Rect::new(24.0, 44.0, 400.0, 40.0),
            ElementKind::TextFrame(TextFrame::new(vec![
                Paragraph::new(vec![
                    Run::new("Acme ", FontAttributes::new("Arial", 24.0).bold()),
                    Run::new("Corp", FontAttributes::new("Arial", 24.0).italic()),
                ]),
                Paragraph::single("second line", FontAttributes::default()),
            ])),
        ));
        let font = FontAttributes::new("Helvetica", 8.0);
        let cell = |t: &str| TableCell {
            text: t.to_string(),
            font: font.clone(),
        };
        page.push(Element::new(
            Rect::new(500.0, 296.0, 100.0, 36.0),
            ElementKind::Table(TableElement {
                column_widths: vec![50.0, 50.0],
                row_height: 18.0,
                header: TableRow { cells: vec![cell("ID"), cell("Value")] },
                rows: vec![TableRow { cells: vec![cell("CW1"), cell("1.00")] }],
                header_fill: Some(Color::BLACK),
                border: Color::gray(160),
            }),
        ));
        Document::new(vec![page])
    }

    #[test]
    fn test_renders_text_tables_and_fonts() {
        let _ = env_logger::builder().is_test(true).try_init();
        let pdf = PdfRenderer::new().with_title("Acme").render(&sample()).unwrap();
        assert_eq!(pdf.get_pages().len(), 1);
        let text = text_of(&pdf);
        assert!(text.contains("(Acme )"));
        assert!(text.contains("(second line)"));
        assert!(text.contains("(CW1)"));

        let names: Vec<String> = pdf
            .objects
            .values()
            .filter_map(|o| o.as_dict().ok())
            .filter_map(|d| d.get(b"Font").ok())
            .filter_map(|f| f.as_dict().ok())
            .flat_map(|fonts| fonts.iter().map(|(_, f)| f.clone()).collect::<Vec<_>>())
            .filter_map(|f| {
                let dict = f.as_dict().ok()?;
                let name = dict.get(b"BaseFont").ok()?.as_name().ok()?;
                Some(String::from_utf8_lossy(name).into_owned())
            })
            .collect();
        assert!(names.contains(&"Helvetica-Bold".to_string()));
        assert!(names.contains(&"Helvetica-Oblique".to_string()));
        assert!(names.contains(&"Helvetica".to_string()));
    }

    #[test]
    fn test_bytes_reload() {
        let bytes = PdfRenderer::new().render_to_bytes(&sample()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        let reloaded = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(reloaded.get_pages().len(), 1);
    }

    #[test]
    fn test_empty_document_is_an_error() {
        assert!(PdfRenderer::new().render(&Document::default()).is_err());
    }

    #[test]
    fn test_fit_into_keeps_aspect_ratio() {
        let placed = fit_into(Rect::new(0.0, 0.0, 400.0, 100.0), 480.0, 300.0);
        assert!((placed.height - 100.0).abs() < 1e-3);
        assert!((placed.width - 160.0).abs() < 1e-3);
        assert!((placed.x - 120.0).abs() < 1e-3);
    }
}
