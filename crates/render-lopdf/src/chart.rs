//! Spend bar charts as standalone single-page PDFs.
//!
//! The chart is drawn with the same canvas and base-14 fonts as the fact
//! sheet itself, so the artifact stays vector all the way through and the
//! renderer can embed it as a form XObject.

use crate::canvas::PageContext;
use crate::error::RenderError;
use crate::fonts::FontRegistry;
use crate::output::write_atomic;
use factsheet_types::{Color, DataShapeError, Rect, Size, VendorId};
use lopdf::{Object, dictionary};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Dark to light.
pub const DEFAULT_PALETTE: [Color; 3] = [
    Color::rgb(0x00, 0x37, 0x81),
    Color::rgb(0x4F, 0x7F, 0xC0),
    Color::rgb(0xA7, 0xC4, 0xE8),
];

pub const DEFAULT_YEARS: [i32; 3] = [2022, 2023, 2024];

const TITLE_SIZE: f32 = 13.0;
const LABEL_SIZE: f32 = 9.0;
const TICK_SIZE: f32 = 8.0;
const TEXT: Color = Color::rgb(0x33, 0x33, 0x33);
const GRID: Color = Color::rgb(0xDD, 0xDD, 0xDD);
const AXIS: Color = Color::rgb(0x66, 0x66, 0x66);
const TICKS: usize = 4;

/// A rendered chart: where it was written and the bytes that were written.
#[derive(Debug, Clone)]
pub struct ChartArtifact {
    pub path: PathBuf,
    pub bytes: Arc<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub struct ChartRenderer {
    output_dir: PathBuf,
    size: Size,
    palette: [Color; 3],
    years: [i32; 3],
}

struct PlotArea {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl PlotArea {
    fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

impl ChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            size: Size::new(480.0, 300.0),
            palette: DEFAULT_PALETTE,
            years: DEFAULT_YEARS,
        }
    }

    pub fn with_years(mut self, years: [i32; 3]) -> Self {
        self.years = years;
        self
    }

    pub fn with_palette(mut self, palette: [Color; 3]) -> Self {
        self.palette = palette;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `{output_dir}/{vendor}_spend_chart.pdf`
    pub fn path_for(&self, vendor: &VendorId) -> PathBuf {
        self.output_dir
            .join(format!("{}_spend_chart.pdf", vendor.file_stem()))
    }

    /// Renders the chart for `series` (oldest year first) and writes it,
    /// replacing any earlier chart of the same vendor.
    pub fn render(&self, vendor: &VendorId, series: &[f64]) -> Result<ChartArtifact, RenderError> {
        let bytes = self.render_to_bytes(vendor, series)?;
        std::fs::create_dir_all(&self.output_dir).map_err(|source| RenderError::Io {
            path: self.output_dir.clone(),
            source,
        })?;
        let path = self.path_for(vendor);
        write_atomic(&path, &bytes)?;
        log::debug!("Wrote chart for {} to {}", vendor, path.display());
        Ok(ChartArtifact {
            path,
            bytes: Arc::new(bytes),
        })
    }

    pub fn render_to_bytes(&self, vendor: &VendorId, series: &[f64]) -> Result<Vec<u8>, RenderError> {
        let values = validate_series(vendor, series)?;

        let mut fonts = FontRegistry::new();
        let regular = fonts.resource_for_face("Helvetica");
        let bold = fonts.resource_for_face("Helvetica-Bold");
        let mut ctx = PageContext::new(self.size.height);

        let title = format!("IT Spend Overview — {vendor}");
        ctx.text(16.0, 24.0, &bold, TITLE_SIZE, TEXT, &title);

        let plot = PlotArea {
            left: 64.0,
            top: 48.0,
            width: self.size.width - 80.0,
            height: self.size.height - 100.0,
        };
        let max = values.iter().copied().fold(0.0f64, f64::max);
        let (step, axis_max) = nice_scale(max, TICKS);

        for i in 0..=((axis_max / step).round() as usize) {
            let value = step * i as f64;
            let y = plot.bottom() - (value / axis_max) as f32 * plot.height;
            if i > 0 {
                ctx.line((plot.left, y), (plot.left + plot.width, y), GRID, 0.5);
            }
            let label = format_tick(value, step);
            let x = plot.left - 6.0 - approx_width(&label, TICK_SIZE);
            ctx.text(x, y + TICK_SIZE * 0.35, &regular, TICK_SIZE, TEXT, &label);
        }

        let slot = plot.width / values.len() as f32;
        let bar_width = slot * 0.5;
        for (i, value) in values.iter().enumerate() {
            let bar_height = (value / axis_max) as f32 * plot.height;
            let x = plot.left + i as f32 * slot + (slot - bar_width) / 2.0;
            let top = plot.bottom() - bar_height;
            if bar_height > 0.0 {
                ctx.fill_rect(
                    Rect::new(x, top, bar_width, bar_height),
                    self.palette[i % self.palette.len()],
                );
            }

            let centre = x + bar_width / 2.0;
            let label = format!("{value:.2}");
            let label_x = centre - approx_width(&label, LABEL_SIZE) / 2.0;
            ctx.text(label_x, top - 4.0, &regular, LABEL_SIZE, TEXT, &label);

            let year = self.years[i].to_string();
            let year_x = centre - approx_width(&year, LABEL_SIZE) / 2.0;
            ctx.text(year_x, plot.bottom() + 14.0, &regular, LABEL_SIZE, TEXT, &year);
        }

        ctx.line((plot.left, plot.top), (plot.left, plot.bottom()), AXIS, 0.75);
        ctx.line(
            (plot.left, plot.bottom()),
            (plot.left + plot.width, plot.bottom()),
            AXIS,
            0.75,
        );

        let centre_x = plot.left + plot.width / 2.0;
        ctx.text(
            centre_x - approx_width("Year", LABEL_SIZE) / 2.0,
            plot.bottom() + 34.0,
            &bold,
            LABEL_SIZE,
            TEXT,
            "Year",
        );
        let centre_y = plot.top + plot.height / 2.0;
        ctx.begin_rotated_text(22.0, centre_y + approx_width("Spend", LABEL_SIZE) / 2.0);
        ctx.show_text(&bold, LABEL_SIZE, TEXT, "Spend");
        ctx.end_text();

        let content = ctx.into_content().encode()?;
        single_page_pdf(self.size, content, &fonts, &title)
    }
}

fn validate_series(vendor: &VendorId, series: &[f64]) -> Result<[f64; 3], DataShapeError> {
    let subject = format!("spend series of {vendor}");
    let values: [f64; 3] = match series {
        [] => return Err(DataShapeError::new(subject, "series is empty")),
        [a, b, c] => [*a, *b, *c],
        other => {
            return Err(DataShapeError::new(
                subject,
                format!("expected 3 values, got {}", other.len()),
            ));
        }
    };
    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(DataShapeError::new(subject, format!("invalid value {bad}")));
    }
    Ok(values)
}

/// Tick step and axis maximum for values in `0..=max`, using 1/2/5 steps.
fn nice_scale(max: f64, ticks: usize) -> (f64, f64) {
    if max <= 0.0 {
        return (0.25, 1.0);
    }
    let raw = max / ticks as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = match raw / magnitude {
        f if f <= 1.0 => magnitude,
        f if f <= 2.0 => 2.0 * magnitude,
        f if f <= 5.0 => 5.0 * magnitude,
        _ => 10.0 * magnitude,
    };
    // subnormal maxima underflow to a zero step
    if step <= 0.0 || !step.is_finite() {
        return (0.25, 1.0);
    }
    (step, (max / step).ceil() * step)
}

fn format_tick(value: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{value:.0}")
    } else {
        let decimals = (-step.log10().floor()) as usize;
        format!("{value:.decimals$}")
    }
}

/// Helvetica averages roughly half an em per character.
fn approx_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.52
}

fn single_page_pdf(
    size: Size,
    content: Vec<u8>,
    fonts: &FontRegistry,
    title: &str,
) -> Result<Vec<u8>, RenderError> {
    let mut pdf = lopdf::Document::with_version("1.7");
    let pages_id = pdf.new_object_id();
    let content_id = pdf.add_object(lopdf::Stream::new(dictionary! {}, content));
    let resources_id = pdf.add_object(dictionary! { "Font" => fonts.to_dictionary() });
    let page_id = pdf.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.0.into(), 0.0.into(), size.width.into(), size.height.into()],
        "Contents" => content_id,
        "Resources" => resources_id,
    });
    pdf.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1_i64,
        }
        .into(),
    );
    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);
    let info_id = pdf.add_object(dictionary! {
        "Producer" => Object::string_literal("factsheet"),
        "Title" => Object::String(crate::encoding::to_win_ansi(title), lopdf::StringFormat::Literal),
    });
    pdf.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes).map_err(|source| RenderError::Io {
        path: "<memory>".into(),
        source,
    })?;
    Ok(bytes)
}
