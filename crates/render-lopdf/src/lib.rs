//! PDF output for fact sheets using lopdf.
//!
//! [`PdfRenderer`] turns an IDF document into a PDF with the base-14 fonts,
//! and [`ChartRenderer`] draws the spend bar chart as a standalone
//! single-page PDF that the renderer later embeds as a form XObject.

mod canvas;
mod chart;
mod encoding;
mod error;
mod fonts;
mod output;
mod renderer;

pub use chart::{ChartArtifact, ChartRenderer, DEFAULT_PALETTE, DEFAULT_YEARS};
pub use encoding::to_win_ansi;
pub use error::RenderError;
pub use fonts::{base_family, styled_font_name};
pub use output::write_atomic;
pub use renderer::PdfRenderer;
