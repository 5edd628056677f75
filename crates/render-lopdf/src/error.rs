use factsheet_pdf_composer::ComposerError;
use factsheet_types::DataShapeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Invalid chart input: {0}")]
    DataShape(#[from] DataShapeError),

    #[error("Failed to embed graphic: {0}")]
    Composer(#[from] ComposerError),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Rendering error: {0}")]
    Other(String),
}
