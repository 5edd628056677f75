use factsheet_layout::LayoutError;
use factsheet_render_lopdf::RenderError;
use factsheet_source::SourceError;
use factsheet_template::TemplateError;
use factsheet_types::VendorId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the whole batch.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Input data error: {0}")]
    Source(#[from] SourceError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Failed to read configuration '{path}': {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration is not valid JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Errors that fail a single vendor. The batch records them and moves on.
#[derive(Error, Debug)]
pub enum VendorError {
    #[error("Table layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Template page {0} does not exist")]
    MissingPage(usize),

    #[error("Output file '{path}' is already taken by {owner}")]
    NameCollision { path: PathBuf, owner: VendorId },

    #[error("Failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
