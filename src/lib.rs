//! Vendor fact sheet generation.
//!
//! Three procurement extracts (IT spend, contracts, sourcing events) are
//! filtered to IT infrastructure, joined per vendor, and rendered into one
//! single-page PDF per vendor from a shared template.

pub mod error;
pub mod pipeline;

pub use error::{PipelineError, VendorError};
pub use pipeline::{
    Clock, DocumentAssembler, FactSheetPipeline, FixedClock, PipelineBuilder, PipelineConfig,
    RunSummary, SystemClock, VendorOutcome, VendorReport,
};

pub use factsheet_idf as idf;
pub use factsheet_layout as layout;
pub use factsheet_render_lopdf as render;
pub use factsheet_source as source;
pub use factsheet_style as style;
pub use factsheet_template as template;
pub use factsheet_traits as traits;
pub use factsheet_types as types;
