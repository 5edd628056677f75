//! Fact sheet generation pipeline.
//!
//! - [`PipelineBuilder`]: fluent builder composing config, template, profile
//!   provider and clock
//! - [`FactSheetPipeline`]: loads and cleans the inputs, then runs the
//!   [`DocumentAssembler`] over the vendor roster
//! - [`RunSummary`]: processed, skipped and failed vendors of a run
//!
//! # Example
//!
//! ```ignore
//! use factsheet::PipelineBuilder;
//!
//! let summary = PipelineBuilder::new()
//!     .with_inputs("it_spend.csv", "contracts.csv", "sourcing.csv")
//!     .with_profile_file("vendors.json")
//!     .with_output_dir("output")
//!     .build()?
//!     .run()?;
//! println!("{summary}");
//! ```

pub mod assembler;
mod builder;
pub mod config;
mod orchestrator;
pub mod persist;
pub mod placeholders;

pub use assembler::{
    Clock, DocumentAssembler, FixedClock, RunSummary, SystemClock, VendorOutcome, VendorReport,
};
pub use builder::PipelineBuilder;
pub use config::PipelineConfig;
pub use orchestrator::FactSheetPipeline;
