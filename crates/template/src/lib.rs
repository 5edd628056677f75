//! Fact sheet templates.
//!
//! A [`Template`] is an immutable blueprint document holding bracketed
//! placeholder tokens such as `[Vendor Name]`. Each vendor gets a fresh
//! [`Template::instantiate`] copy, which the [`substitute`] engine then fills
//! from a [`PlaceholderMap`].
//!
//! Templates can be loaded from JSON, or built in code with the fluent
//! builders in [`builders`]:
//!
//! ```ignore
//! use factsheet_template::builders::*;
//!
//! let page = PageBuilder::new(960.0, 540.0)
//!     .element(TextBox::new(24.0, 40.0, 400.0, 30.0).named("title").paragraph(h1("[Vendor Name]")))
//!     .build();
//! ```

use std::path::PathBuf;
use thiserror::Error;

mod blueprint;
pub mod builders;
pub mod standard;
pub mod substitute;

pub use blueprint::Template;
pub use standard::{StandardLayout, standard_template};
pub use substitute::{PlaceholderMap, SubstitutionReport, substitute};

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template parsing failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid template: {0}")]
    Invalid(String),

    #[error("IO error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
