#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use chrono::NaiveDate;
use factsheet::{FixedClock, PipelineBuilder};
use lopdf::Document as LopdfDocument;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// The date every test sheet is stamped with.
pub fn sheet_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

/// A temporary directory holding the standard CSV inputs and profile store,
/// with separate output and chart directories.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        fixtures::write_standard_inputs(dir.path())?;
        fixtures::write_profiles(dir.path())?;
        Ok(Self { dir })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path("output")
    }

    pub fn chart_dir(&self) -> PathBuf {
        self.path("charts")
    }

    pub fn sheet(&self, vendor: &str) -> PathBuf {
        self.output_dir().join(format!("{vendor}_Vendor_Fact_Sheet.pdf"))
    }

    pub fn chart(&self, vendor: &str) -> PathBuf {
        self.chart_dir().join(format!("{vendor}_spend_chart.pdf"))
    }

    /// A builder wired to this workspace, seeded and with a fixed clock.
    pub fn builder(&self) -> PipelineBuilder {
        PipelineBuilder::new()
            .with_inputs(
                self.path(fixtures::IT_SPEND_FILE),
                self.path(fixtures::CONTRACTS_FILE),
                self.path(fixtures::SOURCING_FILE),
            )
            .with_profile_file(self.path(fixtures::PROFILES_FILE))
            .with_output_dir(self.output_dir())
            .with_chart_dir(self.chart_dir())
            .with_seed(42)
            .with_clock(Arc::new(FixedClock(sheet_date())))
    }
}
