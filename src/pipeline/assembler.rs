//! Per-vendor assembly of fact sheets.
//!
//! For each vendor the assembler clones the template, places the spend chart
//! and the two tables, fills the placeholders, and writes the PDF. A vendor
//! that fails is recorded in the [`RunSummary`]; the batch continues.

use super::persist::persist_document;
use super::placeholders::build_placeholders;
use crate::error::VendorError;
use chrono::NaiveDate;
use factsheet_idf::{Element, ElementKind, Picture};
use factsheet_layout::{TableSpec, contracts_table, projects_table};
use factsheet_render_lopdf::{ChartArtifact, ChartRenderer, PdfRenderer};
use factsheet_source::{CleanedData, VendorSlice};
use factsheet_template::{StandardLayout, Template, substitute};
use factsheet_traits::{ProfileLookup, ProfileProvider};
use factsheet_types::{FormatWarning, VendorId, VendorProfile};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Source of the date printed on each sheet.
pub trait Clock: Send + Sync + fmt::Debug {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A written fact sheet.
#[derive(Debug, Clone)]
pub struct VendorReport {
    pub vendor: VendorId,
    pub path: PathBuf,
    pub chart: PathBuf,
    pub warnings: Vec<FormatWarning>,
}

#[derive(Debug, Clone)]
pub enum VendorOutcome {
    Written(VendorReport),
    Skipped { vendor: VendorId, reason: String },
}

/// What happened to every vendor of a run.
#[derive(Debug, Default, Clone)]
pub struct RunSummary {
    pub processed: Vec<VendorReport>,
    pub skipped: Vec<(VendorId, String)>,
    pub failed: Vec<(VendorId, String)>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.processed.len() + self.skipped.len() + self.failed.len()
    }

    pub fn warning_count(&self) -> usize {
        self.processed.iter().map(|r| r.warnings.len()).sum()
    }

    fn record(&mut self, vendor: &VendorId, result: Result<VendorOutcome, VendorError>) {
        match result {
            Ok(VendorOutcome::Written(report)) => self.processed.push(report),
            Ok(VendorOutcome::Skipped { vendor, reason }) => {
                log::warn!("Skipped {vendor}: {reason}");
                self.skipped.push((vendor, reason));
            }
            Err(e) => {
                log::warn!("Failed to build fact sheet for {vendor}: {e}");
                self.failed.push((vendor.clone(), e.to_string()));
            }
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Processed: {}, skipped: {}, failed: {} ({} formatting warnings)",
            self.processed.len(),
            self.skipped.len(),
            self.failed.len(),
            self.warning_count()
        )?;
        for (vendor, reason) in &self.skipped {
            writeln!(f, "  skipped {vendor}: {reason}")?;
        }
        for (vendor, reason) in &self.failed {
            writeln!(f, "  failed  {vendor}: {reason}")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct DocumentAssembler {
    template: Template,
    layout: StandardLayout,
    charts: ChartRenderer,
    profiles: Arc<dyn ProfileProvider>,
    clock: Arc<dyn Clock>,
    output_dir: PathBuf,
}

impl DocumentAssembler {
    pub fn new(
        template: Template,
        layout: StandardLayout,
        charts: ChartRenderer,
        profiles: Arc<dyn ProfileProvider>,
        clock: Arc<dyn Clock>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            template,
            layout,
            charts,
            profiles,
            clock,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `{output_dir}/{vendor}_Vendor_Fact_Sheet.pdf`
    pub fn output_path(&self, vendor: &VendorId) -> PathBuf {
        self.output_dir
            .join(format!("{}_Vendor_Fact_Sheet.pdf", vendor.file_stem()))
    }

    /// Builds a sheet for every vendor of the roster, in name order.
    ///
    /// Distinct names can share a file stem ("A/B" and "A_B"). The first
    /// vendor written under a stem keeps it; later ones fail with
    /// [`VendorError::NameCollision`] instead of overwriting its files.
    pub fn run(&self, data: &CleanedData) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut claimed: HashMap<PathBuf, VendorId> = HashMap::new();
        let vendors = data.roster.sorted();
        log::info!(
            "Assembling fact sheets for {} vendors with template '{}' and profiles from {}",
            vendors.len(),
            self.template.name(),
            self.profiles.name()
        );
        for vendor in &vendors {
            let path = self.output_path(vendor);
            let result = match claimed.get(&path).cloned() {
                Some(owner) => Err(VendorError::NameCollision { path, owner }),
                None => {
                    let result = self.assemble_vendor(data, vendor);
                    if let Ok(VendorOutcome::Written(report)) = &result {
                        claimed.insert(report.path.clone(), vendor.clone());
                    }
                    result
                }
            };
            summary.record(vendor, result);
        }
        log::info!(
            "Finished: {} written, {} skipped, {} failed",
            summary.processed.len(),
            summary.skipped.len(),
            summary.failed.len()
        );
        summary
    }

    pub fn assemble_vendor(&self, data: &CleanedData, vendor: &VendorId) -> Result<VendorOutcome, VendorError> {
        let slice = data.slice(vendor);
        if !slice.has_spend() {
            return Ok(VendorOutcome::Skipped {
                vendor: vendor.clone(),
                reason: "no IT spend rows".to_string(),
            });
        }

        let chart = self.charts.render(vendor, &slice.spend_series())?;
        let (document, warnings) = self.build_document(&slice, &chart)?;

        let bytes = PdfRenderer::new()
            .with_title(format!("{vendor} Vendor Fact Sheet"))
            .render_to_bytes(&document)?;
        let path = self.output_path(vendor);
        persist_document(&path, &bytes)?;
        log::info!("Wrote {}", path.display());

        Ok(VendorOutcome::Written(VendorReport {
            vendor: vendor.clone(),
            path,
            chart: chart.path,
            warnings,
        }))
    }

    /// The filled working document for one vendor.
    fn build_document(
        &self,
        slice: &VendorSlice<'_>,
        chart: &ChartArtifact,
    ) -> Result<(factsheet_idf::Document, Vec<FormatWarning>), VendorError> {
        let mut document = self.template.instantiate();
        let mut warnings = Vec::new();

        let contracts = contracts_table(&TableSpec::contracts(), self.layout.contracts_origin, &slice.contracts)?;
        let projects = projects_table(&TableSpec::projects(), self.layout.projects_origin, &slice.projects)?;

        let page = document
            .pages
            .get_mut(self.layout.page)
            .ok_or(VendorError::MissingPage(self.layout.page))?;
        page.push(
            Element::new(
                self.layout.chart_frame,
                ElementKind::Picture(Picture {
                    src: chart.path.display().to_string(),
                    data: Some(chart.bytes.clone()),
                }),
            )
            .named("spend-chart"),
        );
        for table in [contracts, projects] {
            page.push(table.element);
            warnings.extend(table.warnings);
        }

        let profile = self.lookup_profile(slice.vendor);
        let placeholders = build_placeholders(slice.vendor, profile.as_ref(), self.clock.today());
        let report = substitute(&mut document, &placeholders);
        log::debug!("{}: {} placeholder replacements", slice.vendor, report.replaced);
        warnings.extend(report.warnings);

        Ok((document, warnings))
    }

    /// Lookup failures degrade to an absent profile.
    fn lookup_profile(&self, vendor: &VendorId) -> Option<VendorProfile> {
        match self.profiles.lookup(vendor) {
            Ok(ProfileLookup::Found(profile)) => Some(profile),
            Ok(ProfileLookup::NotFound) => {
                log::info!("No profile for {vendor}, using placeholder text");
                None
            }
            Err(e) => {
                log::warn!("Profile lookup for {vendor} failed: {e}");
                None
            }
        }
    }
}
