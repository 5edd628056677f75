//! Loading, cleaning and per-vendor slicing of the three inputs.

use crate::dataset::Dataset;
use crate::error::SourceError;
use crate::extract::{contract_records, project_records, spend_records};
use crate::roster::VendorRoster;
use crate::schema::{self, contracts, sourcing, spend};
use crate::simulate::{SimulatedSpend, simulate_history, sum_series};
use factsheet_types::{ContractRecord, ProjectRecord, VendorId};
use rand::Rng;
use std::path::Path;

/// The three input tables, as loaded.
#[derive(Debug, Clone)]
pub struct RawDatasets {
    pub it_spend: Dataset,
    pub contracts: Dataset,
    pub sourcing: Dataset,
}

impl RawDatasets {
    pub fn load(it_spend: &Path, contracts: &Path, sourcing: &Path) -> Result<Self, SourceError> {
        Ok(Self {
            it_spend: Dataset::from_csv_path(spend::DATASET, it_spend)?,
            contracts: Dataset::from_csv_path(contracts::DATASET, contracts)?,
            sourcing: Dataset::from_csv_path(sourcing::DATASET, sourcing)?,
        })
    }

    /// Applies the category filters to each table.
    pub fn clean(&self) -> Result<CleanedDatasets, SourceError> {
        let cleaned = CleanedDatasets {
            it_spend: self.it_spend.filter(&schema::spend_filter())?,
            contracts: self.contracts.filter(&schema::contracts_filter())?,
            sourcing: self.sourcing.filter(&schema::sourcing_filter())?,
        };
        log::info!(
            "Cleaned datasets: {} spend rows, {} contracts, {} sourcing events",
            cleaned.it_spend.len(),
            cleaned.contracts.len(),
            cleaned.sourcing.len()
        );
        Ok(cleaned)
    }
}

/// The filtered tables, still untyped.
#[derive(Debug, Clone)]
pub struct CleanedDatasets {
    pub it_spend: Dataset,
    pub contracts: Dataset,
    pub sourcing: Dataset,
}

impl CleanedDatasets {
    /// Writes the three tables under their conventional file names.
    pub fn export(&self, dir: &Path) -> Result<(), SourceError> {
        std::fs::create_dir_all(dir).map_err(|e| SourceError::io(dir, e))?;
        self.it_spend.write_csv_path(&dir.join(spend::CLEANED_FILE))?;
        self.contracts.write_csv_path(&dir.join(contracts::CLEANED_FILE))?;
        self.sourcing.write_csv_path(&dir.join(sourcing::CLEANED_FILE))?;
        log::info!("Exported cleaned datasets to {}", dir.display());
        Ok(())
    }

    pub fn roster(&self) -> Result<VendorRoster, SourceError> {
        VendorRoster::build(&[
            (&self.it_spend, spend::VENDOR),
            (&self.contracts, contracts::SUPPLIER),
            (&self.sourcing, sourcing::SUPPLIER),
        ])
    }

    /// Extracts typed records and simulates spend history.
    pub fn into_records<R: Rng>(self, rng: &mut R) -> Result<CleanedData, SourceError> {
        let roster = self.roster()?;
        let spend = simulate_history(spend_records(&self.it_spend)?, rng);
        Ok(CleanedData {
            spend,
            contracts: contract_records(&self.contracts)?,
            projects: project_records(&self.sourcing)?,
            roster,
        })
    }
}

/// Immutable, typed inputs shared by every vendor iteration.
#[derive(Debug, Clone, Default)]
pub struct CleanedData {
    pub spend: Vec<SimulatedSpend>,
    pub contracts: Vec<ContractRecord>,
    pub projects: Vec<ProjectRecord>,
    pub roster: VendorRoster,
}

impl CleanedData {
    /// Rows of each kind whose vendor matches exactly, in input order.
    pub fn slice<'a>(&'a self, vendor: &'a VendorId) -> VendorSlice<'a> {
        VendorSlice {
            vendor,
            spend: self
                .spend
                .iter()
                .filter(|s| &s.record().vendor == vendor)
                .collect(),
            contracts: self.contracts.iter().filter(|c| &c.supplier == vendor).collect(),
            projects: self.projects.iter().filter(|p| &p.supplier == vendor).collect(),
        }
    }
}

/// A borrowed view of one vendor's rows. Lives for one vendor iteration.
#[derive(Debug, Clone)]
pub struct VendorSlice<'a> {
    pub vendor: &'a VendorId,
    pub spend: Vec<&'a SimulatedSpend>,
    pub contracts: Vec<&'a ContractRecord>,
    pub projects: Vec<&'a ProjectRecord>,
}

impl VendorSlice<'_> {
    /// Per-year spend totals, oldest first.
    pub fn spend_series(&self) -> [f64; 3] {
        sum_series(self.spend.iter().copied())
    }

    pub fn has_spend(&self) -> bool {
        !self.spend.is_empty()
    }
}
