use crate::error::PipelineError;
use factsheet_template::StandardLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for one batch run, loadable from a camelCase JSON file.
///
/// ```json
/// {
///   "itSpend": "data/it_spend.csv",
///   "contracts": "data/contracting_report.csv",
///   "sourcing": "data/sourcing_events.csv",
///   "profiles": "data/vendors.json",
///   "outputDir": "output",
///   "seed": 42
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    pub it_spend: PathBuf,
    pub contracts: PathBuf,
    pub sourcing: PathBuf,
    /// JSON profile store. Without one every vendor gets "data not available".
    pub profiles: Option<PathBuf>,
    /// JSON template. Without one the built-in standard template is used.
    pub template: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub chart_dir: PathBuf,
    /// Where to export the filtered tables, if anywhere.
    pub cleaned_dir: Option<PathBuf>,
    /// Seed for the spend history simulation. Unseeded runs draw from the OS.
    pub seed: Option<u64>,
    pub layout: StandardLayout,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            it_spend: PathBuf::from("data/Supplier_fact_sheet_IT_spend_2024.csv"),
            contracts: PathBuf::from("data/Supplier_fact_sheet_Contracting_report.csv"),
            sourcing: PathBuf::from("data/Supplier_fact_sheet_sourcing_event_participation.csv"),
            profiles: None,
            template: None,
            output_dir: PathBuf::from("output"),
            chart_dir: PathBuf::from("charts"),
            cleaned_dir: None,
            seed: None,
            layout: StandardLayout::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let text = std::fs::read_to_string(path).map_err(|source| PipelineError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
