use super::assembler::{DocumentAssembler, RunSummary};
use super::config::PipelineConfig;
use crate::error::PipelineError;
use factsheet_source::RawDatasets;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A configured batch: load and clean the inputs, then assemble one sheet
/// per vendor.
#[derive(Debug)]
pub struct FactSheetPipeline {
    config: PipelineConfig,
    assembler: DocumentAssembler,
}

impl FactSheetPipeline {
    pub(super) fn new(config: PipelineConfig, assembler: DocumentAssembler) -> Self {
        Self { config, assembler }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn assembler(&self) -> &DocumentAssembler {
        &self.assembler
    }

    /// Loads the three CSV inputs named in the configuration and runs.
    pub fn run(&self) -> Result<RunSummary, PipelineError> {
        log::info!(
            "Loading inputs: {}, {}, {}",
            self.config.it_spend.display(),
            self.config.contracts.display(),
            self.config.sourcing.display()
        );
        let raw = RawDatasets::load(&self.config.it_spend, &self.config.contracts, &self.config.sourcing)?;
        self.run_datasets(&raw)
    }

    /// Runs over already loaded inputs. Schema problems abort before any
    /// vendor is processed; per-vendor failures end up in the summary.
    pub fn run_datasets(&self, raw: &RawDatasets) -> Result<RunSummary, PipelineError> {
        let cleaned = raw.clean()?;
        if let Some(dir) = &self.config.cleaned_dir {
            cleaned.export(dir)?;
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let data = cleaned.into_records(&mut rng)?;
        log::info!("Roster holds {} vendors", data.roster.len());

        Ok(self.assembler.run(&data))
    }
}
