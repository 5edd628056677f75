use super::assembler::{Clock, DocumentAssembler, SystemClock};
use super::config::PipelineConfig;
use super::orchestrator::FactSheetPipeline;
use crate::error::PipelineError;
use factsheet_render_lopdf::ChartRenderer;
use factsheet_source::JsonProfileProvider;
use factsheet_template::{StandardLayout, Template, standard_template};
use factsheet_traits::{InMemoryProfileProvider, ProfileProvider};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A builder for creating a `FactSheetPipeline`.
///
/// Anything not set explicitly comes from the [`PipelineConfig`]: the
/// template file (or the built-in template), the profile store (or no
/// profiles at all), and the seed.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
    template: Option<Template>,
    profiles: Option<Arc<dyn ProfileProvider>>,
    clock: Option<Arc<dyn Clock>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: PipelineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replaces the configuration with the contents of a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = PipelineConfig::load(path.as_ref())?;
        Ok(self)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn with_inputs(
        mut self,
        it_spend: impl Into<PathBuf>,
        contracts: impl Into<PathBuf>,
        sourcing: impl Into<PathBuf>,
    ) -> Self {
        self.config.it_spend = it_spend.into();
        self.config.contracts = contracts.into();
        self.config.sourcing = sourcing.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn with_chart_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.chart_dir = dir.into();
        self
    }

    /// Also write the filtered tables as CSV into `dir`.
    pub fn with_cleaned_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.cleaned_dir = Some(dir.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_layout(mut self, layout: StandardLayout) -> Self {
        self.config.layout = layout;
        self
    }

    /// Uses a programmatically built template instead of a file.
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_template_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.template = Some(path.into());
        self
    }

    pub fn with_profile_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.profiles = Some(path.into());
        self
    }

    pub fn with_profile_provider(mut self, provider: Arc<dyn ProfileProvider>) -> Self {
        self.profiles = Some(provider);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Consumes the builder, loading the template and profile store.
    pub fn build(self) -> Result<FactSheetPipeline, PipelineError> {
        let config = self.config;

        let template = match (self.template, &config.template) {
            (Some(template), _) => template,
            (None, Some(path)) => Template::load(path)?,
            (None, None) => standard_template(),
        };
        if config.layout.page >= template.document().pages.len() {
            return Err(PipelineError::Config(format!(
                "Layout targets page {} but template '{}' has {} page(s)",
                config.layout.page,
                template.name(),
                template.document().pages.len()
            )));
        }

        let profiles: Arc<dyn ProfileProvider> = match (self.profiles, &config.profiles) {
            (Some(provider), _) => provider,
            (None, Some(path)) => Arc::new(JsonProfileProvider::load(path)?),
            (None, None) => {
                log::info!("No profile store configured; all profile sections will read 'data not available'");
                Arc::new(InMemoryProfileProvider::new())
            }
        };
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let assembler = DocumentAssembler::new(
            template,
            config.layout,
            ChartRenderer::new(&config.chart_dir),
            profiles,
            clock,
            &config.output_dir,
        );
        Ok(FactSheetPipeline::new(config, assembler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_build() {
        let pipeline = PipelineBuilder::new().with_seed(1).build().unwrap();
        assert_eq!(pipeline.config().seed, Some(1));
        assert_eq!(pipeline.assembler().output_dir(), Path::new("output"));
    }

    #[test]
    fn test_layout_page_must_exist() {
        let layout = StandardLayout {
            page: 2,
            ..StandardLayout::default()
        };
        assert!(matches!(
            PipelineBuilder::new().with_layout(layout).build(),
            Err(PipelineError::Config(_))
        ));
    }

    #[test]
    fn test_missing_template_file() {
        assert!(matches!(
            PipelineBuilder::new().with_template_file("no/such/template.json").build(),
            Err(PipelineError::Template(_))
        ));
    }

    #[test]
    fn test_missing_profile_file() {
        assert!(matches!(
            PipelineBuilder::new().with_profile_file("no/such/profiles.json").build(),
            Err(PipelineError::Source(_))
        ));
    }
}
