use clap::Parser;
use factsheet::template::standard_template;
use factsheet::{PipelineBuilder, PipelineConfig, PipelineError};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generates one PDF fact sheet per IT infrastructure vendor.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON configuration file; the flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// IT spend extract (CSV)
    #[arg(long)]
    it_spend: Option<PathBuf>,

    /// Contracting report (CSV)
    #[arg(long)]
    contracts: Option<PathBuf>,

    /// Sourcing event participation (CSV)
    #[arg(long)]
    sourcing: Option<PathBuf>,

    /// Vendor profile store (JSON)
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// Fact sheet template (JSON); defaults to the built-in template
    #[arg(long)]
    template: Option<PathBuf>,

    #[arg(long)]
    output_dir: Option<PathBuf>,

    #[arg(long)]
    chart_dir: Option<PathBuf>,

    /// Also export the filtered tables as CSV into this directory
    #[arg(long)]
    cleaned_dir: Option<PathBuf>,

    /// Seed for the simulated spend history
    #[arg(long)]
    seed: Option<u64>,

    /// Write the built-in template as JSON to this file and exit
    #[arg(long, value_name = "FILE")]
    export_template: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<PipelineConfig, PipelineError> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(path) = self.it_spend {
            config.it_spend = path;
        }
        if let Some(path) = self.contracts {
            config.contracts = path;
        }
        if let Some(path) = self.sourcing {
            config.sourcing = path;
        }
        if let Some(path) = self.output_dir {
            config.output_dir = path;
        }
        if let Some(path) = self.chart_dir {
            config.chart_dir = path;
        }
        config.profiles = self.profiles.or(config.profiles);
        config.template = self.template.or(config.template);
        config.cleaned_dir = self.cleaned_dir.or(config.cleaned_dir);
        config.seed = self.seed.or(config.seed);
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    if let Some(path) = &cli.export_template {
        standard_template().save(path)?;
        println!("Wrote built-in template to {}", path.display());
        return Ok(());
    }

    let pipeline = PipelineBuilder::from_config(cli.into_config()?).build()?;
    let summary = pipeline.run()?;
    print!("{summary}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
