use std::path::PathBuf;

use anyhow::{Context, Result};
use callisto_core::pipeline::{run_pipeline, PipelineConfig, PipelineOutput};
use clap::Args;

#[derive(Args)]
pub struct RunArgs {
    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: PathBuf,

    /// Override the config's input file
    pub file: Option<PathBuf>,

    /// Override the config's output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    let mut config = PipelineConfig::from_toml(&contents).context("Invalid pipeline config")?;

    if let Some(ref file) = args.file {
        config.input = file.clone();
    }
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }

    execute(&config)
}

/// Print the summary, run the pipeline and report the outcome.
pub fn execute(config: &PipelineConfig) -> Result<()> {
    config.validate().context("Invalid parameters")?;
    crate::summary::print_pipeline_summary(config);

    let output = run_pipeline(config)
        .with_context(|| format!("Failed to process {}", config.input.display()))?;

    if let PipelineOutput::Labeled(ref labeling) = output {
        crate::summary::print_label_summary(labeling);
    }
    println!("Saved to {}", config.output.display());

    Ok(())
}
