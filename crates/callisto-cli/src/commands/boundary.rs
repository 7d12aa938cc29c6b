use std::path::PathBuf;

use anyhow::Result;
use callisto_core::consts::{DEFAULT_BOUNDARY_EROSION_SIZE, DEFAULT_DENOISE_SE_SIZE};
use callisto_core::morphology::BoundaryConfig;
use callisto_core::pipeline::{PipelineConfig, Task};
use clap::Args;

use super::pipeline::execute;

#[derive(Args)]
pub struct BoundaryArgs {
    /// Input image (raw, PNG, TIFF, ...)
    pub file: PathBuf,

    /// Side of the denoising opening
    #[arg(long, default_value_t = DEFAULT_DENOISE_SE_SIZE)]
    pub opening_size: usize,

    /// Side of the erosion subtracted from the opened image
    #[arg(long, default_value_t = DEFAULT_BOUNDARY_EROSION_SIZE)]
    pub erosion_size: usize,

    /// Binarize the input first (values >= threshold become foreground)
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Output file path
    #[arg(short, long, default_value = "boundary.png")]
    pub output: PathBuf,
}

pub fn run(args: &BoundaryArgs) -> Result<()> {
    let boundary = BoundaryConfig {
        opening_size: args.opening_size,
        erosion_size: args.erosion_size,
    };
    let mut config = PipelineConfig::new(&args.file, &args.output, Task::Boundary(boundary));
    config.threshold = args.threshold;
    execute(&config)
}
