use std::path::PathBuf;

use anyhow::Result;
use callisto_core::consts::DEFAULT_DENOISE_SE_SIZE;
use callisto_core::labeling::{BinaryPolicy, LabelConfig};
use callisto_core::pipeline::{PipelineConfig, Task};
use clap::Args;

use super::pipeline::execute;

#[derive(Args)]
pub struct LabelArgs {
    /// Input image (raw, PNG, TIFF, ...)
    pub file: PathBuf,

    /// Skip the denoising opening before labeling
    #[arg(long)]
    pub no_denoise: bool,

    /// Side of the denoising opening
    #[arg(long, default_value_t = DEFAULT_DENOISE_SE_SIZE)]
    pub denoise_size: usize,

    /// Reject inputs containing values other than 0 and 255
    #[arg(long)]
    pub strict: bool,

    /// Seed for the component colors
    #[arg(long)]
    pub seed: Option<u64>,

    /// Binarize the input first (values >= threshold become foreground)
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Output file path (color PNG or TIFF)
    #[arg(short, long, default_value = "labels.png")]
    pub output: PathBuf,
}

pub fn run(args: &LabelArgs) -> Result<()> {
    let label = LabelConfig {
        denoise: !args.no_denoise,
        denoise_size: args.denoise_size,
        binary_policy: if args.strict {
            BinaryPolicy::Strict
        } else {
            BinaryPolicy::Lenient
        },
        seed: args.seed,
    };
    let mut config = PipelineConfig::new(&args.file, &args.output, Task::Label(label));
    config.threshold = args.threshold;
    execute(&config)
}
