use std::path::PathBuf;

use anyhow::Result;
use callisto_core::morphology::{MorphConfig, MorphOp};
use callisto_core::pipeline::{PipelineConfig, Task};
use clap::{Args, ValueEnum};

use super::pipeline::execute;

#[derive(Clone, ValueEnum)]
pub enum MorphOpArg {
    Dilation,
    Erosion,
    Opening,
    Closing,
}

impl From<&MorphOpArg> for MorphOp {
    fn from(arg: &MorphOpArg) -> Self {
        match arg {
            MorphOpArg::Dilation => MorphOp::Dilation,
            MorphOpArg::Erosion => MorphOp::Erosion,
            MorphOpArg::Opening => MorphOp::Opening,
            MorphOpArg::Closing => MorphOp::Closing,
        }
    }
}

#[derive(Args)]
pub struct MorphArgs {
    /// Input image (raw, PNG, TIFF, ...)
    pub file: PathBuf,

    /// Morphology operation
    #[arg(long, value_enum, default_value = "opening")]
    pub op: MorphOpArg,

    /// Structuring element size for dilation steps (odd)
    #[arg(long, default_value = "3")]
    pub dilation_size: usize,

    /// Structuring element size for erosion steps (odd)
    #[arg(long, default_value = "3")]
    pub erosion_size: usize,

    /// Binarize the input first (values >= threshold become foreground)
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Output file path
    #[arg(short, long, default_value = "morph.png")]
    pub output: PathBuf,
}

pub fn run(args: &MorphArgs) -> Result<()> {
    let morph = MorphConfig::new((&args.op).into(), args.dilation_size, args.erosion_size);
    let mut config = PipelineConfig::new(&args.file, &args.output, Task::Morphology(morph));
    config.threshold = args.threshold;
    execute(&config)
}
