use std::path::PathBuf;

use anyhow::{Context, Result};
use callisto_core::grid::SourceInfo;
use callisto_core::io::load_grid;
use clap::Args;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image (raw, PNG, TIFF, ...)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let grid = load_grid(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let info = SourceInfo::from_grid(args.file.clone(), &grid);

    println!("File:        {}", info.filename.display());
    println!("Dimensions:  {}x{}", info.width, info.height);
    println!("Range:       {}..={}", info.min, info.max);
    println!("Binary:      {}", if info.binary { "yes" } else { "no" });
    println!("Foreground:  {} px", info.foreground_pixels);

    Ok(())
}
