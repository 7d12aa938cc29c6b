use ndarray::Zip;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_BOUNDARY_EROSION_SIZE, DEFAULT_DENOISE_SE_SIZE};
use crate::error::Result;
use crate::grid::{ensure_same_shape, Grid};

use super::element::StructuringElement;
use super::ops::{morphology, MorphOp};

/// Window sizes for boundary extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryConfig {
    /// Side of the denoising opening (both steps).
    #[serde(default = "default_opening_size")]
    pub opening_size: usize,
    /// Side of the erosion subtracted from the opened image.
    #[serde(default = "default_erosion_size")]
    pub erosion_size: usize,
}

fn default_opening_size() -> usize {
    DEFAULT_DENOISE_SE_SIZE
}
fn default_erosion_size() -> usize {
    DEFAULT_BOUNDARY_EROSION_SIZE
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            opening_size: DEFAULT_DENOISE_SE_SIZE,
            erosion_size: DEFAULT_BOUNDARY_EROSION_SIZE,
        }
    }
}

impl BoundaryConfig {
    pub fn validate(&self) -> Result<()> {
        StructuringElement::neighborhood("opening_size", self.opening_size)?;
        StructuringElement::neighborhood("erosion_size", self.erosion_size)?;
        Ok(())
    }
}

/// Object boundary with the default 5x5 opening and 3x3 erosion.
pub fn boundary(grid: &Grid) -> Result<Grid> {
    boundary_with(grid, &BoundaryConfig::default())
}

/// Object boundary: `opened - erode(opened)`.
///
/// The difference is not clamped. The erosion window always contains the
/// centre pixel, so `erode(opened) <= opened` pointwise and the subtraction
/// cannot underflow, even for grayscale input.
pub fn boundary_with(grid: &Grid, config: &BoundaryConfig) -> Result<Grid> {
    config.validate()?;

    let opened = morphology(grid, MorphOp::Opening, config.opening_size, config.opening_size)?;
    let eroded = morphology(&opened, MorphOp::Erosion, config.erosion_size, config.erosion_size)?;
    ensure_same_shape(opened.dim(), eroded.dim())?;

    let mut edge = Grid::zeros(opened.dim());
    Zip::from(&mut edge)
        .and(&opened)
        .and(&eroded)
        .for_each(|e, &o, &r| *e = o - r);

    debug!(
        edge_pixels = edge.iter().filter(|&&v| v > 0).count(),
        "Boundary extracted"
    );
    Ok(edge)
}
