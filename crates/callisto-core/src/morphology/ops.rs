use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::DEFAULT_SE_SIZE;
use crate::error::Result;
use crate::grid::Grid;

use super::element::StructuringElement;
use super::reduce::{reduce_with, ReduceMode};

/// The four canonical binary morphology operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MorphOp {
    #[default]
    Dilation,
    Erosion,
    /// Erosion followed by dilation; removes small foreground specks.
    Opening,
    /// Dilation followed by erosion; fills small background holes.
    Closing,
}

impl std::fmt::Display for MorphOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dilation => write!(f, "Dilation"),
            Self::Erosion => write!(f, "Erosion"),
            Self::Opening => write!(f, "Opening"),
            Self::Closing => write!(f, "Closing"),
        }
    }
}

/// Apply `op` to `grid`. Dilation steps use `dilation_size`, erosion steps use
/// `erosion_size`; the sizes need not match.
///
/// Both sizes are validated before any work is done, even when `op` only uses
/// one of them.
pub fn morphology(
    grid: &Grid,
    op: MorphOp,
    dilation_size: usize,
    erosion_size: usize,
) -> Result<Grid> {
    let dilation = StructuringElement::named("dilation_size", dilation_size)?;
    let erosion = StructuringElement::named("erosion_size", erosion_size)?;

    debug!(%op, dilation_size, erosion_size, dim = ?grid.dim(), "Morphology");

    let result = match op {
        MorphOp::Dilation => reduce_with(grid, dilation, ReduceMode::Max),
        MorphOp::Erosion => reduce_with(grid, erosion, ReduceMode::Min),
        MorphOp::Opening => {
            let eroded = reduce_with(grid, erosion, ReduceMode::Min);
            reduce_with(&eroded, dilation, ReduceMode::Max)
        }
        MorphOp::Closing => {
            let dilated = reduce_with(grid, dilation, ReduceMode::Max);
            reduce_with(&dilated, erosion, ReduceMode::Min)
        }
    };

    Ok(result)
}

/// A morphology operation together with its structuring-element sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphConfig {
    #[serde(default)]
    pub operation: MorphOp,
    #[serde(default = "default_se_size")]
    pub dilation_size: usize,
    #[serde(default = "default_se_size")]
    pub erosion_size: usize,
}

fn default_se_size() -> usize {
    DEFAULT_SE_SIZE
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            operation: MorphOp::default(),
            dilation_size: DEFAULT_SE_SIZE,
            erosion_size: DEFAULT_SE_SIZE,
        }
    }
}

impl MorphConfig {
    pub fn new(operation: MorphOp, dilation_size: usize, erosion_size: usize) -> Self {
        Self {
            operation,
            dilation_size,
            erosion_size,
        }
    }

    /// Opening with the same window for both steps.
    pub fn opening(size: usize) -> Self {
        Self::new(MorphOp::Opening, size, size)
    }

    pub fn validate(&self) -> Result<()> {
        StructuringElement::named("dilation_size", self.dilation_size)?;
        StructuringElement::named("erosion_size", self.erosion_size)?;
        Ok(())
    }

    pub fn apply(&self, grid: &Grid) -> Result<Grid> {
        morphology(grid, self.operation, self.dilation_size, self.erosion_size)
    }
}
