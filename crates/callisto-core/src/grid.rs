use std::path::PathBuf;

use ndarray::{s, Array2};

use crate::consts::{BACKGROUND, FOREGROUND};
use crate::error::{CallistoError, Result};

/// A single-channel 8-bit intensity grid, shape = (rows, columns).
/// Binary grids use [`FOREGROUND`] (255) and [`BACKGROUND`] (0).
pub type Grid = Array2<u8>;

/// One RGB pixel.
pub type Rgb = [u8; 3];

/// A color-coded grid, same layout as [`Grid`].
pub type ColorGrid = Array2<Rgb>;

/// Black, used for background pixels in a [`ColorGrid`].
pub const BLACK: Rgb = [0, 0, 0];

/// Swap foreground and background (v -> 255 - v).
pub fn complement(grid: &Grid) -> Grid {
    grid.mapv(|v| FOREGROUND - v)
}

/// Map every value `>= threshold` to foreground and the rest to background.
pub fn binarize(grid: &Grid, threshold: u8) -> Grid {
    grid.mapv(|v| if v >= threshold { FOREGROUND } else { BACKGROUND })
}

/// Returns the first pixel (row-major) that is neither 0 nor 255.
pub fn first_non_binary(grid: &Grid) -> Option<(usize, usize, u8)> {
    grid.indexed_iter()
        .find(|(_, &v)| v != FOREGROUND && v != BACKGROUND)
        .map(|((row, col), &v)| (row, col, v))
}

pub fn is_binary(grid: &Grid) -> bool {
    first_non_binary(grid).is_none()
}

/// Number of pixels equal to [`FOREGROUND`].
pub fn foreground_count(grid: &Grid) -> usize {
    grid.iter().filter(|&&v| v == FOREGROUND).count()
}

/// Surround `grid` with a constant border of `width` pixels on all four sides.
pub fn pad<T: Clone>(grid: &Array2<T>, width: usize, fill: T) -> Array2<T> {
    let (h, w) = grid.dim();
    let mut padded = Array2::from_elem((h + 2 * width, w + 2 * width), fill);
    padded
        .slice_mut(s![width..width + h, width..width + w])
        .assign(grid);
    padded
}

/// Strip a border of `width` pixels from all four sides.
pub fn unpad<T: Clone>(grid: &Array2<T>, width: usize) -> Array2<T> {
    let (h, w) = grid.dim();
    grid.slice(s![width..h - width, width..w - width]).to_owned()
}

/// Fails with `ShapeMismatch` unless both shapes agree.
pub fn ensure_same_shape(expected: (usize, usize), actual: (usize, usize)) -> Result<()> {
    if expected != actual {
        return Err(CallistoError::ShapeMismatch { expected, actual });
    }
    Ok(())
}

/// Summary of a loaded grid, used by `callisto info`.
#[derive(Clone, Debug)]
pub struct SourceInfo {
    pub filename: PathBuf,
    pub width: usize,
    pub height: usize,
    pub binary: bool,
    pub foreground_pixels: usize,
    pub min: u8,
    pub max: u8,
}

impl SourceInfo {
    pub fn from_grid(filename: PathBuf, grid: &Grid) -> Self {
        let (height, width) = grid.dim();
        let min = grid.iter().copied().min().unwrap_or(0);
        let max = grid.iter().copied().max().unwrap_or(0);
        Self {
            filename,
            width,
            height,
            binary: is_binary(grid),
            foreground_pixels: foreground_count(grid),
            min,
            max,
        }
    }
}
