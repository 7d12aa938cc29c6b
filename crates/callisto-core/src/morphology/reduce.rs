use ndarray::{s, ArrayView1, ArrayViewMut1, Axis, Zip};
use rayon::prelude::*;

use crate::consts::{BACKGROUND, PARALLEL_PIXEL_THRESHOLD};
use crate::error::Result;
use crate::grid::Grid;

use super::element::StructuringElement;

/// Which set reduction the window applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReduceMode {
    /// Window maximum (dilation).
    Max,
    /// Window minimum (erosion).
    Min,
}

impl ReduceMode {
    fn combine(self, a: u8, b: u8) -> u8 {
        match self {
            Self::Max => a.max(b),
            Self::Min => a.min(b),
        }
    }

    fn identity(self) -> u8 {
        match self {
            Self::Max => u8::MIN,
            Self::Min => u8::MAX,
        }
    }
}

/// Per-pixel max or min over a `window_size x window_size` window, with the
/// grid zero-padded by `(window_size - 1) / 2` on every side.
///
/// Fails with `InvalidKernelSize` if `window_size` is even or zero.
pub fn reduce(grid: &Grid, window_size: usize, mode: ReduceMode) -> Result<Grid> {
    let se = StructuringElement::square(window_size)?;
    Ok(reduce_with(grid, se, mode))
}

/// [`reduce`] with an already validated structuring element.
///
/// The square window is separable: a row pass followed by a column pass over
/// the zero-padded signal gives the same result as the full 2-D window.
pub fn reduce_with(grid: &Grid, se: StructuringElement, mode: ReduceMode) -> Grid {
    let radius = se.radius();
    if radius == 0 || grid.is_empty() {
        return grid.clone();
    }

    let rows = reduce_lanes(grid, Axis(1), radius, mode);
    reduce_lanes(&rows, Axis(0), radius, mode)
}

/// Reduce every 1-D lane running along `axis`.
fn reduce_lanes(input: &Grid, axis: Axis, radius: usize, mode: ReduceMode) -> Grid {
    let mut out = Grid::zeros(input.dim());

    if input.len() >= PARALLEL_PIXEL_THRESHOLD {
        // Lanes along `axis` are the subviews taken across the other axis.
        let across = Axis(1 - axis.index());
        out.axis_iter_mut(across)
            .into_par_iter()
            .zip(input.axis_iter(across))
            .for_each(|(dst, src)| reduce_line(src, dst, radius, mode));
    } else {
        Zip::from(out.lanes_mut(axis))
            .and(input.lanes(axis))
            .for_each(|dst, src| reduce_line(src, dst, radius, mode));
    }

    out
}

fn reduce_line(src: ArrayView1<u8>, mut dst: ArrayViewMut1<u8>, radius: usize, mode: ReduceMode) {
    let n = src.len();
    for i in 0..n {
        let lo = i.saturating_sub(radius);
        let hi = (i + radius).min(n - 1);
        // A window hanging over the edge sees the zero padding.
        let clipped = i < radius || i + radius >= n;
        let seed = if clipped {
            mode.combine(mode.identity(), BACKGROUND)
        } else {
            mode.identity()
        };
        dst[i] = src
            .slice(s![lo..=hi])
            .iter()
            .fold(seed, |acc, &v| mode.combine(acc, v));
    }
}
