#![allow(dead_code)]

use std::collections::VecDeque;

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use callisto_core::grid::Grid;

/// Build a grid from literal rows.
pub fn grid_from_rows(rows: &[&[u8]]) -> Grid {
    let h = rows.len();
    let w = rows.first().map_or(0, |r| r.len());
    Grid::from_shape_fn((h, w), |(r, c)| rows[r][c])
}

/// `h x w` background grid with a filled foreground rectangle.
pub fn grid_with_block(h: usize, w: usize, top: usize, left: usize, bh: usize, bw: usize) -> Grid {
    let mut grid = Grid::zeros((h, w));
    fill_block(&mut grid, top, left, bh, bw);
    grid
}

pub fn fill_block(grid: &mut Grid, top: usize, left: usize, bh: usize, bw: usize) {
    for row in top..top + bh {
        for col in left..left + bw {
            grid[[row, col]] = 255;
        }
    }
}

/// Random binary grid with roughly `density` foreground.
pub fn random_binary_grid(h: usize, w: usize, density: f64, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::from_shape_fn((h, w), |_| if rng.random_bool(density) { 255 } else { 0 })
}

/// Random grayscale grid.
pub fn random_gray_grid(h: usize, w: usize, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::from_shape_fn((h, w), |_| rng.random())
}

/// Clear a border of `width` pixels on every side.
pub fn clear_margin(grid: &mut Grid, width: usize) {
    let (h, w) = grid.dim();
    for ((row, col), v) in grid.indexed_iter_mut() {
        if row < width || col < width || row + width >= h || col + width >= w {
            *v = 0;
        }
    }
}

/// Direct 2-D window reduction with zero padding, for cross-checking.
pub fn naive_reduce(grid: &Grid, size: usize, max: bool) -> Grid {
    let (h, w) = grid.dim();
    let r = (size / 2) as isize;
    Grid::from_shape_fn((h, w), |(row, col)| {
        let mut acc = if max { 0u8 } else { 255u8 };
        for dr in -r..=r {
            for dc in -r..=r {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                let v = if nr < 0 || nc < 0 || nr >= h as isize || nc >= w as isize {
                    0
                } else {
                    grid[[nr as usize, nc as usize]]
                };
                acc = if max { acc.max(v) } else { acc.min(v) };
            }
        }
        acc
    })
}

/// Breadth-first 8-connected flood fill; returns (count, labels) with -1 for
/// background.
pub fn flood_fill_components(grid: &Grid) -> (usize, Array2<i32>) {
    let (h, w) = grid.dim();
    let mut labels = Array2::from_elem((h, w), -1i32);
    let mut count = 0;

    for start_row in 0..h {
        for start_col in 0..w {
            if grid[[start_row, start_col]] != 255 || labels[[start_row, start_col]] != -1 {
                continue;
            }
            labels[[start_row, start_col]] = count;
            let mut queue = VecDeque::from([(start_row, start_col)]);
            while let Some((row, col)) = queue.pop_front() {
                for dr in -1..=1isize {
                    for dc in -1..=1isize {
                        let nr = row as isize + dr;
                        let nc = col as isize + dc;
                        if nr < 0 || nc < 0 || nr >= h as isize || nc >= w as isize {
                            continue;
                        }
                        let (nr, nc) = (nr as usize, nc as usize);
                        if grid[[nr, nc]] == 255 && labels[[nr, nc]] == -1 {
                            labels[[nr, nc]] = count;
                            queue.push_back((nr, nc));
                        }
                    }
                }
            }
            count += 1;
        }
    }

    (count as usize, labels)
}

/// Write bytes to a temporary file with the given suffix.
///
/// The file stays alive as long as the returned `NamedTempFile` is not dropped.
pub fn write_temp_file(data: &[u8], suffix: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut f = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    f.write_all(data).expect("write data");
    f.flush().expect("flush");
    f
}
