use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::consts::FOREGROUND;
use crate::error::{CallistoError, Result};
use crate::grid::{first_non_binary, pad, unpad, ColorGrid, Grid, Rgb, BLACK};

use super::config::{BinaryPolicy, LabelConfig};
use super::forest::EquivalenceForest;
use super::palette::random_palette;

/// Label value of a pixel that has not been labeled (or is background).
pub const NO_LABEL: i32 = -1;

/// Statistics for a single connected component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentStats {
    /// Dense component id, `0..count`.
    pub label: u32,
    /// Number of pixels in the component.
    pub area: usize,
    /// Bounding box: (min_row, max_row, min_col, max_col).
    pub bbox: (usize, usize, usize, usize),
    /// Color painted for this component.
    pub color: Rgb,
}

/// Result of connected-component labeling.
#[derive(Clone, Debug)]
pub struct Labeling {
    /// Number of 8-connected foreground regions.
    pub count: usize,
    /// Labels issued during the first pass, before equivalences were merged.
    pub provisional_labels: usize,
    /// Final component id per pixel, [`NO_LABEL`] for background.
    pub labels: Array2<i32>,
    /// Each component painted with its own color; background is black.
    pub colors: ColorGrid,
    /// One entry per component, ordered by label.
    pub components: Vec<ComponentStats>,
}

/// What the already-visited neighbors of a foreground pixel look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Neighborhood {
    /// No foreground among the four.
    Isolated,
    /// Some foreground, none labeled yet.
    Unlabeled,
    /// At least one labeled neighbor.
    Labeled,
}

fn classify(foreground: &[bool; 4], labels: &[i32; 4]) -> Neighborhood {
    if !foreground.iter().any(|&f| f) {
        Neighborhood::Isolated
    } else if labels.iter().all(|&l| l == NO_LABEL) {
        Neighborhood::Unlabeled
    } else {
        Neighborhood::Labeled
    }
}

/// Label the 8-connected foreground regions of `grid`.
///
/// Colors come from `config.seed` when set, otherwise from the thread RNG.
pub fn label(grid: &Grid, config: &LabelConfig) -> Result<Labeling> {
    match config.seed {
        Some(seed) => label_with_rng(grid, config, &mut StdRng::seed_from_u64(seed)),
        None => label_with_rng(grid, config, &mut rand::rng()),
    }
}

/// Label `grid` with [`LabelConfig::default()`]: 5x5 denoising opening,
/// lenient binary policy, unseeded colors.
pub fn label_default(grid: &Grid) -> Result<Labeling> {
    label(grid, &LabelConfig::default())
}

/// Label the 8-connected foreground regions of `grid`, drawing component
/// colors from `rng`.
///
/// Two-pass raster labeling: provisional labels with online union-find
/// (minimum root wins), then every pixel is resolved to its root. Roots are
/// compacted to dense ids in ascending order, so `count` is one plus the
/// largest final label.
pub fn label_with_rng<R: Rng + ?Sized>(
    grid: &Grid,
    config: &LabelConfig,
    rng: &mut R,
) -> Result<Labeling> {
    config.validate()?;

    if let Some((row, col, value)) = first_non_binary(grid) {
        match config.binary_policy {
            BinaryPolicy::Strict => {
                return Err(CallistoError::NonBinaryInput { row, col, value });
            }
            BinaryPolicy::Lenient => {
                warn!(row, col, value, "Non-binary input, values below 255 treated as background");
            }
        }
    }

    let working = match config.denoise_morph() {
        Some(morph) => morph.apply(grid)?,
        None => grid.clone(),
    };

    let padded = pad(&working, 1, 0u8);
    let (mut labels, forest) = first_pass(&padded);
    let provisional_labels = forest.len();
    resolve_roots(&padded, &mut labels, &forest);

    let mut labels = unpad(&labels, 1);
    let count = compact(&mut labels, forest.len());

    let palette = random_palette(count, rng)?;
    let colors = labels.mapv(|l| if l == NO_LABEL { BLACK } else { palette[l as usize] });
    let components = component_stats(&labels, &palette);

    debug!(count, provisional_labels, "Connected components labeled");

    Ok(Labeling {
        count,
        provisional_labels,
        labels,
        colors,
        components,
    })
}

/// Pass 1: provisional labels in raster order over a zero-padded grid.
fn first_pass(padded: &Grid) -> (Array2<i32>, EquivalenceForest) {
    let (rows, cols) = padded.dim();
    let mut labels = Array2::from_elem((rows, cols), NO_LABEL);
    let mut forest = EquivalenceForest::for_grid(rows - 2, cols - 2);

    for i in 1..rows - 1 {
        for j in 1..cols - 1 {
            if padded[[i, j]] != FOREGROUND {
                continue;
            }

            // Left, upper-left, up, upper-right: the neighbors already visited.
            let neighbors = [[i, j - 1], [i - 1, j - 1], [i - 1, j], [i - 1, j + 1]];
            let foreground = neighbors.map(|p| padded[p] == FOREGROUND);
            let neighbor_labels = neighbors.map(|p| labels[p]);

            match classify(&foreground, &neighbor_labels) {
                Neighborhood::Isolated => {
                    labels[[i, j]] = forest.make_label() as i32;
                }
                Neighborhood::Unlabeled => {
                    let fresh = forest.make_label() as i32;
                    labels[[i, j]] = fresh;
                    for (p, _) in neighbors.iter().zip(foreground).filter(|(_, f)| *f) {
                        labels[*p] = fresh;
                    }
                }
                Neighborhood::Labeled => {
                    let roots = neighbor_labels
                        .map(|l| (l != NO_LABEL).then(|| forest.find(l as u32)));
                    let min_root = roots.iter().flatten().copied().min().unwrap_or_default();

                    labels[[i, j]] = min_root as i32;
                    for &root in roots.iter().flatten() {
                        if root != min_root {
                            forest.union(root, min_root);
                        }
                    }
                    for (k, p) in neighbors.iter().enumerate() {
                        if foreground[k] && neighbor_labels[k] == NO_LABEL {
                            labels[*p] = min_root as i32;
                        }
                    }
                }
            }
        }
    }

    (labels, forest)
}

/// Pass 2: replace every foreground pixel's label with its root.
fn resolve_roots(padded: &Grid, labels: &mut Array2<i32>, forest: &EquivalenceForest) {
    for (px, l) in padded.iter().zip(labels.iter_mut()) {
        if *px == FOREGROUND && *l != NO_LABEL {
            *l = forest.find(*l as u32) as i32;
        }
    }
}

/// Renumber roots to `0..count` in ascending root order; returns `count`.
fn compact(labels: &mut Array2<i32>, label_space: usize) -> usize {
    let mut present = vec![false; label_space];
    for &l in labels.iter().filter(|&&l| l != NO_LABEL) {
        present[l as usize] = true;
    }

    let mut dense = vec![NO_LABEL; label_space];
    let mut count = 0;
    for (slot, _) in dense.iter_mut().zip(&present).filter(|&(_, &p)| p) {
        *slot = count;
        count += 1;
    }

    labels.mapv_inplace(|l| if l == NO_LABEL { NO_LABEL } else { dense[l as usize] });
    count as usize
}

fn component_stats(labels: &Array2<i32>, palette: &[Rgb]) -> Vec<ComponentStats> {
    let mut stats: Vec<ComponentStats> = palette
        .iter()
        .enumerate()
        .map(|(label, &color)| ComponentStats {
            label: label as u32,
            area: 0,
            bbox: (usize::MAX, 0, usize::MAX, 0),
            color,
        })
        .collect();

    for ((row, col), &l) in labels.indexed_iter() {
        if l == NO_LABEL {
            continue;
        }
        let entry = &mut stats[l as usize];
        entry.area += 1;
        entry.bbox.0 = entry.bbox.0.min(row);
        entry.bbox.1 = entry.bbox.1.max(row);
        entry.bbox.2 = entry.bbox.2.min(col);
        entry.bbox.3 = entry.bbox.3.max(col);
    }

    stats
}
