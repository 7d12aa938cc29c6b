use std::collections::HashSet;

use rand::Rng;

use crate::consts::MAX_PALETTE_COLORS;
use crate::error::{CallistoError, Result};
use crate::grid::{Rgb, BLACK};

/// Draw `count` distinct, non-black colors from `rng`.
///
/// Black is reserved for background, and duplicates are redrawn so the
/// mapping from component to color is injective.
pub fn random_palette<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<Rgb>> {
    if count > MAX_PALETTE_COLORS {
        return Err(CallistoError::PaletteExhausted { count });
    }

    let mut seen = HashSet::with_capacity(count);
    let mut palette = Vec::with_capacity(count);
    while palette.len() < count {
        let color: Rgb = [rng.random(), rng.random(), rng.random()];
        if color != BLACK && seen.insert(color) {
            palette.push(color);
        }
    }
    Ok(palette)
}
