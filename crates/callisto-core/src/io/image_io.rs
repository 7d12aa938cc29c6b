use std::path::Path;

use image::{GrayImage, ImageFormat, Rgb, RgbImage};

use crate::error::{CallistoError, Result};
use crate::grid::{ColorGrid, Grid};

use super::raw::{write_raw, RawReader};

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Load a grayscale grid. `.raw` files use the raw reader; anything else is
/// decoded by the `image` crate and converted to 8-bit luma.
pub fn load_grid(path: &Path) -> Result<Grid> {
    if extension(path).as_deref() == Some("raw") {
        return RawReader::open(path)?.read_grid();
    }

    let gray = image::open(path)?.to_luma8();
    Ok(gray_image_to_grid(&gray))
}

/// Save a grid, choosing format from file extension (raw, tiff, or png).
pub fn save_grid(grid: &Grid, path: &Path) -> Result<()> {
    match extension(path).as_deref() {
        Some("raw") => write_raw(grid, path),
        Some("tiff" | "tif") => {
            grid_to_gray_image(grid)?.save_with_format(path, ImageFormat::Tiff)?;
            Ok(())
        }
        _ => {
            grid_to_gray_image(grid)?.save_with_format(path, ImageFormat::Png)?;
            Ok(())
        }
    }
}

/// Save a color grid as 8-bit RGB (tiff or png).
pub fn save_color_grid(colors: &ColorGrid, path: &Path) -> Result<()> {
    let img = color_grid_to_image(colors);
    match extension(path).as_deref() {
        Some("raw") => Err(CallistoError::Config(
            "the raw format stores grayscale grids only".into(),
        )),
        Some("tiff" | "tif") => {
            img.save_with_format(path, ImageFormat::Tiff)?;
            Ok(())
        }
        _ => {
            img.save_with_format(path, ImageFormat::Png)?;
            Ok(())
        }
    }
}

pub fn gray_image_to_grid(img: &GrayImage) -> Grid {
    let (w, h) = img.dimensions();
    Grid::from_shape_fn((h as usize, w as usize), |(row, col)| {
        img.get_pixel(col as u32, row as u32).0[0]
    })
}

pub fn grid_to_gray_image(grid: &Grid) -> Result<GrayImage> {
    let (h, w) = grid.dim();
    let pixels: Vec<u8> = grid.iter().copied().collect();
    GrayImage::from_raw(w as u32, h as u32, pixels).ok_or(CallistoError::InvalidDimensions {
        width: w as i64,
        height: h as i64,
    })
}

pub fn color_grid_to_image(colors: &ColorGrid) -> RgbImage {
    let (h, w) = colors.dim();
    let mut img = RgbImage::new(w as u32, h as u32);
    for ((row, col), &px) in colors.indexed_iter() {
        img.put_pixel(col as u32, row as u32, Rgb(px));
    }
    img
}
