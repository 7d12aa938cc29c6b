pub mod image_io;
pub mod raw;

pub use image_io::{load_grid, save_color_grid, save_grid};
pub use raw::{decode_raw, encode_raw, write_raw, RawHeader, RawReader};
