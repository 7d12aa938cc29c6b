use thiserror::Error;

#[derive(Error, Debug)]
pub enum CallistoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid kernel size for {name}: {size} ({reason})")]
    InvalidKernelSize {
        name: &'static str,
        size: usize,
        reason: &'static str,
    },

    #[error("Grid shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Non-binary input: value {value} at ({row}, {col}), expected 0 or 255")]
    NonBinaryInput { row: usize, col: usize, value: u8 },

    #[error("Invalid raw file: {0}")]
    InvalidRaw(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Cannot assign distinct colors to {count} components")]
    PaletteExhausted { count: usize },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CallistoError>;
