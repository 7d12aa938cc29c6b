/// Intensity of a foreground pixel in a binary grid.
pub const FOREGROUND: u8 = 255;

/// Intensity of a background pixel in a binary grid.
pub const BACKGROUND: u8 = 0;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default structuring-element side for plain dilation/erosion.
pub const DEFAULT_SE_SIZE: usize = 3;

/// Smallest structuring element that still covers a real neighborhood.
pub const MIN_NEIGHBORHOOD_SE_SIZE: usize = 3;

/// Side of the opening used to suppress speckle before boundary extraction
/// and labeling.
pub const DEFAULT_DENOISE_SE_SIZE: usize = 5;

/// Side of the erosion subtracted from the opened image in boundary extraction.
pub const DEFAULT_BOUNDARY_EROSION_SIZE: usize = 3;

/// Size in bytes of the raw format header (i32 width + i32 height).
pub const RAW_HEADER_SIZE: usize = 8;

/// Number of distinct non-black 24-bit colors available to the labeler.
pub const MAX_PALETTE_COLORS: usize = (1 << 24) - 1;
