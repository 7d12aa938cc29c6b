use std::fs::File;
use std::io::Write;
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use memmap2::Mmap;

use crate::consts::RAW_HEADER_SIZE;
use crate::error::{CallistoError, Result};
use crate::grid::Grid;

/// Raw file header: little-endian i32 width, then i32 height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawHeader {
    pub width: u32,
    pub height: u32,
}

impl RawHeader {
    /// Payload size in bytes (one byte per pixel).
    pub fn pixel_byte_size(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Memory-mapped reader for the uncompressed 8-bit raw format.
#[derive(Debug)]
pub struct RawReader {
    mmap: Mmap,
    pub header: RawHeader,
}

impl RawReader {
    /// Open a raw file and parse its header.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        let header = parse_header(&mmap)?;
        check_length(&header, mmap.len())?;

        Ok(Self { mmap, header })
    }

    /// Pixel bytes, row-major (zero-copy from the mmap).
    pub fn pixels(&self) -> &[u8] {
        &self.mmap[RAW_HEADER_SIZE..RAW_HEADER_SIZE + self.header.pixel_byte_size()]
    }

    pub fn read_grid(&self) -> Result<Grid> {
        decode_grid(&self.header, self.pixels())
    }
}

/// Decode a complete raw file held in memory.
pub fn decode_raw(bytes: &[u8]) -> Result<Grid> {
    let header = parse_header(bytes)?;
    check_length(&header, bytes.len())?;
    decode_grid(&header, &bytes[RAW_HEADER_SIZE..])
}

/// Encode a grid in the raw format.
pub fn encode_raw(grid: &Grid) -> Result<Vec<u8>> {
    let (h, w) = grid.dim();
    let invalid = || CallistoError::InvalidDimensions {
        width: w as i64,
        height: h as i64,
    };
    let width = dimension(w).ok_or_else(invalid)?;
    let height = dimension(h).ok_or_else(invalid)?;

    let mut buf = Vec::with_capacity(RAW_HEADER_SIZE + h * w);
    buf.write_i32::<LittleEndian>(width)?;
    buf.write_i32::<LittleEndian>(height)?;
    buf.extend(grid.iter());
    Ok(buf)
}

/// Write a grid to `path` in the raw format.
pub fn write_raw(grid: &Grid, path: &Path) -> Result<()> {
    let buf = encode_raw(grid)?;
    let mut file = File::create(path)?;
    file.write_all(&buf)?;
    Ok(())
}

fn parse_header(buf: &[u8]) -> Result<RawHeader> {
    if buf.len() < RAW_HEADER_SIZE {
        return Err(CallistoError::InvalidRaw(
            "File too small for raw header".into(),
        ));
    }

    let mut cursor = std::io::Cursor::new(&buf[..RAW_HEADER_SIZE]);
    let width = cursor.read_i32::<LittleEndian>()?;
    let height = cursor.read_i32::<LittleEndian>()?;

    if width <= 0 || height <= 0 {
        return Err(CallistoError::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        });
    }

    Ok(RawHeader {
        width: width as u32,
        height: height as u32,
    })
}

/// The payload must hold exactly `width * height` bytes.
fn check_length(header: &RawHeader, len: usize) -> Result<()> {
    let expected = RAW_HEADER_SIZE + header.pixel_byte_size();
    if len != expected {
        let problem = if len < expected { "truncated" } else { "has trailing bytes" };
        return Err(CallistoError::InvalidRaw(format!(
            "Payload {problem}: expected {expected} bytes for {}x{}, got {len}",
            header.width, header.height
        )));
    }
    Ok(())
}

fn decode_grid(header: &RawHeader, pixels: &[u8]) -> Result<Grid> {
    let shape = (header.height as usize, header.width as usize);
    Grid::from_shape_vec(shape, pixels.to_vec())
        .map_err(|e| CallistoError::InvalidRaw(e.to_string()))
}

fn dimension(len: usize) -> Option<i32> {
    i32::try_from(len).ok().filter(|&d| d > 0)
}
