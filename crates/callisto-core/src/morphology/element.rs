use crate::consts::MIN_NEIGHBORHOOD_SE_SIZE;
use crate::error::{CallistoError, Result};

/// Square, all-ones structuring element of odd side length.
///
/// Only the full square is supported, so the element reduces to its window
/// size; it stays a distinct type so every size flowing into the reducer has
/// been validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructuringElement {
    size: usize,
}

impl StructuringElement {
    /// Square element of side `size`. `size` must be odd and at least 1.
    pub fn square(size: usize) -> Result<Self> {
        Self::named("window_size", size)
    }

    /// Like [`square`](Self::square), reporting failures against `name`.
    pub fn named(name: &'static str, size: usize) -> Result<Self> {
        if size < 1 {
            return Err(CallistoError::InvalidKernelSize {
                name,
                size,
                reason: "must be at least 1",
            });
        }
        if size % 2 == 0 {
            return Err(CallistoError::InvalidKernelSize {
                name,
                size,
                reason: "must be odd",
            });
        }
        Ok(Self { size })
    }

    /// Square element that covers a real neighborhood (side >= 3).
    pub fn neighborhood(name: &'static str, size: usize) -> Result<Self> {
        let se = Self::named(name, size)?;
        if se.size < MIN_NEIGHBORHOOD_SE_SIZE {
            return Err(CallistoError::InvalidKernelSize {
                name,
                size,
                reason: "must be at least 3",
            });
        }
        Ok(se)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Half-width of the window: `(size - 1) / 2`.
    pub fn radius(&self) -> usize {
        (self.size - 1) / 2
    }
}
