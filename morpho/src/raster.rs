//! Binary raster input and pixel access primitives.

use common::Buffer2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const BACKGROUND: u8 = 0;
pub const FOREGROUND: u8 = 255;

/// Pixel coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbor at a signed offset, or `None` when it would leave the
    /// non-negative quadrant.
    #[inline]
    pub fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        let x = self.x as i64 + dx;
        let y = self.y as i64 + dy;
        (x >= 0 && y >= 0).then(|| Self::new(x as usize, y as usize))
    }
}

/// Read-only foreground/background lookup used by the boundary tracer.
///
/// Implementations only need to answer in-bounds queries; callers check
/// `x < width()` and `y < height()` first.
pub trait PixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn is_foreground(&self, x: usize, y: usize) -> bool;

    #[inline]
    fn contains(&self, p: Point) -> bool {
        p.x < self.width() && p.y < self.height()
    }
}

/// Thresholded image with pixels restricted to [`BACKGROUND`] and [`FOREGROUND`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    pixels: Buffer2<u8>,
}

impl BinaryImage {
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(Error::DimensionMismatch {
                expected: width * height,
                actual: pixels.len(),
            });
        }
        if let Some((index, &value)) = pixels
            .iter()
            .enumerate()
            .find(|&(_, &v)| v != BACKGROUND && v != FOREGROUND)
        {
            return Err(Error::NonBinaryPixel { index, value });
        }

        Ok(Self {
            pixels: Buffer2::new(width, height, pixels),
        })
    }

    pub fn from_mask(width: usize, height: usize, mask: &[bool]) -> Result<Self> {
        let pixels = mask
            .iter()
            .map(|&set| if set { FOREGROUND } else { BACKGROUND })
            .collect();
        Self::new(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        self.pixels.pixels()
    }

    #[inline]
    pub fn is_foreground(&self, x: usize, y: usize) -> bool {
        *self.pixels.get(x, y) == FOREGROUND
    }

    pub fn foreground_count(&self) -> usize {
        self.pixels.iter().filter(|&&v| v == FOREGROUND).count()
    }
}

impl PixelSource for BinaryImage {
    #[inline]
    fn width(&self) -> usize {
        self.pixels.width()
    }

    #[inline]
    fn height(&self) -> usize {
        self.pixels.height()
    }

    #[inline]
    fn is_foreground(&self, x: usize, y: usize) -> bool {
        BinaryImage::is_foreground(self, x, y)
    }
}
