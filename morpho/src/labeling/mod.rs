//! Connected component labeling.
//!
//! Three interchangeable algorithms partition the foreground of a
//! [`BinaryImage`] into connected components:
//! - contour tracing in a single scan (Chang, Chen & Lu 2004), always 8-connected
//! - two-pass scan with a union-find equivalence table
//! - flood fill from each unlabeled seed through a FIFO queue
//!
//! All variants write `0` for background and compact component ids to
//! `1..=num_labels`. The numbering differs between variants; only the
//! induced partition is comparable.


mod contour;
mod flood_fill;
mod union_find;

use std::ops::Index;

use common::Buffer2;
use serde::{Deserialize, Serialize};

use crate::raster::BinaryImage;

pub use contour::label_contour;
pub use flood_fill::label_flood_fill;
pub use union_find::label_union_find;

// ============================================================================
// Enums
// ============================================================================

/// Pixel connectivity for the union-find and flood-fill variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    /// Pixels at (x±1, y) and (x, y±1) are connected.
    #[default]
    Four,
    /// Diagonal neighbors are connected as well.
    Eight,
}

impl Connectivity {
    /// Neighbors already visited by a row-major scan.
    pub(crate) fn causal_offsets(self) -> &'static [(i64, i64)] {
        match self {
            Connectivity::Four => &[(0, -1), (-1, 0)],
            Connectivity::Eight => &[(-1, -1), (0, -1), (1, -1), (-1, 0)],
        }
    }

    /// All neighbors.
    pub(crate) fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Connectivity::Four => &[(0, -1), (0, 1), (1, 0), (-1, 0)],
            Connectivity::Eight => &[
                (0, -1),
                (0, 1),
                (1, 0),
                (-1, 0),
                (-1, -1),
                (1, -1),
                (-1, 1),
                (1, 1),
            ],
        }
    }
}

/// Choice of labeling algorithm.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LabelingMethod {
    /// One-pass contour tracing (8-connected).
    #[default]
    ContourTracing,
    /// Two-pass scan with union-find.
    UnionFind,
    /// Queue-based flood fill.
    FloodFill,
}

impl LabelingMethod {
    /// Whether the method honors the requested connectivity.
    pub fn supports(self, connectivity: Connectivity) -> bool {
        match self {
            LabelingMethod::ContourTracing => connectivity == Connectivity::Eight,
            LabelingMethod::UnionFind | LabelingMethod::FloodFill => true,
        }
    }
}

/// Labels `image` with the chosen algorithm.
///
/// `connectivity` is ignored by [`LabelingMethod::ContourTracing`], which is
/// always 8-connected.
pub fn label(image: &BinaryImage, method: LabelingMethod, connectivity: Connectivity) -> LabelMap {
    let label_map = match method {
        LabelingMethod::ContourTracing => label_contour(image),
        LabelingMethod::UnionFind => label_union_find(image, connectivity),
        LabelingMethod::FloodFill => label_flood_fill(image, connectivity),
    };

    tracing::debug!(
        "Labeled {}x{} image with {}: {} components",
        image.width(),
        image.height(),
        method,
        label_map.num_labels()
    );

    label_map
}

// ============================================================================
// LabelMap
// ============================================================================

/// A 2D label raster from connected component analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    labels: Buffer2<u32>,
    num_labels: usize,
}

impl LabelMap {
    pub(crate) fn new(labels: Buffer2<u32>, num_labels: usize) -> Self {
        Self { labels, num_labels }
    }

    /// Wraps a label raster produced elsewhere.
    ///
    /// Label values need not be contiguous; `num_labels` counts the distinct
    /// positive values.
    pub fn from_labels(labels: Buffer2<u32>) -> Self {
        let distinct: hashbrown::HashSet<u32> =
            labels.iter().copied().filter(|&l| l != 0).collect();
        Self {
            num_labels: distinct.len(),
            labels,
        }
    }

    /// Number of connected components (excluding background).
    #[inline]
    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.labels.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.labels.height()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        *self.labels.get(x, y)
    }

    /// Get the raw labels slice.
    #[inline]
    pub fn labels(&self) -> &[u32] {
        self.labels.pixels()
    }

    #[inline]
    pub fn buffer(&self) -> &Buffer2<u32> {
        &self.labels
    }
}

impl Index<usize> for LabelMap {
    type Output = u32;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.labels[idx]
    }
}
