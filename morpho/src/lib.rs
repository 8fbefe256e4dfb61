//! Morpho - particle analysis for binary images.
//!
//! This library finds the connected foreground regions ("particles") of a
//! thresholded image and measures their shape:
//! - Connected component labeling (contour tracing, union-find, flood fill)
//! - Moore boundary tracing and Freeman chain codes
//! - Area, centroid, bounding rectangle, Feret diameters, perimeter, circularity
//! - CSV-style measurement tables
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use morpho::{BinaryImage, Config, Measurement, ParticleAnalyzer};
//!
//! let image = BinaryImage::new(width, height, pixels)?;
//! let config = Config {
//!     measurements: vec![Measurement::Area, Measurement::FeretDiameter],
//!     ..Default::default()
//! };
//! let analysis = ParticleAnalyzer::from_config(config)?.analyze(&image)?;
//!
//! println!("Found {} particles", analysis.particles.len());
//! print!("{}", analysis.table.to_csv());
//! ```

pub mod chain_code;
pub mod config;
pub mod error;
pub mod labeling;
pub mod measure;
pub mod particle;
pub mod pipeline;
pub mod raster;
pub mod report;
pub mod tracer;

#[cfg(test)]
mod test_utils;

// ============================================================================
// Core types
// ============================================================================

pub use error::{Error, Result};
pub use raster::{BinaryImage, PixelSource, Point, BACKGROUND, FOREGROUND};

// ============================================================================
// Labeling
// ============================================================================

pub use labeling::{
    label, label_contour, label_flood_fill, label_union_find, Connectivity, LabelMap,
    LabelingMethod,
};
pub use particle::{extract_particles, Particle};

// ============================================================================
// Boundaries
// ============================================================================

pub use chain_code::{chain_code, ChainCode};
pub use tracer::{trace_boundary, trace_next, Step};

// ============================================================================
// Measurements
// ============================================================================

pub use measure::{
    area, bounding_rectangle, centroid, circularity, feret_diameter, measure, perimeter,
    perimeter_from_chain, BoundingRect, FeretDiameter, Measurement,
};
pub use report::MeasurementTable;

// ============================================================================
// Pipeline
// ============================================================================

pub use config::Config;
pub use pipeline::{Analysis, AnalysisSummary, ParticleAnalyzer};
