//! Error types for particle analysis.

use std::io;

use common::file_format::{FileExtensionError, SerdeFormatError};
use thiserror::Error;

/// Errors surfaced by labeling, measurement and configuration.
///
/// Every variant describes a data or precondition problem; none of the
/// operations are retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Particle {label} has no pixels")]
    EmptyParticle { label: u32 },

    #[error("Particle {label} has a zero perimeter")]
    DegenerateShape { label: u32 },

    #[error("Pixel buffer has {actual} values, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Pixel {index} has value {value}, expected 0 or 255")]
    NonBinaryPixel { index: usize, value: u8 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] SerdeFormatError),

    #[error(transparent)]
    UnsupportedConfigFile(#[from] FileExtensionError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
