//! Label, extract and measure in one call.

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::labeling::{label, LabelMap};
use crate::measure::measure;
use crate::particle::{extract_particles, Particle};
use crate::raster::BinaryImage;
use crate::report::MeasurementTable;

/// Everything derived from one image.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub labels: LabelMap,
    /// Particles in order of first appearance, matching `table.rows`.
    pub particles: Vec<Particle>,
    pub table: MeasurementTable,
}

/// Summary counts of an [`Analysis`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub foreground_pixels: usize,
    pub particles: usize,
    pub columns: usize,
}

impl Analysis {
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            foreground_pixels: self.particles.iter().map(Particle::len).sum(),
            particles: self.particles.len(),
            columns: self.table.headers.len(),
        }
    }
}

/// Runs the particle analysis pipeline with a validated [`Config`].
///
/// # Example
///
/// ```rust,ignore
/// use morpho::{BinaryImage, Config, ParticleAnalyzer};
///
/// let image = BinaryImage::new(width, height, pixels)?;
/// let analyzer = ParticleAnalyzer::from_config(Config::default())?;
/// let analysis = analyzer.analyze(&image)?;
/// std::fs::write("measures.csv", analysis.table.to_csv())?;
/// ```
#[derive(Debug, Clone)]
pub struct ParticleAnalyzer {
    config: Config,
}

impl ParticleAnalyzer {
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn analyze(&self, image: &BinaryImage) -> Result<Analysis> {
        let config = &self.config;

        let labels = label(image, config.method, config.connectivity);
        let particles = extract_particles(&labels);
        let table = measure(&labels, &particles, &config.measurements)?;

        tracing::info!(
            "Analyzed {}x{} image: {} particles, {} columns",
            image.width(),
            image.height(),
            particles.len(),
            table.headers.len()
        );

        Ok(Analysis {
            labels,
            particles,
            table,
        })
    }
}
