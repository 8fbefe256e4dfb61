//! Analysis configuration.

use std::path::Path;

use common::file_format::{self, SerdeFormat};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::{Error, Result};
use crate::labeling::{Connectivity, LabelingMethod};
use crate::measure::Measurement;

/// Settings for [`ParticleAnalyzer`](crate::ParticleAnalyzer).
///
/// Missing fields take their defaults when deserialized:
///
/// ```yaml
/// method: union_find
/// connectivity: eight
/// measurements: [area, centroid, feretDiameter]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub method: LabelingMethod,
    /// Ignored by contour tracing, which is always 8-connected.
    pub connectivity: Connectivity,
    /// Table columns, in order.
    pub measurements: Vec<Measurement>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            method: LabelingMethod::default(),
            connectivity: Connectivity::Eight,
            measurements: Measurement::iter().collect(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.measurements.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one measurement is required".into(),
            ));
        }
        if !self.method.supports(self.connectivity) {
            return Err(Error::InvalidConfig(format!(
                "{} labeling does not support {:?} connectivity",
                self.method, self.connectivity
            )));
        }
        Ok(())
    }

    pub fn parse(serialized: &str, format: SerdeFormat) -> Result<Self> {
        Ok(file_format::deserialize(serialized, format)?)
    }

    pub fn to_string(&self, format: SerdeFormat) -> Result<String> {
        Ok(file_format::serialize(self, format)?)
    }

    /// Loads a YAML or JSON file, chosen by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = SerdeFormat::from_file_name(path)?;
        let serialized = std::fs::read_to_string(path)?;
        let config = Self::parse(&serialized, format)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
