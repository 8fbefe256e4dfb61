//! Per-particle morphometric measurements.
//!
//! Each [`Measurement`] maps a particle to a fixed number of columns with
//! stable header names, so callers can request any subset and get a table
//! with matching headers.

#[cfg(test)]
mod tests;

mod feret;
mod perimeter;
mod shape;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::Result;
use crate::labeling::LabelMap;
use crate::particle::Particle;
use crate::report::MeasurementTable;

pub use feret::{feret_diameter, FeretDiameter};
pub use perimeter::{circularity, perimeter, perimeter_from_chain};
pub use shape::{area, bounding_rectangle, centroid, BoundingRect};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Measurement {
    Area,
    Centroid,
    BoundingRectangle,
    FeretDiameter,
    Perimeter,
    Circularity,
}

impl Measurement {
    /// Column names produced by [`Measurement::compute`], in order.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Measurement::Area => &["Area"],
            Measurement::Centroid => &["CentroidX", "CentroidY"],
            Measurement::BoundingRectangle => &["width", "height", "bx", "by"],
            Measurement::FeretDiameter => &[
                "maxDiameter",
                "maxAngle",
                "minDiameter",
                "minProjection",
                "minAngle",
            ],
            Measurement::Perimeter => &["Perimeter"],
            Measurement::Circularity => &["Circularity"],
        }
    }

    pub fn compute(self, labels: &LabelMap, particle: &Particle) -> Result<Vec<f64>> {
        let values = match self {
            Measurement::Area => vec![area(particle)? as f64],
            Measurement::Centroid => {
                let c = centroid(particle)?;
                vec![c.x as f64, c.y as f64]
            }
            Measurement::BoundingRectangle => {
                let r = bounding_rectangle(particle)?;
                vec![r.width as f64, r.height as f64, r.x as f64, r.y as f64]
            }
            Measurement::FeretDiameter => feret_diameter(labels, particle)?.values().to_vec(),
            Measurement::Perimeter => vec![perimeter(labels, particle)?],
            Measurement::Circularity => vec![circularity(labels, particle)?],
        };
        debug_assert_eq!(values.len(), self.headers().len());
        Ok(values)
    }
}

/// Computes `measurements` for every particle, one row per particle.
///
/// Fails on the first particle a measurement rejects.
pub fn measure(
    labels: &LabelMap,
    particles: &[Particle],
    measurements: &[Measurement],
) -> Result<MeasurementTable> {
    let headers = measurements
        .iter()
        .flat_map(|m| m.headers().iter().map(|h| h.to_string()))
        .collect();

    let rows = particles
        .iter()
        .map(|particle| -> Result<Vec<f64>> {
            let mut row = Vec::with_capacity(measurements.len());
            for m in measurements {
                row.extend(m.compute(labels, particle)?);
            }
            Ok(row)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        "Measured {} particles over {} measurements",
        particles.len(),
        measurements.len()
    );

    Ok(MeasurementTable::new(headers, rows))
}
