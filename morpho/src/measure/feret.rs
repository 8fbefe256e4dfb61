//! Feret diameters by projecting the boundary onto rotated axes.
//!
//! The boundary path is projected onto an axis and its perpendicular for
//! every angle `0°, 2°, .., 176°`. The extent along an axis counts pixels,
//! so it is `max - min + 1`. The largest extent is the maximum diameter, the
//! smallest is the minimum diameter, reported together with the extent
//! across it.

use glam::DVec2;
use serde::Serialize;

use crate::chain_code::{chain_code, ChainCode};
use crate::error::Result;
use crate::labeling::LabelMap;
use crate::particle::Particle;

const ANGLE_STEP_DEG: f64 = 2.0;
/// The primary axis sweeps 0° to 176°.
const NUM_ROTATIONS: u32 = 89;

/// Caliper measurements; angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeretDiameter {
    pub max_diameter: f64,
    pub max_angle: f64,
    pub min_diameter: f64,
    pub min_projection: f64,
    pub min_angle: f64,
}

impl FeretDiameter {
    pub fn from_chain_code(code: &ChainCode) -> Self {
        let path: Vec<DVec2> = code.path().iter().map(|p| p.as_dvec2()).collect();

        let mut feret = FeretDiameter {
            max_diameter: f64::NEG_INFINITY,
            max_angle: 0.0,
            min_diameter: f64::INFINITY,
            min_projection: f64::INFINITY,
            min_angle: 0.0,
        };

        for i in 0..NUM_ROTATIONS {
            let angle = ANGLE_STEP_DEG * i as f64;
            let axis = DVec2::from_angle(angle.to_radians());
            let along = extent(&path, axis);
            let across = extent(&path, axis.perp());

            if along > feret.max_diameter {
                feret.max_diameter = along;
                feret.max_angle = angle;
            }
            if across > feret.max_diameter {
                feret.max_diameter = across;
                feret.max_angle = angle + 90.0;
            }
            if along < feret.min_diameter {
                feret.min_diameter = along;
                feret.min_projection = across;
                feret.min_angle = angle;
            }
            if across < feret.min_diameter {
                feret.min_diameter = across;
                feret.min_projection = along;
                feret.min_angle = angle + 90.0;
            }
        }

        feret
    }

    /// Values in column order.
    pub fn values(&self) -> [f64; 5] {
        [
            self.max_diameter,
            self.max_angle,
            self.min_diameter,
            self.min_projection,
            self.min_angle,
        ]
    }
}

fn extent(path: &[DVec2], axis: DVec2) -> f64 {
    let (min, max) = path
        .iter()
        .map(|p| p.dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
            (lo.min(t), hi.max(t))
        });
    max - min + 1.0
}

pub fn feret_diameter(labels: &LabelMap, particle: &Particle) -> Result<FeretDiameter> {
    chain_code(labels, particle).map(|code| FeretDiameter::from_chain_code(&code))
}
