//! Chain-code perimeter estimate and circularity.

use std::f64::consts::PI;

use crate::chain_code::{chain_code, ChainCode};
use crate::error::{Error, Result};
use crate::labeling::LabelMap;
use crate::particle::Particle;

use super::shape::area;

/// Weight of an axis-aligned step.
const EVEN_WEIGHT: f64 = 0.980;
/// Weight of a diagonal step.
const ODD_WEIGHT: f64 = 1.406;
/// Correction subtracted per direction change.
const CORNER_WEIGHT: f64 = 0.091;

/// Weighted perimeter of a closed chain code.
///
/// Corners are counted cyclically, including the change from the last
/// direction back to the first. An empty code has zero perimeter.
pub fn perimeter_from_chain(code: &ChainCode) -> f64 {
    let directions = &code.directions;
    if directions.is_empty() {
        return 0.0;
    }

    let odd = directions.iter().filter(|&&d| d % 2 == 1).count();
    let even = directions.len() - odd;
    let corners = directions
        .iter()
        .zip(directions.iter().cycle().skip(1))
        .filter(|(a, b)| a != b)
        .count();

    EVEN_WEIGHT * even as f64 + ODD_WEIGHT * odd as f64 - CORNER_WEIGHT * corners as f64
}

pub fn perimeter(labels: &LabelMap, particle: &Particle) -> Result<f64> {
    chain_code(labels, particle).map(|code| perimeter_from_chain(&code))
}

/// `4π·area / perimeter²`; fails for shapes without a perimeter.
pub fn circularity(labels: &LabelMap, particle: &Particle) -> Result<f64> {
    let area = area(particle)? as f64;
    let perimeter = perimeter(labels, particle)?;
    if perimeter <= 0.0 {
        return Err(Error::DegenerateShape {
            label: particle.label(),
        });
    }
    Ok(4.0 * PI * area / (perimeter * perimeter))
}
