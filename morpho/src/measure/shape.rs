//! Measurements over the pixel set alone.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::particle::Particle;
use crate::raster::Point;

/// Axis-aligned bounding rectangle with inclusive extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingRect {
    pub width: usize,
    pub height: usize,
    pub x: usize,
    pub y: usize,
}

impl BoundingRect {
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

fn non_empty(particle: &Particle) -> Result<&[Point]> {
    if particle.is_empty() {
        return Err(Error::EmptyParticle {
            label: particle.label(),
        });
    }
    Ok(particle.pixels())
}

/// Number of pixels.
pub fn area(particle: &Particle) -> Result<usize> {
    non_empty(particle).map(|pixels| pixels.len())
}

/// Mean pixel position, rounded to the nearest pixel.
pub fn centroid(particle: &Particle) -> Result<Point> {
    let pixels = non_empty(particle)?;
    let (sum_x, sum_y) = pixels
        .iter()
        .fold((0u64, 0u64), |(sx, sy), p| (sx + p.x as u64, sy + p.y as u64));
    let n = pixels.len() as f64;
    Ok(Point::new(
        (sum_x as f64 / n).round() as usize,
        (sum_y as f64 / n).round() as usize,
    ))
}

pub fn bounding_rectangle(particle: &Particle) -> Result<BoundingRect> {
    let pixels = non_empty(particle)?;
    let first = pixels[0];
    let (mut x_min, mut x_max, mut y_min, mut y_max) = (first.x, first.x, first.y, first.y);
    for p in &pixels[1..] {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }

    Ok(BoundingRect {
        width: x_max - x_min + 1,
        height: y_max - y_min + 1,
        x: x_min,
        y: y_min,
    })
}
