//! Grouping of labeled pixels into particles.

use hashbrown::HashMap;
use serde::Serialize;

use crate::labeling::LabelMap;
use crate::raster::Point;

/// The pixels of one connected component, in row-major scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Particle {
    label: u32,
    pixels: Vec<Point>,
}

impl Particle {
    pub fn new(label: u32, pixels: Vec<Point>) -> Self {
        Self { label, pixels }
    }

    #[inline]
    pub fn label(&self) -> u32 {
        self.label
    }

    #[inline]
    pub fn pixels(&self) -> &[Point] {
        &self.pixels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// First pixel in scan order: the topmost, then leftmost pixel.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.pixels.first().copied()
    }
}

/// Collects the pixels of every label in a single row-major pass.
///
/// Particles are ordered by the first appearance of their label.
pub fn extract_particles(labels: &LabelMap) -> Vec<Particle> {
    let mut particles: Vec<Particle> = Vec::with_capacity(labels.num_labels());
    let mut index_of: HashMap<u32, usize> = HashMap::with_capacity(labels.num_labels());

    for (index, &label) in labels.labels().iter().enumerate() {
        if label == 0 {
            continue;
        }
        let (x, y) = labels.buffer().coords_of(index);
        let slot = *index_of.entry(label).or_insert_with(|| {
            particles.push(Particle::new(label, Vec::new()));
            particles.len() - 1
        });
        particles[slot].pixels.push(Point::new(x, y));
    }

    tracing::debug!("Extracted {} particles", particles.len());

    particles
}
