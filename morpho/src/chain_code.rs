//! Freeman chain codes of particle outer boundaries.

use glam::IVec2;

use crate::error::{Error, Result};
use crate::labeling::LabelMap;
use crate::particle::Particle;
use crate::raster::{PixelSource, Point};
use crate::tracer::{trace_boundary, DX, DY, OUTER_START};

/// Outer boundary of a particle as unit moves from `origin`.
///
/// Following every direction from `origin` leads back to `origin`. The code
/// of a single isolated pixel is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainCode {
    pub origin: Point,
    pub directions: Vec<u8>,
}

impl ChainCode {
    #[inline]
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Cumulative offsets from the origin, starting with `(0, 0)`.
    pub fn path(&self) -> Vec<IVec2> {
        let mut at = IVec2::ZERO;
        let mut path = Vec::with_capacity(self.directions.len() + 1);
        path.push(at);
        for &d in &self.directions {
            at += IVec2::new(DX[d as usize] as i32, DY[d as usize] as i32);
            path.push(at);
        }
        path
    }
}

/// Pixels of a single label; every other label reads as background.
struct ParticleMask<'a> {
    labels: &'a LabelMap,
    label: u32,
}

impl PixelSource for ParticleMask<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.labels.width()
    }

    #[inline]
    fn height(&self) -> usize {
        self.labels.height()
    }

    #[inline]
    fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.labels.get(x, y) == self.label
    }
}

/// Traces the outer boundary of `particle`, starting at its first pixel.
pub fn chain_code(labels: &LabelMap, particle: &Particle) -> Result<ChainCode> {
    let origin = particle.first().ok_or(Error::EmptyParticle {
        label: particle.label(),
    })?;
    let mask = ParticleMask {
        labels,
        label: particle.label(),
    };

    let directions = trace_boundary(&mask, origin, OUTER_START, |_| {})
        .into_iter()
        .map(|step| step.direction)
        .collect();

    Ok(ChainCode { origin, directions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labeling::{label_contour, label_union_find, Connectivity};
    use crate::particle::extract_particles;
    use crate::test_utils::{image_from_ascii, random_image};

    fn single_code(rows: &[&str]) -> ChainCode {
        let labels = label_contour(&image_from_ascii(rows));
        let particles = extract_particles(&labels);
        assert_eq!(particles.len(), 1);
        chain_code(&labels, &particles[0]).unwrap()
    }

    #[test]
    fn test_plus_shape() {
        let code = single_code(&[".#.", "###", ".#."]);
        assert_eq!(code.origin, Point::new(1, 0));
        assert_eq!(code.directions, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_horizontal_bar_walks_out_and_back() {
        let code = single_code(&["....", "####", "...."]);
        assert_eq!(code.origin, Point::new(0, 1));
        assert_eq!(code.directions, vec![0, 0, 0, 4, 4, 4]);
    }

    #[test]
    fn test_square_is_clockwise() {
        let code = single_code(&["##", "##"]);
        assert_eq!(code.directions, vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_single_pixel_has_empty_code() {
        let code = single_code(&["...", ".#.", "..."]);
        assert!(code.is_empty());
        assert_eq!(code.path(), vec![IVec2::ZERO]);
    }

    #[test]
    fn test_empty_particle_is_rejected() {
        let labels = label_contour(&image_from_ascii(&["#"]));
        let err = chain_code(&labels, &Particle::new(4, Vec::new())).unwrap_err();
        assert!(matches!(err, Error::EmptyParticle { label: 4 }));
    }

    #[test]
    fn test_neighboring_particle_is_not_followed() {
        // 4-connected labeling splits the diagonal pair
        let image = image_from_ascii(&["#.", ".#"]);
        let labels = label_union_find(&image, Connectivity::Four);
        let particles = extract_particles(&labels);
        assert_eq!(particles.len(), 2);
        for particle in &particles {
            assert!(chain_code(&labels, particle).unwrap().is_empty());
        }
    }

    #[test]
    fn test_path_is_closed() {
        let image = random_image(25, 25, 0.55, 5);
        let labels = label_contour(&image);
        for particle in extract_particles(&labels) {
            let code = chain_code(&labels, &particle).unwrap();
            let path = code.path();
            assert_eq!(path.len(), code.len() + 1);
            assert_eq!(path.last(), Some(&IVec2::ZERO));
            if particle.len() > 1 {
                assert!(!code.is_empty());
            }
        }
    }
}
