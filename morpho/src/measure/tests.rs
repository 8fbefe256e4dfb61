//! Tests for the measurement suite.

use std::f64::consts::PI;

use strum::IntoEnumIterator;

use super::*;
use crate::chain_code::{chain_code, ChainCode};
use crate::error::Error;
use crate::labeling::{label, label_contour, Connectivity, LabelingMethod};
use crate::particle::extract_particles;
use crate::raster::{BinaryImage, Point};
use crate::test_utils::{image_from_ascii, random_image};

const EPS: f64 = 1e-9;

fn analyze_single(rows: &[&str]) -> (LabelMap, Particle) {
    let labels = label_contour(&image_from_ascii(rows));
    let mut particles = extract_particles(&labels);
    assert_eq!(particles.len(), 1);
    let particle = particles.remove(0);
    (labels, particle)
}

fn particles_of(image: &BinaryImage) -> (LabelMap, Vec<Particle>) {
    let labels = label(image, LabelingMethod::ContourTracing, Connectivity::Eight);
    let particles = extract_particles(&labels);
    (labels, particles)
}

// ============================================================================
// Shape
// ============================================================================

#[test]
fn single_pixel_shape() {
    let (_, particle) = analyze_single(&["...", ".#.", "..."]);
    assert_eq!(area(&particle).unwrap(), 1);
    assert_eq!(centroid(&particle).unwrap(), Point::new(1, 1));
    assert_eq!(
        bounding_rectangle(&particle).unwrap(),
        BoundingRect {
            width: 1,
            height: 1,
            x: 1,
            y: 1
        }
    );
}

#[test]
fn horizontal_bar_shape() {
    let (_, particle) = analyze_single(&["....", "####", "...."]);
    assert_eq!(area(&particle).unwrap(), 4);
    let rect = bounding_rectangle(&particle).unwrap();
    assert_eq!((rect.width, rect.height, rect.x, rect.y), (4, 1, 0, 1));
    // mean x is 1.5, rounded away from zero
    assert_eq!(centroid(&particle).unwrap(), Point::new(2, 1));
}

#[test]
fn centroid_rounds_to_nearest() {
    let particle = Particle::new(
        1,
        vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 1)],
    );
    // mean (0.33, 0.33)
    assert_eq!(centroid(&particle).unwrap(), Point::new(0, 0));
}

#[test]
fn empty_particle_is_rejected_everywhere() {
    let labels = label_contour(&image_from_ascii(&["#."]));
    let empty = Particle::new(9, Vec::new());

    assert!(matches!(area(&empty), Err(Error::EmptyParticle { label: 9 })));
    assert!(matches!(centroid(&empty), Err(Error::EmptyParticle { .. })));
    assert!(matches!(
        bounding_rectangle(&empty),
        Err(Error::EmptyParticle { .. })
    ));
    for m in Measurement::iter() {
        assert!(
            matches!(m.compute(&labels, &empty), Err(Error::EmptyParticle { .. })),
            "{m} accepted an empty particle"
        );
    }
}

#[test]
fn bounding_rectangle_contains_every_pixel() {
    let image = random_image(30, 22, 0.5, 17);
    let (_, particles) = particles_of(&image);
    for particle in &particles {
        let rect = bounding_rectangle(particle).unwrap();
        assert!(rect.area() >= particle.len());
        assert!(particle.pixels().iter().all(|&p| rect.contains(p)));
    }
}

#[test]
fn areas_sum_to_foreground_count() {
    for seed in 0..10 {
        let image = random_image(27, 21, 0.45, seed);
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            let labels = label(&image, LabelingMethod::FloodFill, connectivity);
            let total: usize = extract_particles(&labels)
                .iter()
                .map(|p| area(p).unwrap())
                .sum();
            assert_eq!(total, image.foreground_count());
        }
    }
}

// ============================================================================
// Perimeter and circularity
// ============================================================================

#[test]
fn plus_shape_perimeter() {
    let (labels, particle) = analyze_single(&[".#.", "###", ".#."]);
    assert_eq!(area(&particle).unwrap(), 5);
    // four diagonal steps, four corners
    let expected = 4.0 * 1.406 - 4.0 * 0.091;
    assert!((perimeter(&labels, &particle).unwrap() - expected).abs() < EPS);
}

#[test]
fn bar_perimeter_and_circularity() {
    let (labels, particle) = analyze_single(&["....", "####", "...."]);
    // six axis steps, two turn-arounds
    let expected_perimeter = 6.0 * 0.980 - 2.0 * 0.091;
    let p = perimeter(&labels, &particle).unwrap();
    assert!((p - expected_perimeter).abs() < EPS);

    let c = circularity(&labels, &particle).unwrap();
    let expected = 4.0 * PI * 4.0 / (expected_perimeter * expected_perimeter);
    assert!((c - expected).abs() < EPS);
}

#[test]
fn elongated_rectangle_is_not_circular() {
    let (labels, particle) = analyze_single(&[
        "..........", //
        "##########", //
        "##########", //
        "##########",
    ]);
    let code = chain_code(&labels, &particle).unwrap();
    assert_eq!(code.len(), 22);
    let c = circularity(&labels, &particle).unwrap();
    assert!(c < 1.0, "circularity {c}");
    assert!((c - 0.8391).abs() < 1e-3, "circularity {c}");
}

#[test]
fn corners_wrap_around() {
    let code = ChainCode {
        origin: Point::new(0, 0),
        directions: vec![0, 2, 4, 6],
    };
    assert!((perimeter_from_chain(&code) - (4.0 * 0.980 - 4.0 * 0.091)).abs() < EPS);

    let straight = ChainCode {
        origin: Point::new(0, 0),
        directions: vec![0, 0, 4, 4],
    };
    assert!((perimeter_from_chain(&straight) - (4.0 * 0.980 - 2.0 * 0.091)).abs() < EPS);
}

#[test]
fn hole_does_not_change_outer_perimeter() {
    let (labels, ring) = analyze_single(&["###", "#.#", "###"]);
    let (solid_labels, solid) = analyze_single(&["###", "###", "###"]);
    let ring_perimeter = perimeter(&labels, &ring).unwrap();
    assert!((ring_perimeter - perimeter(&solid_labels, &solid).unwrap()).abs() < EPS);
    assert!((ring_perimeter - (8.0 * 0.980 - 4.0 * 0.091)).abs() < EPS);
}

#[test]
fn single_pixel_circularity_is_degenerate() {
    let (labels, particle) = analyze_single(&["#"]);
    assert_eq!(perimeter(&labels, &particle).unwrap(), 0.0);
    assert!(matches!(
        circularity(&labels, &particle),
        Err(Error::DegenerateShape { label: 1 })
    ));
}

// ============================================================================
// Feret
// ============================================================================

#[test]
fn single_pixel_feret() {
    let (labels, particle) = analyze_single(&["#"]);
    let feret = feret_diameter(&labels, &particle).unwrap();
    assert_eq!(feret.values(), [1.0, 0.0, 1.0, 1.0, 0.0]);
}

#[test]
fn bar_feret_is_exact_on_axes() {
    let (labels, particle) = analyze_single(&["....", "####", "...."]);
    let feret = feret_diameter(&labels, &particle).unwrap();
    assert_eq!(
        feret,
        FeretDiameter {
            max_diameter: 4.0,
            max_angle: 0.0,
            min_diameter: 1.0,
            min_projection: 4.0,
            min_angle: 90.0,
        }
    );
}

#[test]
fn vertical_bar_feret_uses_perpendicular_axis() {
    let (labels, particle) = analyze_single(&["#", "#", "#"]);
    let feret = feret_diameter(&labels, &particle).unwrap();
    assert_eq!(feret.max_diameter, 3.0);
    assert_eq!(feret.max_angle, 90.0);
    assert_eq!(feret.min_diameter, 1.0);
    assert_eq!(feret.min_angle, 0.0);
}

#[test]
fn square_diagonal_is_the_maximum() {
    let (labels, particle) = analyze_single(&["##", "##"]);
    let feret = feret_diameter(&labels, &particle).unwrap();
    // closest sampled angles to the diagonal are 1° off
    let expected = 1.0 + 2f64.sqrt() * 1f64.to_radians().cos();
    assert!((feret.max_diameter - expected).abs() < 1e-9);
    assert_eq!(feret.min_diameter, 2.0);
    assert_eq!(feret.min_projection, 2.0);
    assert_eq!(feret.min_angle, 0.0);
}

#[test]
fn feret_brackets_bounding_rectangle() {
    let image = random_image(26, 26, 0.5, 23);
    let (labels, particles) = particles_of(&image);
    for particle in &particles {
        let rect = bounding_rectangle(particle).unwrap();
        let feret = feret_diameter(&labels, particle).unwrap();
        let long = rect.width.max(rect.height) as f64;
        let short = rect.width.min(rect.height) as f64;
        assert!(feret.max_diameter >= long);
        assert!(feret.min_diameter <= short);
        assert!(feret.min_diameter <= feret.max_diameter);
        assert!((0.0..=266.0).contains(&feret.max_angle));
    }
}

// ============================================================================
// Descriptors and table assembly
// ============================================================================

#[test]
fn measurement_names() {
    assert_eq!(Measurement::BoundingRectangle.to_string(), "boundingRectangle");
    assert_eq!(
        "feretDiameter".parse::<Measurement>().unwrap(),
        Measurement::FeretDiameter
    );
    let parsed: Vec<Measurement> = serde_json::from_str(r#"["area", "circularity"]"#).unwrap();
    assert_eq!(parsed, vec![Measurement::Area, Measurement::Circularity]);
}

#[test]
fn measurement_widths_match_headers() {
    let (labels, particle) = analyze_single(&["###", "##.", "#.."]);
    for m in Measurement::iter() {
        assert_eq!(m.compute(&labels, &particle).unwrap().len(), m.headers().len());
    }
}

#[test]
fn measure_subset_builds_matching_table() {
    let (labels, particles) = particles_of(&image_from_ascii(&[
        "##......", //
        "##......", //
        "......##", //
        "......##",
    ]));
    let table = measure(
        &labels,
        &particles,
        &[Measurement::Area, Measurement::BoundingRectangle],
    )
    .unwrap();

    assert_eq!(table.headers, vec!["Area", "width", "height", "bx", "by"]);
    assert_eq!(
        table.rows,
        vec![vec![4.0, 2.0, 2.0, 0.0, 0.0], vec![4.0, 2.0, 2.0, 6.0, 2.0]]
    );
}

#[test]
fn measure_propagates_degenerate_shape() {
    let (labels, particles) = particles_of(&image_from_ascii(&["##..", "...#"]));
    let err = measure(&labels, &particles, &[Measurement::Circularity]).unwrap_err();
    assert!(matches!(err, Error::DegenerateShape { .. }));
}

#[test]
fn measure_without_particles_has_headers_only() {
    let (labels, particles) = particles_of(&image_from_ascii(&["...", "..."]));
    let table = measure(&labels, &particles, &[Measurement::Centroid]).unwrap();
    assert_eq!(table.headers, vec!["CentroidX", "CentroidY"]);
    assert!(table.rows.is_empty());
}
