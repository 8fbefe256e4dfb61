//! Test helpers shared across modules.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::labeling::LabelMap;
use crate::raster::BinaryImage;

/// Builds an image from rows of `#` (foreground) and `.` (background).
pub(crate) fn image_from_ascii(rows: &[&str]) -> BinaryImage {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mask: Vec<bool> = rows
        .iter()
        .flat_map(|row| {
            assert_eq!(row.len(), width, "ragged ascii image");
            row.chars().map(|c| c == '#')
        })
        .collect();
    BinaryImage::from_mask(width, height, &mask).unwrap()
}

/// Seeded random image with the given foreground probability.
pub(crate) fn random_image(width: usize, height: usize, density: f64, seed: u64) -> BinaryImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let mask: Vec<bool> = (0..width * height)
        .map(|_| rng.random_bool(density))
        .collect();
    BinaryImage::from_mask(width, height, &mask).unwrap()
}

/// The components of a label map as sorted sets of pixel indices,
/// independent of the label values.
pub(crate) fn partition(labels: &LabelMap) -> Vec<Vec<usize>> {
    let mut groups: hashbrown::HashMap<u32, Vec<usize>> = hashbrown::HashMap::new();
    for (index, &label) in labels.labels().iter().enumerate() {
        if label != 0 {
            groups.entry(label).or_default().push(index);
        }
    }
    let mut groups: Vec<Vec<usize>> = groups.into_values().collect();
    groups.sort();
    groups
}
