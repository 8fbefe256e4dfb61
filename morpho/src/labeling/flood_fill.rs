//! Labeling by flood fill.
//!
//! Each unlabeled foreground pixel met by the row-major scan seeds a new
//! component, which is expanded completely through a FIFO queue before the
//! scan moves on.

use std::collections::VecDeque;

use common::Buffer2;

use crate::raster::BinaryImage;

use super::{Connectivity, LabelMap};

pub fn label_flood_fill(image: &BinaryImage, connectivity: Connectivity) -> LabelMap {
    let width = image.width();
    let height = image.height();

    let mut labels = Buffer2::new_filled(width, height, 0u32);
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut next_label = 1u32;

    for seed in 0..width * height {
        let (x, y) = labels.coords_of(seed);
        if labels[seed] != 0 || !image.is_foreground(x, y) {
            continue;
        }

        let label = next_label;
        next_label += 1;
        labels[seed] = label;
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            let (cx, cy) = labels.coords_of(current);
            for &(dx, dy) in connectivity.offsets() {
                let nx = cx as i64 + dx;
                let ny = cy as i64 + dy;
                // out of bounds or already labeled
                if labels.get_signed(nx, ny) != Some(&0) {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !image.is_foreground(nx, ny) {
                    continue;
                }
                let neighbor = labels.index_of(nx, ny);
                labels[neighbor] = label;
                queue.push_back(neighbor);
            }
        }
    }

    LabelMap::new(labels, (next_label - 1) as usize)
}
