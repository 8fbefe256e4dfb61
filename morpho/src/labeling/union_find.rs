//! Two-pass labeling with a union-find equivalence table.
//!
//! Pass 1 assigns provisional labels from the already scanned neighbors
//! (up/left, plus the upper diagonals under 8-connectivity) and records
//! equivalences whenever two different labels meet. Pass 2 replaces every
//! provisional label by its compacted root.

use common::Buffer2;

use crate::raster::BinaryImage;

use super::{Connectivity, LabelMap};

/// Labels connected components with the classic two-pass algorithm.
pub fn label_union_find(image: &BinaryImage, connectivity: Connectivity) -> LabelMap {
    let width = image.width();
    let height = image.height();

    let mut labels = Buffer2::new_filled(width, height, 0u32);
    let mut uf = UnionFind::new();

    for y in 0..height {
        for x in 0..width {
            if !image.is_foreground(x, y) {
                continue;
            }

            let mut assigned = 0u32;
            for &(dx, dy) in connectivity.causal_offsets() {
                let Some(&neighbor) = labels.get_signed(x as i64 + dx, y as i64 + dy) else {
                    continue;
                };
                if neighbor == 0 {
                    continue;
                }
                if assigned == 0 {
                    assigned = neighbor;
                } else if neighbor != assigned {
                    uf.union(assigned, neighbor);
                    assigned = assigned.min(neighbor);
                }
            }

            if assigned == 0 {
                assigned = uf.make_set();
            }
            labels[(x, y)] = assigned;
        }
    }

    let num_labels = uf.flatten_labels(labels.pixels_mut());
    LabelMap::new(labels, num_labels)
}

/// Equivalence table over provisional labels `1..=len`.
///
/// `parent[label - 1]` points towards the representative; a root points at
/// itself. Label 0 is never stored.
#[derive(Debug)]
pub(super) struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    pub(super) fn new() -> Self {
        Self {
            parent: Vec::with_capacity(256),
        }
    }

    /// Mints the next provisional label.
    #[inline]
    pub(super) fn make_set(&mut self) -> u32 {
        let label = self.parent.len() as u32 + 1;
        self.parent.push(label);
        label
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.parent.len()
    }

    /// Find root with iterative path compression (two-pass).
    pub(super) fn find(&mut self, label: u32) -> u32 {
        debug_assert!(label >= 1 && label as usize <= self.parent.len());

        let mut root = label;
        loop {
            let parent = self.parent[(root - 1) as usize];
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = label;
        while current != root {
            let idx = (current - 1) as usize;
            let next = self.parent[idx];
            self.parent[idx] = root;
            current = next;
        }

        root
    }

    /// Merges the sets of `a` and `b`; the smaller root becomes the representative.
    pub(super) fn union(&mut self, a: u32, b: u32) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            let (smaller, larger) = if root_a < root_b {
                (root_a, root_b)
            } else {
                (root_b, root_a)
            };
            self.parent[(larger - 1) as usize] = smaller;
        }
    }

    /// Rewrites provisional labels to sequential `1..=n` and returns `n`.
    pub(super) fn flatten_labels(&mut self, labels: &mut [u32]) -> usize {
        if self.parent.is_empty() {
            return 0;
        }

        let len = self.parent.len();
        let mut label_map = vec![0u32; len + 1];
        let mut num_labels = 0u32;

        // Roots are always smaller than the labels they absorb, so each root
        // is numbered before any of its members is looked up.
        for i in 1..=len as u32 {
            let root = self.find(i);
            if label_map[root as usize] == 0 {
                num_labels += 1;
                label_map[root as usize] = num_labels;
            }
            label_map[i as usize] = label_map[root as usize];
        }

        for l in labels.iter_mut().filter(|l| **l != 0) {
            *l = label_map[*l as usize];
        }

        num_labels as usize
    }
}
