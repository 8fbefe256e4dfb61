//! One-pass labeling by contour tracing.
//!
//! Scanning row-major, a foreground pixel with background above that has no
//! label yet starts a new outer contour; the whole contour is traced and
//! labeled at once. A pixel with unmarked background below starts an inner
//! contour (a hole boundary) of the component it belongs to. Remaining
//! interior pixels take the label of their left neighbor, which is always set
//! by the time the scan reaches them.
//!
//! Background pixels examined by the tracer are marked as visited, which is
//! what distinguishes an exterior pixel below a contour from an untraced hole.

use common::Buffer2;

use crate::raster::{BinaryImage, PixelSource, Point};
use crate::tracer::{trace_boundary, INNER_START, OUTER_START};

use super::LabelMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Unset,
    /// Background pixel already examined by a contour trace.
    Visited,
    Label(u32),
}

impl Cell {
    #[inline]
    fn label(self) -> Option<u32> {
        match self {
            Cell::Label(label) => Some(label),
            Cell::Unset | Cell::Visited => None,
        }
    }
}

/// The input surrounded by a one-pixel background frame, so that every
/// neighbor of an input pixel exists and no index wraps across rows.
#[derive(Debug)]
struct FramedImage<'a> {
    image: &'a BinaryImage,
}

impl PixelSource for FramedImage<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.image.width() + 2
    }

    #[inline]
    fn height(&self) -> usize {
        self.image.height() + 2
    }

    #[inline]
    fn is_foreground(&self, x: usize, y: usize) -> bool {
        x >= 1
            && y >= 1
            && x <= self.image.width()
            && y <= self.image.height()
            && self.image.is_foreground(x - 1, y - 1)
    }
}

#[derive(Debug)]
struct ContourLabeler<'a> {
    source: FramedImage<'a>,
    cells: Buffer2<Cell>,
    next_label: u32,
}

impl<'a> ContourLabeler<'a> {
    fn new(image: &'a BinaryImage) -> Self {
        let source = FramedImage { image };
        let cells = Buffer2::new_filled(source.width(), source.height(), Cell::Unset);
        Self {
            source,
            cells,
            next_label: 1,
        }
    }

    fn fresh_label(&mut self) -> u32 {
        let label = self.next_label;
        self.next_label += 1;
        label
    }

    /// Label of `at`, inherited from the left neighbor if not yet set.
    fn label_or_inherit(&mut self, at: Point) -> u32 {
        if let Some(label) = self.cells[(at.x, at.y)].label() {
            return label;
        }
        let label = match self.cells[(at.x - 1, at.y)].label() {
            Some(label) => label,
            None => {
                tracing::warn!(
                    "Contour pixel ({}, {}) has no labeled left neighbor",
                    at.x - 1,
                    at.y - 1
                );
                self.fresh_label()
            }
        };
        self.cells[(at.x, at.y)] = Cell::Label(label);
        label
    }

    fn trace(&mut self, origin: Point, start: u8, label: u32) {
        let Self { source, cells, .. } = self;
        let steps = trace_boundary(&*source, origin, start, |p| {
            cells[(p.x, p.y)] = Cell::Visited;
        });
        for step in steps {
            cells[(step.to.x, step.to.y)] = Cell::Label(label);
        }
    }

    fn run(mut self) -> LabelMap {
        let width = self.source.image.width();
        let height = self.source.image.height();

        for y in 1..=height {
            for x in 1..=width {
                if !self.source.is_foreground(x, y) {
                    continue;
                }
                let at = Point::new(x, y);

                if self.cells[(x, y)] == Cell::Unset && !self.source.is_foreground(x, y - 1) {
                    let label = self.fresh_label();
                    self.cells[(x, y)] = Cell::Label(label);
                    self.trace(at, OUTER_START, label);
                }

                let hole_below =
                    !self.source.is_foreground(x, y + 1) && self.cells[(x, y + 1)] == Cell::Unset;
                if hole_below {
                    let label = self.label_or_inherit(at);
                    self.trace(at, INNER_START, label);
                } else {
                    self.label_or_inherit(at);
                }
            }
        }

        let num_labels = (self.next_label - 1) as usize;
        let mut labels = Buffer2::new_filled(width, height, 0u32);
        for y in 0..height {
            for x in 0..width {
                labels[(x, y)] = self.cells[(x + 1, y + 1)].label().unwrap_or(0);
            }
        }

        LabelMap::new(labels, num_labels)
    }
}

/// Labels 8-connected components by contour tracing.
pub fn label_contour(image: &BinaryImage) -> LabelMap {
    if image.width() == 0 || image.height() == 0 {
        return LabelMap::new(Buffer2::new_filled(image.width(), image.height(), 0), 0);
    }
    ContourLabeler::new(image).run()
}
