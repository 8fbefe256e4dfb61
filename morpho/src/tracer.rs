//! Moore-neighbor boundary tracing.
//!
//! Directions are numbered clockwise (in image coordinates, y down) starting
//! at East:
//!
//! ```text
//! 5 6 7
//! 4 . 0
//! 3 2 1
//! ```

use crate::raster::{PixelSource, Point};

pub const DX: [i64; 8] = [1, 1, 0, -1, -1, -1, 0, 1];
pub const DY: [i64; 8] = [0, 1, 1, 1, 0, -1, -1, -1];

/// Initial search direction for an outer contour (background above the start pixel).
pub const OUTER_START: u8 = 7;
/// Initial search direction for an inner contour (background below the start pixel).
pub const INNER_START: u8 = 3;

/// One move along a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub direction: u8,
    pub to: Point,
}

/// Search direction for the step after moving in `direction`.
///
/// The previous pixel lies at `direction + 4`; scanning resumes two positions
/// further clockwise.
#[inline]
pub const fn look_back(direction: u8) -> u8 {
    (direction + 6) % 8
}

/// Finds the first foreground neighbor of `at`, scanning clockwise from `start`.
///
/// Out-of-bounds neighbors count as background. Returns `None` for an
/// isolated pixel.
#[inline]
pub fn trace_next<S: PixelSource + ?Sized>(source: &S, at: Point, start: u8) -> Option<Step> {
    trace_next_with(source, at, start, |_| {})
}

/// Like [`trace_next`], reporting every in-bounds background neighbor that
/// was examined before the foreground one was found.
pub fn trace_next_with<S, F>(source: &S, at: Point, start: u8, mut on_background: F) -> Option<Step>
where
    S: PixelSource + ?Sized,
    F: FnMut(Point),
{
    for i in 0..8u8 {
        let direction = (start + i) % 8;
        let d = direction as usize;
        let Some(next) = at.offset(DX[d], DY[d]) else {
            continue;
        };
        if !source.contains(next) {
            continue;
        }
        if source.is_foreground(next.x, next.y) {
            return Some(Step {
                direction,
                to: next,
            });
        }
        on_background(next);
    }

    None
}

/// Traces the closed boundary through `origin`.
///
/// Stops by Jacob's criterion: when the walk is back at `origin` and the next
/// step would reach the second boundary pixel again. That repeated closing
/// step is not included, so the returned steps lead from `origin` back to
/// `origin`. An isolated pixel yields no steps.
pub fn trace_boundary<S, F>(source: &S, origin: Point, start: u8, mut on_background: F) -> Vec<Step>
where
    S: PixelSource + ?Sized,
    F: FnMut(Point),
{
    let Some(first) = trace_next_with(source, origin, start, &mut on_background) else {
        return Vec::new();
    };

    // (pixel, direction) states are finite, a boundary cannot be longer.
    let max_steps = 8 * source.width() * source.height();

    let mut steps = vec![first];
    let mut current = first.to;
    let mut direction = look_back(first.direction);

    loop {
        let Some(step) = trace_next_with(source, current, direction, &mut on_background) else {
            break;
        };
        if current == origin && step.to == first.to {
            break;
        }
        if steps.len() >= max_steps {
            tracing::warn!(
                "Boundary trace from ({}, {}) exceeded {} steps",
                origin.x,
                origin.y,
                max_steps
            );
            break;
        }

        steps.push(step);
        current = step.to;
        direction = look_back(step.direction);
    }

    steps
}
