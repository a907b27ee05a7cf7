//! Placeholder grid drawn where no image can be sampled.
//!
//! A white box with a light outline, crossed by one-unit lines every
//! `step` units in both directions.

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::config::GRID_STEP;

/// Fill colour of the placeholder box.
pub const FILL: [u8; 3] = [0xff, 0xff, 0xff];
/// Colour of the outline and grid lines.
pub const LINE: [u8; 3] = [0xe5, 0xe7, 0xeb];

/// Most lines drawn in either direction; larger boxes or finer steps are
/// cut off at this count.
pub const MAX_LINES: usize = 4096;

/// One grid line as a filled rectangle relative to the panel's top-left.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridLine {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Grid pattern filling a `width`×`height` box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridPattern {
    pub width: f64,
    pub height: f64,
    pub step: f64,
}

impl GridPattern {
    /// Grid with the default spacing.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_step(width, height, GRID_STEP)
    }

    /// Grid with explicit spacing. A non-positive or non-finite step falls
    /// back to the default.
    pub fn with_step(width: f64, height: f64, step: f64) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            GRID_STEP
        };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            step,
        }
    }

    /// Number of horizontal lines, at most [`MAX_LINES`].
    pub fn rows(&self) -> usize {
        line_count(self.height, self.step)
    }

    /// Number of vertical lines, at most [`MAX_LINES`].
    pub fn cols(&self) -> usize {
        line_count(self.width, self.step)
    }

    /// Horizontal lines, top to bottom.
    pub fn horizontal_lines(&self) -> impl Iterator<Item = GridLine> + '_ {
        (0..self.rows()).map(move |i| GridLine {
            x: 0.0,
            y: i as f64 * self.step,
            width: self.width,
            height: 1.0,
        })
    }

    /// Vertical lines, left to right.
    pub fn vertical_lines(&self) -> impl Iterator<Item = GridLine> + '_ {
        (0..self.cols()).map(move |i| GridLine {
            x: i as f64 * self.step,
            y: 0.0,
            width: 1.0,
            height: self.height,
        })
    }

    /// All lines: horizontal first, then vertical.
    pub fn lines(&self) -> impl Iterator<Item = GridLine> + '_ {
        self.horizontal_lines().chain(self.vertical_lines())
    }
}

fn line_count(extent: f64, step: f64) -> usize {
    let n = (extent / step).ceil();
    if n >= MAX_LINES as f64 {
        MAX_LINES
    } else if n > 0.0 {
        n as usize
    } else {
        0
    }
}
