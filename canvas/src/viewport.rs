#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BORDER_INSET_PX;

/// A point in canvas-local pixels (origin at the top-left inside the border).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Placement of the canvas element on the page.
///
/// `offset_left` / `offset_top` are the element's offsets in CSS pixels.
/// `border` is the width of the CSS border drawn around the canvas.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub offset_left: f64,
    pub offset_top: f64,
    pub border: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { offset_left: 0.0, offset_top: 0.0, border: DEFAULT_BORDER_INSET_PX }
    }
}

impl Viewport {
    /// Convert a client-space point (as reported by mouse events) to canvas-local coordinates.
    #[must_use]
    pub fn client_to_canvas(&self, client: Point) -> Point {
        Point {
            x: client.x - self.offset_left - self.border,
            y: client.y - self.offset_top - self.border,
        }
    }

    /// Record the canvas element's current page offsets.
    pub fn set_offsets(&mut self, offset_left: f64, offset_top: f64) {
        self.offset_left = offset_left;
        self.offset_top = offset_top;
    }
}
