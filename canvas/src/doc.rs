//! Document model: triangles and the ordered in-memory store.
//!
//! The store is a plain ordered list. Index order is z-order: index 0 is drawn
//! first (bottom) and the last index is drawn last (topmost). Hit-testing walks
//! the same list in reverse so the triangle the user sees is the one they get.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::hit;
use crate::viewport::Point;

/// Error returned by [`TriangleStore`] index operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The index does not refer to a stored triangle.
    #[error("triangle index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A filled triangle on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Apex vertex.
    pub p0: Point,
    /// Base vertex on the start side of the drag.
    pub p1: Point,
    /// Base vertex on the end side of the drag.
    pub p2: Point,
    /// Fill colour as a CSS colour string.
    pub colour: String,
}

impl Triangle {
    /// Build the isoceles triangle spanned by a drag from `start` to `end`.
    ///
    /// The apex sits at the horizontal midpoint of the start row and the base
    /// runs along the end row.
    #[must_use]
    pub fn from_drag(start: Point, end: Point, colour: impl Into<String>) -> Self {
        Self {
            p0: Point::new((end.x + start.x) / 2.0, start.y),
            p1: Point::new(start.x, end.y),
            p2: Point::new(end.x, end.y),
            colour: colour.into(),
        }
    }

    /// A zero-extent triangle with all three vertices at `at`.
    #[must_use]
    pub fn collapsed(at: Point, colour: impl Into<String>) -> Self {
        Self { p0: at, p1: at, p2: at, colour: colour.into() }
    }

    /// Center of the triangle's bounding box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.p1.x + self.p2.x) / 2.0, (self.p0.y + self.p1.y) / 2.0)
    }

    /// Signed base width (`p2.x - p1.x`). Negative when drawn right-to-left.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.p2.x - self.p1.x
    }

    /// Signed height (`p1.y - p0.y`). Negative when drawn bottom-to-top.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.p1.y - self.p0.y
    }

    /// Reposition the triangle so its center lands on `center`.
    ///
    /// Width and height are read from the current vertices, so orientation
    /// (apex up or down, base left-to-right or reversed) is preserved.
    pub fn move_center_to(&mut self, center: Point) {
        let w = self.width();
        let h = self.height();
        self.p0 = Point::new(center.x, center.y - h / 2.0);
        self.p1 = Point::new(center.x - w / 2.0, center.y + h / 2.0);
        self.p2 = Point::new(center.x + w / 2.0, center.y + h / 2.0);
    }

    /// Whether `pt` lies strictly inside this triangle.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        hit::point_in_triangle(pt, self)
    }
}

/// Whether a drag from `start` to `end` spans a drawable triangle.
///
/// Both axes must move; a drag that stays on one row or column is treated
/// as a click.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_drawable_drag(start: Point, end: Point) -> bool {
    start.x != end.x && start.y != end.y
}

/// Ordered in-memory store of triangles.
#[derive(Debug, Clone, Default)]
pub struct TriangleStore {
    triangles: Vec<Triangle>,
}

impl TriangleStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { triangles: Vec::new() }
    }

    /// Add a triangle on top of everything else.
    pub fn append(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Remove and return the triangle at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<Triangle, StoreError> {
        self.check_index(index)?;
        Ok(self.triangles.remove(index))
    }

    /// Move the triangle at `index` to the top of the stack, returning its new index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfRange`] if `index >= len()`.
    pub fn bring_to_front(&mut self, index: usize) -> Result<usize, StoreError> {
        let triangle = self.remove_at(index)?;
        self.triangles.push(triangle);
        Ok(self.triangles.len() - 1)
    }

    /// Remove every triangle.
    pub fn clear(&mut self) {
        self.triangles.clear();
    }

    /// All triangles in draw order (bottom first).
    #[must_use]
    pub fn all(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The topmost triangle strictly containing `pt`, with its index.
    #[must_use]
    pub fn topmost_hit_at(&self, pt: Point) -> Option<(usize, &Triangle)> {
        hit::topmost_hit(pt, &self.triangles).map(|index| (index, &self.triangles[index]))
    }

    /// Return a reference to the triangle at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Triangle> {
        self.triangles.get(index)
    }

    /// Return a mutable reference to the triangle at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Triangle> {
        self.triangles.get_mut(index)
    }

    /// Replace every triangle's colour with the value produced by `next_colour`.
    pub fn recolor_with<F>(&mut self, mut next_colour: F)
    where
        F: FnMut() -> String,
    {
        for triangle in &mut self.triangles {
            triangle.colour = next_colour();
        }
    }

    /// Number of triangles currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if the store contains no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.triangles.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange { index, len: self.triangles.len() })
        }
    }
}
