//! Geometry primitives shared by every pointer path.
//!
//! Hosts report pointer positions in viewport space (DOM `clientX`/`clientY`).
//! Everything inside the engine works in surface-local space, where `(0, 0)`
//! is the top-left corner of the drawing surface. [`Rect::to_local`] is the
//! single place that conversion happens.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in either viewport or surface-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Width and height of a note or container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle, typically the surface's bounding client rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Convert a viewport-space point to coordinates local to this rect.
    #[must_use]
    pub fn to_local(&self, viewport: Point) -> Point {
        Point { x: viewport.x - self.left, y: viewport.y - self.top }
    }

    /// Whether `pt` (in the same space as the rect) lies inside it. Edges are inclusive.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x <= self.left + self.width && pt.y >= self.top && pt.y <= self.top + self.height
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
