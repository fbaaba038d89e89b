//! Axis-aligned rectangles in CSS pixels

use serde::Serialize;

/// A rectangle in document coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width, never negative
    pub width: f64,
    /// Height, never negative
    pub height: f64,
}

impl Rect {
    /// Create a rectangle, clamping negative extents to zero
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Right edge
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Area in square pixels
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The same rectangle moved by `(dx, dy)`
    #[must_use]
    pub const fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// The overlap of two rectangles
    ///
    /// Edge-adjacent rectangles produce a zero-area rectangle rather than
    /// `None`, matching how browsers report an element that touches the
    /// viewport edge as intersecting.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (left <= right && top <= bottom).then(|| Self::new(left, top, right - left, bottom - top))
    }
}
