// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Rectangle`] value type: origin plus extent.

use core::fmt;

use kurbo::{Point, Size};

/// Axis-aligned rectangle stored as an origin and a size.
///
/// The origin is the top-left corner under the usual screen convention
/// (y grows downward), and the far corner is `(x + width, y + height)`.
///
/// No field is constrained by construction. A rectangle whose width or height
/// is zero or negative is still representable, but is [empty](Self::is_empty).
///
/// Equality compares the four fields with `==` and no tolerance. A rectangle
/// holding a NaN is therefore not equal to itself, which is why this type does
/// not implement [`Eq`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rectangle {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a rectangle from its origin and extent.
    #[inline(always)]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle of the given extent with its origin at `(0, 0)`.
    #[inline]
    pub const fn from_width_height(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Create a rectangle from an origin point and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Create a zero-sized rectangle located at `origin`.
    #[inline]
    pub const fn from_origin(origin: Point) -> Self {
        Self::new(origin.x, origin.y, 0.0, 0.0)
    }

    /// Create a rectangle of the given size with its origin at `(0, 0)`.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// The x coordinate of the origin.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate of the origin.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The width.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// The height.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// The x coordinate of the far (right) edge, `x + width`.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// The y coordinate of the far (bottom) edge, `y + height`.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Replace all four fields at once.
    #[inline]
    pub fn set_bounds(&mut self, x: f64, y: f64, width: f64, height: f64) {
        *self = Self::new(x, y, width, height);
    }

    /// Replace the bounds with the given origin and size.
    #[inline]
    pub fn set_bounds_origin_size(&mut self, origin: Point, size: Size) {
        self.set_bounds(origin.x, origin.y, size.width, size.height);
    }

    /// Replace the bounds with those of `other`.
    #[inline]
    pub fn set_bounds_from(&mut self, other: Self) {
        self.set_bounds(other.x, other.y, other.width, other.height);
    }

    /// A copy of this rectangle.
    ///
    /// Mutating the returned value never affects `self`.
    #[inline]
    pub const fn bounds(&self) -> Self {
        *self
    }

    /// Move the origin to `(x, y)`, keeping the size.
    #[inline]
    pub fn set_location(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Move the origin to `origin`, keeping the size.
    #[inline]
    pub fn set_location_point(&mut self, origin: Point) {
        self.set_location(origin.x, origin.y);
    }

    /// The origin as a point.
    #[inline]
    pub const fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the origin by `(dx, dy)`.
    ///
    /// Positive `dx` moves right and positive `dy` moves down.
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Replace the size, keeping the origin.
    #[inline]
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Replace the size with `size`, keeping the origin.
    #[inline]
    pub fn set_size_dimension(&mut self, size: Size) {
        self.set_size(size.width, size.height);
    }

    /// The extent as a [`Size`].
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Grow the rectangle by `dx` on the left and right and by `dy` on the
    /// top and bottom.
    ///
    /// Negative values shrink it. The result is not clamped, so shrinking
    /// past zero leaves a negative (empty) size.
    ///
    /// ```
    /// use understory_rect::Rectangle;
    ///
    /// let mut r = Rectangle::new(2.0, 3.0, 4.0, 5.0);
    /// r.grow(1.0, 1.0);
    /// assert_eq!(r, Rectangle::new(1.0, 2.0, 6.0, 7.0));
    /// ```
    #[inline]
    pub fn grow(&mut self, dx: f64, dy: f64) {
        self.x -= dx;
        self.y -= dy;
        self.width += 2.0 * dx;
        self.height += 2.0 * dy;
    }

    /// Whether the rectangle has no area, i.e. `width <= 0 || height <= 0`.
    ///
    /// An empty rectangle still has a location.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether the point `(x, y)` lies inside the rectangle.
    ///
    /// The left and top edges are inside; the right and bottom edges are
    /// not. Two rectangles that tile edge to edge therefore never both
    /// contain the same point.
    ///
    /// ```
    /// use understory_rect::Rectangle;
    ///
    /// let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(r.contains(0.0, 0.0));
    /// assert!(!r.contains(10.0, 0.0));
    /// ```
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && y >= self.y && x < self.right() && y < self.bottom()
    }

    /// Whether `pt` lies inside the rectangle. See [`contains`](Self::contains).
    #[inline]
    pub fn contains_point(&self, pt: Point) -> bool {
        self.contains(pt.x, pt.y)
    }

    /// Whether this rectangle and `other` overlap.
    ///
    /// Unlike [`contains`](Self::contains), edges are inclusive here: two
    /// rectangles that only share an edge are considered to intersect.
    /// Emptiness is not checked.
    ///
    /// ```
    /// use understory_rect::Rectangle;
    ///
    /// let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    /// let b = Rectangle::new(10.0, 0.0, 10.0, 10.0);
    /// assert!(a.intersects(b));
    /// ```
    pub fn intersects(&self, other: Self) -> bool {
        if self.x > other.right() {
            return false;
        }
        if self.y > other.bottom() {
            return false;
        }
        if other.x > self.right() {
            return false;
        }
        if other.y > self.bottom() {
            return false;
        }
        true
    }

    /// The overlap of this rectangle and `other`.
    ///
    /// Disjoint inputs produce a rectangle with a zero or negative size, so
    /// callers should check [`is_empty`](Self::is_empty) on the result.
    pub fn intersection(&self, other: Self) -> Self {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// The smallest rectangle enclosing this rectangle and `other`.
    ///
    /// An empty operand is ignored, so it cannot drag the result toward its
    /// (meaningless) location. If both are empty, `other` is returned.
    pub fn union(&self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return *self;
        }
        self.enclose(other)
    }

    /// Grow this rectangle in place to also enclose `other`.
    ///
    /// Adding an empty rectangle does nothing. Adding to an empty rectangle
    /// replaces it with `other`.
    pub fn add_rect(&mut self, other: Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.set_bounds_from(other);
            return;
        }
        *self = self.enclose(other);
    }

    /// Grow this rectangle in place to also enclose the point `(x, y)`.
    ///
    /// Adding a point to an empty rectangle replaces it with a zero-sized
    /// rectangle at that point. Points already inside leave it unchanged.
    ///
    /// ```
    /// use understory_rect::Rectangle;
    ///
    /// let mut r = Rectangle::ZERO;
    /// r.add_point(4.0, 2.0);
    /// assert_eq!(r, Rectangle::new(4.0, 2.0, 0.0, 0.0));
    ///
    /// let mut r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    /// r.add_point(15.0, -5.0);
    /// assert_eq!(r, Rectangle::new(0.0, -5.0, 15.0, 15.0));
    /// ```
    pub fn add_point(&mut self, x: f64, y: f64) {
        if self.is_empty() {
            self.set_bounds(x, y, 0.0, 0.0);
            return;
        }
        let x1 = self.right().max(x);
        let y1 = self.bottom().max(y);
        self.x = self.x.min(x);
        self.y = self.y.min(y);
        self.width = x1 - self.x;
        self.height = y1 - self.y;
    }

    /// Grow this rectangle in place to also enclose `pt`.
    /// See [`add_point`](Self::add_point).
    #[inline]
    pub fn add_point_from(&mut self, pt: Point) {
        self.add_point(pt.x, pt.y);
    }

    /// Per-axis min of origins and max of far corners, with no emptiness checks.
    fn enclose(&self, other: Self) -> Self {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }
}

/// Formats as `[x, y, widthxheight]`, e.g. `[2.0, 3.0, 4.0x5.0]`.
impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}, {:?}, {:?}x{:?}]",
            self.x, self.y, self.width, self.height
        )
    }
}
