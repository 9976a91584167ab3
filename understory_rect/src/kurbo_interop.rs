// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between [`Rectangle`] and [`kurbo`] geometry.
//!
//! [`kurbo::Rect`] stores two corners rather than an origin and a size.
//! Converting in either direction keeps the sign of the extent, so an
//! inverted `Rect` becomes a `Rectangle` with negative size and vice versa.

use kurbo::{Point, Rect, Size};

use crate::Rectangle;

impl From<Rectangle> for Rect {
    #[inline]
    fn from(r: Rectangle) -> Self {
        // `Rect::from_origin_size` would normalize negative sizes away.
        Self::new(r.x, r.y, r.right(), r.bottom())
    }
}

impl From<Rect> for Rectangle {
    #[inline]
    fn from(r: Rect) -> Self {
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

impl From<Point> for Rectangle {
    #[inline]
    fn from(origin: Point) -> Self {
        Self::from_origin(origin)
    }
}

impl From<Size> for Rectangle {
    #[inline]
    fn from(size: Size) -> Self {
        Self::from_size(size)
    }
}

impl From<(Point, Size)> for Rectangle {
    #[inline]
    fn from((origin, size): (Point, Size)) -> Self {
        Self::from_origin_size(origin, size)
    }
}

#[cfg(test)]
mod tests {
    use crate::Rectangle;
    use kurbo::{Point, Rect, Size};

    #[test]
    fn to_and_from_rect() {
        let r = Rectangle::new(1.0, 2.0, 3.0, 4.0);
        let k = Rect::from(r);
        assert_eq!(k, Rect::new(1.0, 2.0, 4.0, 6.0));
        assert_eq!(Rectangle::from(k), r);
    }

    #[test]
    fn negative_extent_survives() {
        let r = Rectangle::new(5.0, 5.0, -2.0, -3.0);
        let k = Rect::from(r);
        assert_eq!(k, Rect::new(5.0, 5.0, 3.0, 2.0));
        let back = Rectangle::from(k);
        assert_eq!(back, r);
        assert!(back.is_empty());
    }

    #[test]
    fn containment_agrees_with_kurbo() {
        let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let k = Rect::from(r);
        for pt in [
            Point::new(0.0, 0.0),
            Point::new(5.0, 9.5),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ] {
            assert_eq!(r.contains_point(pt), k.contains(pt), "at {pt:?}");
        }
    }

    #[test]
    fn from_point_and_size() {
        let origin = Point::new(3.0, 4.0);
        let size = Size::new(5.0, 6.0);
        assert_eq!(Rectangle::from(origin), Rectangle::new(3.0, 4.0, 0.0, 0.0));
        assert_eq!(Rectangle::from(size), Rectangle::new(0.0, 0.0, 5.0, 6.0));
        assert_eq!(
            Rectangle::from((origin, size)),
            Rectangle::new(3.0, 4.0, 5.0, 6.0)
        );
    }
}
