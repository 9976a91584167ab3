// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rect --heading-base-level=0

//! Understory Rect: a float-precision, origin-and-size rectangle.
//!
//! [`Rectangle`] is the small value type that layout, hit testing, and clipping code pass
//! around when they think in terms of "where is it and how big is it" rather than two corners.
//!
//! - Construct from coordinates, or from a [`kurbo::Point`] origin and a [`kurbo::Size`].
//! - Mutate in place: move, resize, translate, grow, and accumulate bounding boxes.
//! - Query: emptiness, point containment, overlap, intersection, and union.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_rect::Rectangle;
//!
//! let mut r = Rectangle::new(2.0, 3.0, 4.0, 5.0);
//! r.translate(1.0, -1.0);
//! assert_eq!(r, Rectangle::new(3.0, 2.0, 4.0, 5.0));
//!
//! // Accumulate a bounding box from points.
//! let mut bbox = Rectangle::new(1.0, 1.0, 1.0, 1.0);
//! for (x, y) in [(4.0, 2.0), (2.0, 6.0)] {
//!     bbox.add_point(x, y);
//! }
//! assert_eq!(bbox, Rectangle::new(1.0, 1.0, 3.0, 5.0));
//! assert!(bbox.contains_point(Point::new(2.0, 2.0)));
//!
//! // Disjoint rectangles intersect to an empty rectangle.
//! let a = Rectangle::new(0.0, 0.0, 5.0, 5.0);
//! let b = Rectangle::new(10.0, 10.0, 5.0, 5.0);
//! assert!(!a.intersects(b));
//! assert!(a.intersection(b).is_empty());
//! assert_eq!(a.union(b), Rectangle::new(0.0, 0.0, 15.0, 15.0));
//! ```
//!
//! ## Edge conventions
//!
//! [`Rectangle::contains`] is half-open: the left and top edges are inside, the right and
//! bottom edges are not. [`Rectangle::intersects`] is inclusive: rectangles that only touch
//! along an edge intersect. Code that tiles rectangles edge to edge can rely on the first;
//! code that culls against a clip can rely on the second.
//!
//! ## Empty rectangles
//!
//! A rectangle with zero or negative width or height is empty. Nothing is clamped, so
//! [`Rectangle::intersection`] of disjoint inputs and [`Rectangle::grow`] with negative
//! amounts can both produce negative sizes. [`Rectangle::union`] and
//! [`Rectangle::add_rect`] skip empty operands so they never pull a bounding box toward a
//! meaningless origin.
//!
//! Because a zero-sized rectangle is empty, [`Rectangle::add_point`] on an empty rectangle
//! only relocates it to the point. Seed a point-accumulated bounding box with a rectangle
//! that has area, or accumulate rectangles with [`Rectangle::add_rect`].
//!
//! ### Float semantics
//!
//! Inputs are not validated. NaN and infinities flow through the arithmetic, and a
//! rectangle holding a NaN is not equal to itself. Hashing folds `-0.0` into `0.0` so that
//! equal rectangles always hash alike.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `kurbo/std`.
//! - `libm`: enables `kurbo/libm` for `no_std` builds.
//! - `serde`: versioned `Serialize`/`Deserialize` impls. Persisted rectangles carry
//!   `Rectangle::SERIAL_VERSION`.

#![no_std]

extern crate alloc;

mod hash;
mod kurbo_interop;
mod rectangle;
#[cfg(feature = "serde")]
mod serde_impl;

pub use rectangle::Rectangle;
