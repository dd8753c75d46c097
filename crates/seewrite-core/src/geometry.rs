//! Geometric primitives for diagram layout and positioning.
//!
//! This module provides the geometric types used by the layout engines and
//! the SVG exporter.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//!
//! # Coordinate System
//!
//! SeeWrite uses a coordinate system consistent with SVG and HTML canvas:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Angles are measured in radians from the positive X axis and grow
//! clockwise on screen, because Y increases downward.

use std::f32::consts::TAU;

use serde::Serialize;

/// A 2D point representing a position in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use seewrite_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let delta = p1.sub_point(p2);
/// assert_eq!(delta.x(), 5.0);
/// assert_eq!(delta.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Returns the point at `distance` from this point in the direction of `angle`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seewrite_core::geometry::Point;
    /// let center = Point::new(300.0, 200.0);
    /// let east = center.polar_offset(0.0, 120.0);
    /// assert_eq!(east.x(), 420.0);
    /// assert_eq!(east.y(), 200.0);
    /// ```
    pub fn polar_offset(self, angle: f32, distance: f32) -> Self {
        Self {
            x: angle.cos().mul_add(distance, self.x),
            y: angle.sin().mul_add(distance, self.y),
        }
    }

    /// Angle in radians of the direction from this point towards `other`.
    pub fn angle_to(self, other: Point) -> f32 {
        let delta = other.sub_point(self);
        delta.y.atan2(delta.x)
    }

    /// Top-left corner of a box of `size` centered on this point.
    pub fn top_left(self, size: Size) -> Self {
        Self {
            x: self.x - size.width / 2.0,
            y: self.y - size.height / 2.0,
        }
    }
}

/// Angle of slot `index` when `count` slots are spread evenly around a circle.
///
/// Returns `0.0` when `count` is zero so callers never divide by zero.
///
/// # Examples
///
/// ```
/// # use seewrite_core::geometry::even_angle;
/// assert_eq!(even_angle(0, 4), 0.0);
/// assert!((even_angle(1, 4) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
pub fn even_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    (index as f32 / count as f32) * TAU
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the center point of a canvas of this size anchored at the origin
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}
