//! Planar vector math for the venue.
//!
//! World coordinates are canvas pixels with `y` growing downward.  `Point`
//! uses `f32` throughout; venue sizes stay well under 10⁴ units so single
//! precision is plenty.
//!
//! Every function here is total.  Degenerate input (zero-length vectors,
//! coincident points) yields a defined fallback rather than NaN.

use std::ops::{Add, Mul, Sub};

/// A position or direction in world space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f32 {
        distance_xy(self.x, self.y)
    }

    #[inline]
    pub fn dot(self, other: Point) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product `self × other`.
    #[inline]
    pub fn cross(self, other: Point) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        distance(self, other)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    distance_xy(b.x - a.x, b.y - a.y)
}

/// Euclidean length of the delta `(dx, dy)`.
#[inline]
pub fn distance_xy(dx: f32, dy: f32) -> f32 {
    (dx * dx + dy * dy).sqrt()
}

/// Unit vector in the direction of `v`.  The zero vector stays zero.
#[inline]
pub fn normalize(v: Point) -> Point {
    let len = v.length();
    if len == 0.0 {
        return Point::ZERO;
    }
    Point::new(v.x / len, v.y / len)
}

/// `v` rotated a quarter turn: `(x, y) → (-y, x)`.
#[inline]
pub fn perpendicular(v: Point) -> Point {
    Point::new(-v.y, v.x)
}

/// Move `from` by `dist` along `dir`.  `dir` is used as given; normalise it
/// first if it is not already a unit vector.
#[inline]
pub fn translate(from: Point, dir: Point, dist: f32) -> Point {
    from + dir * dist
}

/// `true` if `a` and `b` are strictly closer than `threshold`.
#[inline]
pub fn within(a: Point, b: Point, threshold: f32) -> bool {
    distance(a, b) < threshold
}

/// Rotate the vector `v` by `angle` radians.
#[inline]
pub fn rotate(v: Point, angle: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Rotate `point` by `angle` radians about `pivot`.
#[inline]
pub fn rotate_about(point: Point, pivot: Point, angle: f32) -> Point {
    pivot + rotate(point - pivot, angle)
}

/// Clamp `value` into `[min, max]`.  If `min > max` the result is `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
