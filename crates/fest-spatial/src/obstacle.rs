//! Axis-aligned rectangular obstacles.

use fest_core::geometry::{clamp, distance};
use fest_core::{Point, RectFraction};

/// What an obstacle represents.  The kind decides who it blocks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObstacleKind {
    Stage,
    /// Drop-off zone.  Drawn and reasoned about, never blocks movement.
    Bus,
    /// Checkpoint booth.  Passable for fans in security states.
    Security,
    /// Perimeter fence segment.
    Boundary,
    FoodStall,
}

impl ObstacleKind {
    /// Whether the static planner routes around this kind at all.
    #[inline]
    pub fn blocks_paths(self) -> bool {
        !matches!(self, ObstacleKind::Security | ObstacleKind::Bus)
    }
}

/// A rectangle in world coordinates; `(x, y)` is the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub const fn new(kind: ObstacleKind, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { kind, x, y, width, height }
    }

    /// Scale a layout fraction onto a `width × height` venue.
    pub fn from_fraction(kind: ObstacleKind, rect: &RectFraction, width: f32, height: f32) -> Self {
        let (x, y, w, h) = rect.scale(width, height);
        Self::new(kind, x, y, w, h)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// `true` if `p` lies inside the rectangle grown by `buffer` on every
    /// side (edges inclusive).
    #[inline]
    pub fn contains(&self, p: Point, buffer: f32) -> bool {
        p.x >= self.x - buffer
            && p.x <= self.right() + buffer
            && p.y >= self.y - buffer
            && p.y <= self.bottom() + buffer
    }

    /// Nearest point of the (unexpanded) rectangle to `p`.  Equals `p` when
    /// `p` is inside.
    #[inline]
    pub fn closest_point(&self, p: Point) -> Point {
        Point::new(clamp(p.x, self.x, self.right()), clamp(p.y, self.y, self.bottom()))
    }

    /// Circle-vs-rectangle overlap with the rectangle grown by `buffer`.
    pub fn overlaps_circle(&self, center: Point, radius: f32, buffer: f32) -> bool {
        if self.contains(center, buffer) {
            return true;
        }
        let nearest = Point::new(
            clamp(center.x, self.x - buffer, self.right() + buffer),
            clamp(center.y, self.y - buffer, self.bottom() + buffer),
        );
        distance(center, nearest) < radius
    }

    /// Corners pushed diagonally outward by `offset`, in the order
    /// top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self, offset: f32) -> [Point; 4] {
        [
            Point::new(self.x - offset, self.y - offset),
            Point::new(self.right() + offset, self.y - offset),
            Point::new(self.x - offset, self.bottom() + offset),
            Point::new(self.right() + offset, self.bottom() + offset),
        ]
    }

    /// Edge midpoints pushed outward by `offset`: top, bottom, left, right.
    pub fn edge_midpoints(&self, offset: f32) -> [Point; 4] {
        let c = self.center();
        [
            Point::new(c.x, self.y - offset),
            Point::new(c.x, self.bottom() + offset),
            Point::new(self.x - offset, c.y),
            Point::new(self.right() + offset, c.y),
        ]
    }

    /// Does the segment `a → b` touch the rectangle grown by `buffer`?
    ///
    /// True if either endpoint is inside or the segment crosses any edge.
    pub fn intersects_segment(&self, a: Point, b: Point, buffer: f32) -> bool {
        if self.contains(a, buffer) || self.contains(b, buffer) {
            return true;
        }
        let left   = self.x - buffer;
        let right  = self.right() + buffer;
        let top    = self.y - buffer;
        let bottom = self.bottom() + buffer;
        let tl = Point::new(left, top);
        let tr = Point::new(right, top);
        let bl = Point::new(left, bottom);
        let br = Point::new(right, bottom);
        segments_intersect(a, b, tl, tr)
            || segments_intersect(a, b, tr, br)
            || segments_intersect(a, b, br, bl)
            || segments_intersect(a, b, bl, tl)
    }
}

// ── Segment math ──────────────────────────────────────────────────────────────

/// Sign of the turn `p → q → r`: positive counter-clockwise, negative
/// clockwise, zero collinear.
#[inline]
fn orientation(p: Point, q: Point, r: Point) -> f32 {
    (q - p).cross(r - p)
}

/// `q` lies within the bounding box of `p`–`r` (used for collinear cases).
#[inline]
fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Closed-segment intersection test (touching counts).
pub fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let o1 = orientation(p1, p2, q1);
    let o2 = orientation(p1, p2, q2);
    let o3 = orientation(q1, q2, p1);
    let o4 = orientation(q1, q2, p2);

    if ((o1 > 0.0 && o2 < 0.0) || (o1 < 0.0 && o2 > 0.0))
        && ((o3 > 0.0 && o4 < 0.0) || (o3 < 0.0 && o4 > 0.0))
    {
        return true;
    }

    (o1 == 0.0 && on_segment(p1, q1, p2))
        || (o2 == 0.0 && on_segment(p1, q2, p2))
        || (o3 == 0.0 && on_segment(q1, p1, q2))
        || (o4 == 0.0 && on_segment(q1, p2, q2))
}
