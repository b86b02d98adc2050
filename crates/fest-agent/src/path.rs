//! A fan's static route: planned points, each stamped with when it was planned.

use std::collections::VecDeque;

use fest_core::{Point, SimTime};

/// One planned point and the time the plan that produced it was made.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub point:      Point,
    pub planned_at: SimTime,
}

/// Front-to-back queue of [`Waypoint`]s.  The front is the next point to walk
/// to; the back is normally the exact target.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointPath {
    points: VecDeque<Waypoint>,
}

impl WaypointPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the current route and store `points`, all stamped `now`.
    pub fn replace(&mut self, points: impl IntoIterator<Item = Point>, now: SimTime) {
        self.points.clear();
        self.points
            .extend(points.into_iter().map(|point| Waypoint { point, planned_at: now }));
    }

    /// The point to walk toward next.
    #[inline]
    pub fn next(&self) -> Option<Point> {
        self.points.front().map(|w| w.point)
    }

    #[inline]
    pub fn front(&self) -> Option<&Waypoint> {
        self.points.front()
    }

    /// The final point of the route.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.points.back().map(|w| w.point)
    }

    /// Pop the reached front waypoint.
    pub fn advance(&mut self) -> Option<Waypoint> {
        self.points.pop_front()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> + '_ {
        self.points.iter()
    }
}
