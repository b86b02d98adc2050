//! Static waypoint planning around rectangular obstacles.
//!
//! # Pluggability
//!
//! Fans plan through the [`PathPlanner`] trait, so an application can swap in
//! a different strategy without touching agents or coordinators.  The
//! default [`CornerPlanner`] is a greedy corner router tuned for a handful
//! of coarse rectangles; it is not a graph search.
//!
//! # Algorithm
//!
//! 1. If nothing blocks the straight segment to the target, the path is
//!    just `[target]`.
//! 2. Otherwise, repeatedly take the first obstacle blocking the segment
//!    from the current point to the target and hop to its best corner
//!    (grown by `radius + buffer + margin`).  Corners are scored by
//!    `|cur→corner| + |corner→target| + (1 − cos θ)·100`, where θ is the
//!    angle between the corner direction and the direct direction.  A corner
//!    must lie in free space and be reachable in a straight line.
//! 3. With no usable corner, fall back to the first free, reachable edge
//!    midpoint (top, bottom, left, right).  With none of those either, stop.
//! 4. The exact target is always the final element, and the path never
//!    exceeds `max_waypoints` points.

use log::debug;

use fest_core::geometry::{distance, normalize};
use fest_core::{AgentConfig, PathConfig, Point};

use crate::{Obstacle, ObstacleField, ObstacleKind};

/// Weight of the direction penalty in corner scoring.
const DIRECTION_PENALTY: f32 = 100.0;

/// Candidates closer than this to the current point are the point itself.
const MIN_HOP: f32 = 1.0;

// ── PlanParams ────────────────────────────────────────────────────────────────

/// Per-call planning inputs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanParams {
    pub agent_radius:          f32,
    /// Growth applied to food stalls in the blocking test and corner checks.
    pub personal_space_buffer: f32,
    /// Maximum path length, final target included.  `0` behaves like `1`.
    pub max_waypoints:         usize,
    /// Extra clearance for corner and midpoint candidates.
    pub corner_margin:         f32,
}

impl PlanParams {
    pub fn from_config(agent: &AgentConfig, path: &PathConfig) -> Self {
        Self {
            agent_radius:          agent.radius,
            personal_space_buffer: agent.personal_space,
            max_waypoints:         path.max_waypoints,
            corner_margin:         path.corner_margin,
        }
    }

    /// How far corner and midpoint candidates sit from the rectangle.
    #[inline]
    fn candidate_offset(&self) -> f32 {
        self.agent_radius + self.personal_space_buffer + self.corner_margin
    }
}

// ── PathPlanner trait ─────────────────────────────────────────────────────────

/// Pluggable static planner.
///
/// Implementations must be total: always return at least one point, and the
/// last point must equal `target` exactly.
pub trait PathPlanner: Send + Sync {
    fn plan(
        &self,
        start:  Point,
        target: Point,
        field:  Option<&ObstacleField>,
        params: &PlanParams,
    ) -> Vec<Point>;
}

// ── CornerPlanner ─────────────────────────────────────────────────────────────

/// Greedy corner/midpoint router.  See the module docs.
#[derive(Copy, Clone, Debug, Default)]
pub struct CornerPlanner;

impl PathPlanner for CornerPlanner {
    fn plan(
        &self,
        start:  Point,
        target: Point,
        field:  Option<&ObstacleField>,
        params: &PlanParams,
    ) -> Vec<Point> {
        plan_around_corners(start, target, field, params)
    }
}

fn plan_around_corners(
    start:  Point,
    target: Point,
    field:  Option<&ObstacleField>,
    params: &PlanParams,
) -> Vec<Point> {
    let field = match field {
        Some(f) if !f.is_empty() => f,
        _ => return vec![target],
    };
    if start == target || is_path_clear(field, start, target, params) {
        return vec![target];
    }

    // One slot is always reserved for the exact target.
    let cap = params.max_waypoints.max(1);
    let mut waypoints = Vec::with_capacity(cap);
    let mut current = start;

    while waypoints.len() + 1 < cap {
        let Some(obstacle) = first_blocking(field, current, target, params) else {
            break;
        };
        let offset = params.candidate_offset();
        let next = best_corner(field, obstacle, current, target, offset, params)
            .or_else(|| first_midpoint(field, obstacle, current, offset, params));
        match next {
            Some(p) => {
                waypoints.push(p);
                current = p;
            }
            None => {
                debug!(
                    "no corner or midpoint around {:?} at ({}, {}) from {current}; giving up",
                    obstacle.kind, obstacle.x, obstacle.y
                );
                break;
            }
        }
    }

    waypoints.push(target);
    waypoints
}

fn best_corner(
    field:    &ObstacleField,
    obstacle: &Obstacle,
    current:  Point,
    target:   Point,
    offset:   f32,
    params:   &PlanParams,
) -> Option<Point> {
    let direct = normalize(target - current);
    let mut best: Option<(Point, f32)> = None;

    for corner in obstacle.corners(offset) {
        if !is_usable_hop(field, current, corner, params) {
            continue;
        }
        let alignment = normalize(corner - current).dot(direct);
        let score = distance(current, corner)
            + distance(corner, target)
            + (1.0 - alignment) * DIRECTION_PENALTY;
        if best.is_none_or(|(_, s)| score < s) {
            best = Some((corner, score));
        }
    }
    best.map(|(p, _)| p)
}

fn first_midpoint(
    field:    &ObstacleField,
    obstacle: &Obstacle,
    current:  Point,
    offset:   f32,
    params:   &PlanParams,
) -> Option<Point> {
    let found = obstacle
        .edge_midpoints(offset)
        .into_iter()
        .find(|&m| is_usable_hop(field, current, m, params));
    if found.is_some() {
        debug!("corners around {:?} unusable, using edge midpoint", obstacle.kind);
    }
    found
}

/// A candidate is usable when it is a real hop, lies in free space, and can
/// be reached from `current` in a straight line.
fn is_usable_hop(field: &ObstacleField, current: Point, candidate: Point, params: &PlanParams) -> bool {
    distance(current, candidate) >= MIN_HOP
        && field.is_valid_position(candidate, params.personal_space_buffer)
        && is_path_clear(field, current, candidate, params)
}

// ── Blocking test ─────────────────────────────────────────────────────────────

/// `true` if no obstacle in `field` blocks the segment `from → to`.
pub fn is_path_clear(field: &ObstacleField, from: Point, to: Point, params: &PlanParams) -> bool {
    first_blocking(field, from, to, params).is_none()
}

/// The first obstacle, in field order, that blocks `from → to`.
pub fn first_blocking<'a>(
    field:  &'a ObstacleField,
    from:   Point,
    to:     Point,
    params: &PlanParams,
) -> Option<&'a Obstacle> {
    field.obstacles().iter().find(|o| blocks(o, from, to, params))
}

/// Does `obstacle` block the straight walk `from → to`?
///
/// Checkpoints and the bus zone never block.  Food stalls are grown by the
/// personal-space buffer.  An obstacle whose zone holds both endpoints never
/// blocks; one holding only the target is skipped when the target is nearer
/// than the obstacle centre, when the walk is shorter than two radii, or when
/// the obstacle lies outside the forward cone (cos < 0.5).
pub fn blocks(obstacle: &Obstacle, from: Point, to: Point, params: &PlanParams) -> bool {
    if !obstacle.kind.blocks_paths() {
        return false;
    }
    let buffer = if obstacle.kind == ObstacleKind::FoodStall {
        params.personal_space_buffer
    } else {
        0.0
    };

    let target_near = obstacle.contains(to, buffer);
    if target_near {
        if obstacle.contains(from, buffer) {
            return false;
        }
        let walk = distance(from, to);
        if walk < distance(from, obstacle.center()) || walk < 2.0 * params.agent_radius {
            return false;
        }
        let heading = normalize(to - from);
        let toward_obstacle = normalize(obstacle.center() - from);
        if heading.dot(toward_obstacle) < 0.5 {
            return false;
        }
    }

    obstacle.intersects_segment(from, to, buffer)
}
