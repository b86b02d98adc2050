//! The per-fan record and its navigation operations.
//!
//! A fan owns its [`WaypointPath`].  Planners and coordinators never write
//! the path directly: they call [`Agent::set_target`] (throttled) or
//! [`Agent::set_target_forced`], which run the navigator's planner from the
//! fan's current position.

use fest_core::geometry::{distance, within};
use fest_core::{AgentId, MovementState, Point, SimTime};
use fest_spatial::{Body, Navigator, PathPlanner};

use crate::WaypointPath;

/// Targets closer than this count as unchanged for the replan throttle.
const SAME_TARGET: f32 = 1.0;

/// Where a fan stands with the security checkpoint.
///
/// Sampled once, on first admission to a security line.  A fan picked for
/// the extended check goes round the line exactly once more.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecurityClass {
    #[default]
    Unclassified,
    /// Needs the extended check, then returns to the back of the line once.
    ExtendedOnce,
    /// Released on the next completed check.
    Cleared,
}

#[derive(Clone, Debug)]
pub struct Agent {
    pub id:       AgentId,
    pub position: Point,
    pub radius:   f32,
    /// World units per simulated second.
    pub speed:    f32,
    pub state:    MovementState,

    /// Final destination of the current route, if any.
    pub target:           Option<Point>,
    pub path:             WaypointPath,
    /// Short-lived steering point from local avoidance.  Takes precedence
    /// over `path` until reached or replaced.
    pub dynamic_waypoint: Option<Point>,

    /// Slot index in the line the fan belongs to.  `None` when not queued.
    pub queue_position: Option<usize>,
    pub security:       SecurityClass,
    /// 0.0 (full) ..= 1.0 (starving).
    pub hunger:         f32,
    /// When the fan reached the head of its line.
    pub wait_start:     Option<SimTime>,

    last_plan: Option<SimTime>,
}

impl Agent {
    pub(crate) fn new(id: AgentId, position: Point, radius: f32, speed: f32) -> Self {
        Self {
            id,
            position,
            radius,
            speed,
            state:            MovementState::Idle,
            target:           None,
            path:             WaypointPath::new(),
            dynamic_waypoint: None,
            queue_position:   None,
            security:         SecurityClass::Unclassified,
            hunger:           0.0,
            wait_start:       None,
            last_plan:        None,
        }
    }

    // ── Navigation ────────────────────────────────────────────────────────

    /// Head for `target`, planning a route around the venue.
    ///
    /// Re-targeting the same point (within 1 unit) inside
    /// `replan_interval_ms` of the last plan keeps the current route.
    /// Returns `true` if a new route was planned.
    pub fn set_target<P: PathPlanner>(
        &mut self,
        target: Point,
        nav:    &Navigator<P>,
        now:    SimTime,
    ) -> bool {
        let unchanged = self
            .target
            .is_some_and(|t| distance(t, target) < SAME_TARGET);
        let fresh = self
            .last_plan
            .is_some_and(|t| now.since(t) < nav.path.replan_interval_ms);
        if unchanged && fresh {
            return false;
        }
        self.set_target_forced(target, nav, now);
        true
    }

    /// Head for `target`, always replanning.
    pub fn set_target_forced<P: PathPlanner>(&mut self, target: Point, nav: &Navigator<P>, now: SimTime) {
        self.target = Some(target);
        self.dynamic_waypoint = None;
        self.path.replace(nav.plan(self.position, target), now);
        self.last_plan = Some(now);
    }

    /// Plan again from the current position toward the current target.
    /// Returns `false` when there is no target.
    pub fn replan<P: PathPlanner>(&mut self, nav: &Navigator<P>, now: SimTime) -> bool {
        match self.target {
            Some(target) => {
                self.set_target_forced(target, nav, now);
                true
            }
            None => false,
        }
    }

    /// `true` once `interval_ms` has passed since the last plan toward a
    /// target that has not yet been reached.
    pub fn needs_replan(&self, now: SimTime, interval_ms: u64) -> bool {
        self.target.is_some()
            && !self.path.is_empty()
            && self.last_plan.is_none_or(|t| now.since(t) >= interval_ms)
    }

    /// Drop target, route and steering point.
    pub fn clear_navigation(&mut self) {
        self.target = None;
        self.path.clear();
        self.dynamic_waypoint = None;
    }

    /// The point to walk toward this tick: steering point, then next
    /// waypoint, then the target itself.
    #[inline]
    pub fn next_point(&self) -> Option<Point> {
        self.dynamic_waypoint
            .or_else(|| self.path.next())
            .or(self.target)
    }

    /// `true` if the fan is within `threshold` of its target.  A fan with no
    /// target is always "there".
    #[inline]
    pub fn is_near_target(&self, threshold: f32) -> bool {
        self.target
            .is_none_or(|t| within(self.position, t, threshold))
    }

    #[inline]
    pub fn last_plan(&self) -> Option<SimTime> {
        self.last_plan
    }

    /// The collision-relevant slice of this fan.
    #[inline]
    pub fn body(&self) -> Body {
        Body {
            id:       self.id,
            position: self.position,
            radius:   self.radius,
            state:    self.state,
        }
    }
}
