//! `Navigator` — everything a fan needs to find its way, in one borrow.
//!
//! Coordinators and the movement engine receive `&Navigator` every tick
//! instead of storing a reference to the obstacle field, so a resize that
//! rebuilds the field can never leave a stale copy behind.

use fest_core::{AgentConfig, AvoidanceConfig, FestivalConfig, PathConfig, Point};

use crate::{avoid, Body, CornerPlanner, ObstacleField, PathPlanner, PlanParams};

/// Wraps a [`PathPlanner`] and the [`ObstacleField`] it plans against.
///
/// # Type parameter
///
/// `P` defaults to [`CornerPlanner`].  Swap it at compile time for another
/// strategy with no runtime overhead.
pub struct Navigator<P: PathPlanner = CornerPlanner> {
    pub field:     ObstacleField,
    pub planner:   P,
    pub agent:     AgentConfig,
    pub path:      PathConfig,
    pub avoidance: AvoidanceConfig,
}

impl Navigator<CornerPlanner> {
    /// The standard venue laid out at `width × height`.
    pub fn new(config: &FestivalConfig, width: f32, height: f32) -> Self {
        Self::with_planner(
            CornerPlanner,
            ObstacleField::new(config.venue.clone(), width, height),
            config,
        )
    }
}

impl<P: PathPlanner> Navigator<P> {
    pub fn with_planner(planner: P, field: ObstacleField, config: &FestivalConfig) -> Self {
        Self {
            field,
            planner,
            agent:     config.agent.clone(),
            path:      config.path.clone(),
            avoidance: config.avoidance.clone(),
        }
    }

    #[inline]
    pub fn params(&self) -> PlanParams {
        PlanParams::from_config(&self.agent, &self.path)
    }

    /// Plan `start → target` for a fan of the configured radius.
    pub fn plan(&self, start: Point, target: Point) -> Vec<Point> {
        self.planner.plan(start, target, Some(&self.field), &self.params())
    }

    /// One steering waypoint for `body` heading to `next`, if needed.
    pub fn avoid(&self, body: &Body, nearby: &[Body], next: Point) -> Option<Point> {
        avoid(
            body,
            nearby,
            next,
            Some(&self.field),
            &self.avoidance,
            self.agent.personal_space,
        )
    }

    /// Rebuild the field for a new venue size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.rebuild(width, height);
    }
}
