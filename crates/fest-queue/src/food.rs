//! Food stalls: one line per stall, fans pick the stall that is cheapest
//! to reach counting the people already there.

use fest_agent::Agent;
use fest_core::{FestivalConfig, FoodConfig, LineId, MovementState, Point, SimTime};
use fest_spatial::{ObstacleField, ObstacleKind};

use crate::policy::nearest_line;
use crate::{Completion, LineGeometry, QueueCompletionPolicy, QueueCoordinator, QueueLine, QueueResult};

pub type FoodCoordinator = QueueCoordinator<FoodPolicy>;

pub struct FoodPolicy {
    config: FoodConfig,
}

impl FoodPolicy {
    pub fn new(config: &FoodConfig) -> Self {
        Self { config: config.clone() }
    }

    /// A coordinator with one line per stall in `field`.
    pub fn coordinator(field: &ObstacleField, config: &FestivalConfig) -> FoodCoordinator {
        QueueCoordinator::new(
            Self::new(&config.food),
            line_geometry(field, &config.food),
            &config.queue,
        )
    }
}

/// Lines for every food stall in `field`, in field order.  Fans are served
/// just below the counter and queue downward from there.
pub fn line_geometry(field: &ObstacleField, config: &FoodConfig) -> Vec<LineGeometry> {
    field
        .of_kind(ObstacleKind::FoodStall)
        .map(|stall| {
            let serve = Point::new(stall.center().x, stall.bottom() + config.service_gap);
            LineGeometry {
                front:            Point::new(serve.x, serve.y + config.spacing),
                direction:        Point::new(0.0, 1.0),
                spacing:          config.spacing,
                processing_point: serve,
                exit:             None,
            }
        })
        .collect()
}

impl QueueCompletionPolicy for FoodPolicy {
    fn name(&self) -> &'static str {
        "food"
    }

    /// Minimises `distance + occupancy × line_load_penalty`.
    fn choose_line(&mut self, lines: &[QueueLine], agent: &Agent) -> QueueResult<LineId> {
        let penalty = self.config.line_load_penalty;
        nearest_line(lines, agent.position, |l| l.occupancy() as f32 * penalty)
    }

    fn check_processing_complete(&self, _agent: &Agent, now: SimTime, started: SimTime) -> Completion {
        if now.since(started) >= self.config.service_ms {
            Completion::release()
        } else {
            Completion::PENDING
        }
    }

    fn on_release(&mut self, agent: &mut Agent, _line: &QueueLine) -> Option<Point> {
        agent.hunger = (agent.hunger - self.config.hunger_reduction).max(0.0);
        agent.state = MovementState::Idle;
        None
    }
}
