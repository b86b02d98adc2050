//! Security checkpoints: one line per checkpoint booth, extended checks for
//! a sampled share of fans.

use fest_agent::{Agent, SecurityClass};
use fest_core::{FestivalConfig, LineId, MovementState, Point, SecurityConfig, SimRng, SimTime};
use fest_spatial::{ObstacleField, ObstacleKind};

use crate::policy::nearest_line;
use crate::{
    Completion, LineGeometry, QueueCompletionPolicy, QueueCoordinator, QueueError, QueueLine,
    QueueResult, QueueStates,
};

/// Stream id that separates the classification RNG from other consumers of
/// the run seed.
const CLASSIFICATION_STREAM: u64 = 1;

pub type SecurityCoordinator = QueueCoordinator<SecurityPolicy>;

pub struct SecurityPolicy {
    config: SecurityConfig,
    rng:    SimRng,
}

impl SecurityPolicy {
    pub fn new(config: &SecurityConfig, seed: u64) -> Self {
        Self {
            config: config.clone(),
            rng:    SimRng::for_stream(seed, CLASSIFICATION_STREAM),
        }
    }

    /// A coordinator with one line per checkpoint in `field`.
    pub fn coordinator(field: &ObstacleField, config: &FestivalConfig) -> SecurityCoordinator {
        QueueCoordinator::new(
            Self::new(&config.security, config.seed),
            line_geometry(field, &config.security),
            &config.queue,
        )
    }

    fn required_ms(&self, class: SecurityClass) -> u64 {
        match class {
            SecurityClass::ExtendedOnce => self.config.enhanced_check_ms,
            SecurityClass::Unclassified | SecurityClass::Cleared => self.config.standard_check_ms,
        }
    }
}

/// Lines for every checkpoint in `field`, in field order.
///
/// Fans check at the booth centre, queue downward from just below it and
/// leave upward past the fence.
pub fn line_geometry(field: &ObstacleField, config: &SecurityConfig) -> Vec<LineGeometry> {
    field
        .of_kind(ObstacleKind::Security)
        .map(|booth| {
            let c = booth.center();
            LineGeometry {
                front:            Point::new(c.x, booth.bottom() + config.spacing),
                direction:        Point::new(0.0, 1.0),
                spacing:          config.spacing,
                processing_point: c,
                exit:             Some(Point::new(c.x, booth.y - config.exit_offset)),
            }
        })
        .collect()
}

impl QueueCompletionPolicy for SecurityPolicy {
    fn name(&self) -> &'static str {
        "security"
    }

    fn states(&self) -> QueueStates {
        QueueStates::SECURITY
    }

    /// Shortest line (in line plus walking to it); nearest front on ties.
    fn choose_line(&mut self, lines: &[QueueLine], agent: &Agent) -> QueueResult<LineId> {
        let shortest = lines.iter().map(QueueLine::count).min().ok_or(QueueError::NoLines)?;
        let shortest_lines = lines.iter().filter(|l| l.count() == shortest);
        nearest_line(shortest_lines, agent.position, |_| 0.0)
    }

    fn on_admit(&mut self, agent: &mut Agent) {
        if agent.security == SecurityClass::Unclassified {
            agent.security = if self.rng.chance(self.config.enhanced_check_probability) {
                SecurityClass::ExtendedOnce
            } else {
                SecurityClass::Cleared
            };
        }
    }

    fn check_processing_complete(&self, agent: &Agent, now: SimTime, started: SimTime) -> Completion {
        if now.since(started) < self.required_ms(agent.security) {
            return Completion::PENDING;
        }
        match agent.security {
            SecurityClass::ExtendedOnce => Completion::return_to_queue(),
            SecurityClass::Unclassified | SecurityClass::Cleared => Completion::release(),
        }
    }

    fn on_release(&mut self, agent: &mut Agent, line: &QueueLine) -> Option<Point> {
        agent.state = MovementState::PassedSecurity;
        line.geometry.exit
    }

    fn on_return(&mut self, agent: &mut Agent) {
        agent.security = SecurityClass::Cleared;
    }
}
