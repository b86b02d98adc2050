//! Per-tick local avoidance between moving fans.
//!
//! The static planner only reruns on a timer, so two fans on crossing paths
//! would walk through each other between replans.  [`avoid`] is the cheap
//! per-tick fix: at most one rotated projection and one collision check.

use fest_core::geometry::{distance, normalize, rotate, translate};
use fest_core::{AgentId, AvoidanceConfig, MovementState, Point};

use crate::ObstacleField;

/// The slice of a fan that steering needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    pub id:       AgentId,
    pub position: Point,
    pub radius:   f32,
    pub state:    MovementState,
}

/// A short-lived waypoint that steers `agent` around the first conflicting
/// peer on its way to `next`, or `None` if no steering is needed or the
/// steered point would hit an obstacle.
///
/// A peer conflicts when it is ahead (`dot > forward_dot`) within
/// `forward_multiplier × personal_space`, or anywhere within
/// `near_multiplier × personal_space`.  The first conflict wins.  A peer on
/// the left (positive cross product) sends the fan right, and vice versa.
pub fn avoid(
    agent:          &Body,
    nearby:         &[Body],
    next:           Point,
    field:          Option<&ObstacleField>,
    config:         &AvoidanceConfig,
    personal_space: f32,
) -> Option<Point> {
    if distance(agent.position, next) < config.arrival_epsilon {
        return None;
    }
    let heading = normalize(next - agent.position);

    let forward_reach = config.forward_multiplier * personal_space;
    let near_reach = config.near_multiplier * personal_space;

    let mut turn: Option<f32> = None;
    for peer in nearby {
        if peer.id == agent.id {
            continue;
        }
        let offset = peer.position - agent.position;
        let dist = offset.length();
        if dist > config.detection_radius {
            continue;
        }
        let offset_dir = normalize(offset);
        let alignment = offset_dir.dot(heading);
        let ahead = alignment > config.forward_dot && dist < forward_reach;
        if ahead || dist < near_reach {
            let side = if heading.cross(offset_dir) > 0.0 { -1.0 } else { 1.0 };
            turn = Some(side * config.angle_deg.to_radians());
            break;
        }
    }

    let angle = turn?;
    let candidate = translate(agent.position, rotate(heading, angle), config.step_distance);
    match field {
        Some(f) if f.check_collision(candidate, agent.radius, agent.state, personal_space) => None,
        _ => Some(candidate),
    }
}
