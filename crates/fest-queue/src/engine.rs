//! Per-line queue operations shared by every coordinator.
//!
//! These are free functions over one [`QueueLine`] and the [`AgentStore`].
//! A coordinator calls them in a fixed order each tick:
//!
//! ```text
//! process_entering → update_queue_positions → process_front_of_queue
//!                  → check_processing_transition → completion
//! ```
//!
//! so a fan is never both approaching and being served in the same
//! observable state.

use log::trace;

use fest_agent::{Agent, AgentStore};
use fest_core::geometry::within;
use fest_core::{AgentId, MovementState, Point, SimTime};
use fest_spatial::{Navigator, PathPlanner};

use crate::QueueLine;

// ── QueueStates ───────────────────────────────────────────────────────────────

/// Which [`MovementState`] each queue phase is written as.
///
/// Security lines use the security spellings so the checkpoint obstacle stays
/// passable for everyone in them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueueStates {
    pub waiting:    MovementState,
    pub advancing:  MovementState,
    pub processing: MovementState,
    /// A fan sent round again after service.
    pub returning:  MovementState,
}

impl QueueStates {
    pub const GENERIC: QueueStates = QueueStates {
        waiting:    MovementState::InQueueWaiting,
        advancing:  MovementState::InQueueAdvancing,
        processing: MovementState::Processing,
        returning:  MovementState::ReturningToQueue,
    };

    pub const SECURITY: QueueStates = QueueStates {
        waiting:    MovementState::InQueue,
        advancing:  MovementState::InQueue,
        processing: MovementState::BeingChecked,
        returning:  MovementState::ApproachingQueue,
    };
}

impl Default for QueueStates {
    fn default() -> Self {
        Self::GENERIC
    }
}

// ── Operations ────────────────────────────────────────────────────────────────

/// Promote approaching fans that reached their target to the back of the
/// queue, in `waiting` state.  Fans still walking stay where they are.
///
/// Returns how many were promoted; non-zero means slot targets must be
/// recomputed.
pub fn process_entering(
    line:      &mut QueueLine,
    agents:    &mut AgentStore,
    states:    &QueueStates,
    threshold: f32,
) -> usize {
    let mut promoted = 0;
    let line_id = line.id;
    let queue = &mut line.queue;
    line.approaching.retain(|&id| {
        let Some(agent) = agents.get_mut(id) else {
            return true;
        };
        if !agent.is_near_target(threshold) {
            return true;
        }
        agent.state = states.waiting;
        queue.push_back(id);
        promoted += 1;
        trace!("{id} joined line {line_id} at {}", queue.len() - 1);
        false
    });
    promoted
}

/// Move the head of the queue into the empty processing slot once it stands
/// at the front.
///
/// The fan is set `advancing`, sent to the processing point, and handed to
/// `on_start` (the coordinator's hook for stamping the start time).  A no-op
/// while the slot is occupied or the queue is empty.  Returns the slot
/// occupant after the call.
pub fn process_front_of_queue<P, F>(
    line:      &mut QueueLine,
    agents:    &mut AgentStore,
    states:    &QueueStates,
    nav:       &Navigator<P>,
    now:       SimTime,
    threshold: f32,
    on_start:  F,
) -> Option<AgentId>
where
    P: PathPlanner,
    F: FnOnce(&mut Agent, SimTime),
{
    if line.processing.is_some() {
        return line.processing;
    }
    let &head = line.queue.front()?;
    let agent = agents.get_mut(head)?;
    if !within(agent.position, line.geometry.slot(0), threshold) {
        return None;
    }

    line.queue.pop_front();
    agent.state = states.advancing;
    agent.set_target_forced(line.geometry.processing_point, nav, now);
    on_start(agent, now);
    line.processing = Some(head);
    trace!("{head} stepped up to the service point of line {}", line.id);
    line.processing
}

/// Flip an advancing slot occupant to `processing` once it reaches the
/// processing point.  Clears its slot index and any route: it now stands
/// still until released.
pub fn check_processing_transition(agent: &mut Agent, states: &QueueStates, threshold: f32) -> bool {
    if agent.state != states.advancing || !agent.is_near_target(threshold) {
        return false;
    }
    agent.state = states.processing;
    agent.queue_position = None;
    agent.path.clear();
    agent.dynamic_waypoint = None;
    true
}

/// Hand every queue member slot `0..n` and every approaching fan slot
/// `n..`, in order.
///
/// A queue member already within `threshold` of its slot is left waiting
/// and not retargeted; otherwise it is retargeted and set `advancing`.
/// Approaching fans keep their state.  `force` bypasses the replan throttle.
pub fn update_queue_positions<P: PathPlanner>(
    line:      &QueueLine,
    agents:    &mut AgentStore,
    states:    &QueueStates,
    nav:       &Navigator<P>,
    force:     bool,
    now:       SimTime,
    threshold: f32,
) {
    let geometry = &line.geometry;
    for (index, &id) in line.queue.iter().enumerate() {
        let Some(agent) = agents.get_mut(id) else {
            continue;
        };
        let slot = geometry.slot(index);
        agent.queue_position = Some(index);
        if within(agent.position, slot, threshold) {
            agent.state = states.waiting;
        } else {
            retarget(agent, slot, nav, force, now);
            agent.state = states.advancing;
        }
    }

    let offset = line.queue.len();
    for (i, &id) in line.approaching.iter().enumerate() {
        let Some(agent) = agents.get_mut(id) else {
            continue;
        };
        let index = offset + i;
        agent.queue_position = Some(index);
        let slot = geometry.slot(index);
        if !within(agent.position, slot, threshold) {
            retarget(agent, slot, nav, force, now);
        }
    }
}

fn retarget<P: PathPlanner>(agent: &mut Agent, slot: Point, nav: &Navigator<P>, force: bool, now: SimTime) {
    if force {
        agent.set_target_forced(slot, nav, now);
    } else {
        agent.set_target(slot, nav, now);
    }
}
