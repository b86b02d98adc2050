//! `QueueCoordinator<P>` — a set of parallel lines driven by one policy.

use log::{debug, info};

use fest_agent::{Agent, AgentStore};
use fest_core::{AgentId, LineId, MovementState, QueueConfig, SimTime};
use fest_spatial::{Navigator, PathPlanner};

use crate::engine::{
    check_processing_transition, process_entering, process_front_of_queue, update_queue_positions,
};
use crate::{
    CompletionAction, LineGeometry, QueueCompletionPolicy, QueueError, QueueLine, QueueResult,
};

/// Counters for one [`QueueCoordinator::update`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateStats {
    /// Ids dropped because their fan left the store.
    pub pruned:   usize,
    /// Approaching fans that joined a queue.
    pub promoted: usize,
    /// Fans that moved from the head of a queue to the service point.
    pub started:  usize,
    pub released: usize,
    pub returned: usize,
}

/// Owns the lines of one service (security, food, …) and drives them each
/// tick with the shared engine operations and the policy `P`.
///
/// # Type parameter
///
/// `P` decides line choice, service duration and what release means.  Swap
/// it at compile time for another service with no runtime overhead.
pub struct QueueCoordinator<P: QueueCompletionPolicy> {
    lines:     Vec<QueueLine>,
    policy:    P,
    threshold: f32,
}

impl<P: QueueCompletionPolicy> QueueCoordinator<P> {
    /// One line per geometry, numbered in order.
    pub fn new(policy: P, geometries: impl IntoIterator<Item = LineGeometry>, config: &QueueConfig) -> Self {
        let lines = geometries
            .into_iter()
            .enumerate()
            .map(|(i, g)| QueueLine::new(LineId(i as u16), g))
            .collect();
        Self {
            lines,
            policy,
            threshold: config.arrival_threshold,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn lines(&self) -> &[QueueLine] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> QueueResult<&QueueLine> {
        self.lines.get(id.index()).ok_or(QueueError::UnknownLine(id))
    }

    pub fn line_mut(&mut self, id: LineId) -> QueueResult<&mut QueueLine> {
        self.lines.get_mut(id.index()).ok_or(QueueError::UnknownLine(id))
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Move a line, keeping its members.  Used after a venue resize.
    pub fn set_geometry(&mut self, id: LineId, geometry: LineGeometry) -> QueueResult<()> {
        self.line_mut(id)?.geometry = geometry;
        Ok(())
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.lines.iter().any(|l| l.contains(id))
    }

    /// The line `id` belongs to, if any.
    pub fn line_of(&self, id: AgentId) -> Option<LineId> {
        self.lines.iter().find(|l| l.contains(id)).map(|l| l.id)
    }

    /// Every fan this coordinator is responsible for, line by line.
    pub fn all_agents(&self) -> Vec<AgentId> {
        self.lines.iter().flat_map(QueueLine::members).collect()
    }

    pub fn total_count(&self) -> usize {
        self.lines.iter().map(QueueLine::occupancy).sum()
    }

    // ── Admission / removal ───────────────────────────────────────────────

    /// Admit `id`: the policy picks a line and the fan starts walking to its
    /// back.  Returns the slot index it was sent to.
    ///
    /// # Errors
    ///
    /// `AlreadyQueued` if the fan is anywhere in this coordinator (nothing
    /// changes), `AgentNotFound` if it is not in the store, `NoLines` if the
    /// coordinator has no lines.
    pub fn add_to_queue<N: PathPlanner>(
        &mut self,
        agents: &mut AgentStore,
        id:     AgentId,
        nav:    &Navigator<N>,
        now:    SimTime,
    ) -> QueueResult<usize> {
        if self.lines.is_empty() {
            return Err(QueueError::NoLines);
        }
        if self.contains(id) {
            return Err(QueueError::AlreadyQueued(id));
        }
        let agent = agents.get_mut(id).ok_or(QueueError::AgentNotFound(id))?;
        let line_id = self.policy.choose_line(&self.lines, agent)?;
        let line = self
            .lines
            .get_mut(line_id.index())
            .ok_or(QueueError::UnknownLine(line_id))?;

        self.policy.on_admit(agent);
        let index = join_back(line, agent, MovementState::ApproachingQueue, nav, now);
        debug!("{} admitted {id} to line {line_id} at slot {index}", self.policy.name());
        Ok(index)
    }

    /// Forget `id` (e.g. the fan left the festival).  Returns `true` if it
    /// was tracked.  The fan record itself is not touched.
    pub fn remove_from_queue(&mut self, id: AgentId) -> bool {
        let mut removed = false;
        for line in &mut self.lines {
            removed |= line.remove(id);
        }
        removed
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// One tick of admission, promotion, service and release for every line.
    pub fn update<N: PathPlanner>(
        &mut self,
        now:    SimTime,
        agents: &mut AgentStore,
        nav:    &Navigator<N>,
    ) -> UpdateStats {
        let mut stats = UpdateStats::default();
        let states = self.policy.states();
        let threshold = self.threshold;
        let Self { lines, policy, .. } = self;

        for line in lines.iter_mut() {
            let pruned = prune(line, agents);
            if pruned > 0 {
                debug!("{} line {}: pruned {pruned} departed fans", policy.name(), line.id);
                stats.pruned += pruned;
            }

            let promoted = process_entering(line, agents, &states, threshold);
            stats.promoted += promoted;

            update_queue_positions(line, agents, &states, nav, promoted > 0, now, threshold);

            let was_free = line.processing.is_none();
            let occupant = process_front_of_queue(
                line, agents, &states, nav, now, threshold,
                |agent, now| policy.on_start_processing(agent, now),
            );
            if was_free && occupant.is_some() {
                stats.started += 1;
            }

            let Some(id) = line.processing else {
                continue;
            };
            let Some(agent) = agents.get_mut(id) else {
                continue;
            };
            // Timed from leaving the head: an overdue fan completes while
            // still walking to the service point.
            check_processing_transition(agent, &states, threshold);
            if agent.state != states.processing && agent.state != states.advancing {
                continue;
            }

            let started = *agent.wait_start.get_or_insert(now);
            let completion = policy.check_processing_complete(agent, now, started);
            if !completion.completed {
                continue;
            }

            line.processing = None;
            agent.wait_start = None;
            match completion.action {
                CompletionAction::Release => {
                    agent.queue_position = None;
                    match policy.on_release(agent, line) {
                        Some(exit) => agent.set_target_forced(exit, nav, now),
                        None => agent.clear_navigation(),
                    }
                    stats.released += 1;
                    info!("{} line {}: released {id} after {}ms", policy.name(), line.id, now.since(started));
                }
                CompletionAction::ReturnToQueue => {
                    policy.on_return(agent);
                    let index = join_back(line, agent, states.returning, nav, now);
                    stats.returned += 1;
                    info!("{} line {}: sent {id} back to slot {index}", policy.name(), line.id);
                }
            }
        }
        stats
    }
}

/// Append `agent` to the approaching list of `line` and send it to the first
/// free slot.  Returns that slot index.
fn join_back<N: PathPlanner>(
    line:  &mut QueueLine,
    agent: &mut Agent,
    state: MovementState,
    nav:   &Navigator<N>,
    now:   SimTime,
) -> usize {
    let index = line.back_index();
    line.approaching.push(agent.id);
    agent.state = state;
    agent.wait_start = None;
    agent.queue_position = Some(index);
    agent.set_target_forced(line.geometry.slot(index), nav, now);
    index
}

/// Drop ids whose fan is no longer in the store, including a dangling slot
/// occupant.  Returns how many were dropped.
fn prune(line: &mut QueueLine, agents: &AgentStore) -> usize {
    let before = line.occupancy();
    line.queue.retain(|&id| agents.contains(id));
    line.approaching.retain(|&id| agents.contains(id));
    if line.processing.is_some_and(|id| !agents.contains(id)) {
        line.processing = None;
    }
    before - line.occupancy()
}
