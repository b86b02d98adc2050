//! `MovementEngine` — the per-tick movement update for every fan.

use log::trace;

use fest_agent::{Agent, AgentStore};
use fest_core::geometry::{distance, normalize, translate, within};
use fest_core::{AgentId, Point, SimTime};
use fest_spatial::{Body, Navigator, PathPlanner};

use crate::NeighborIndex;

/// Counters for one [`MovementEngine::step`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Fans whose route was replanned on the timer.
    pub replanned: usize,
    /// Fans given an avoidance waypoint this tick.
    pub steered:   usize,
    /// Fans whose position changed.
    pub moved:     usize,
}

/// Moves fans.  Holds the neighbour index from the last step so callers
/// (renderers, observers) can reuse it.
#[derive(Default)]
pub struct MovementEngine {
    neighbors: NeighborIndex,
}

/// One steering query: who is asking, their body, and the route point they
/// are heading to.
type SteerRequest = (AgentId, Body, Point);

impl MovementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The index built during the most recent [`step`](Self::step).
    pub fn neighbors(&self) -> &NeighborIndex {
        &self.neighbors
    }

    /// Advance every fan by `dt_ms` simulated milliseconds.  See the crate
    /// docs for the phase order.
    pub fn step<P: PathPlanner>(
        &mut self,
        agents: &mut AgentStore,
        nav:    &Navigator<P>,
        now:    SimTime,
        dt_ms:  u64,
    ) -> StepStats {
        let mut stats = StepStats::default();

        // ── ① Replan on the timer ─────────────────────────────────────────
        let interval = nav.path.replan_interval_ms;
        for agent in agents.iter_mut() {
            agent.dynamic_waypoint = None;
            if !agent.state.is_queued() && agent.needs_replan(now, interval) {
                agent.replan(nav, now);
                stats.replanned += 1;
            }
        }

        // ── ② Steer free-roaming fans around each other ───────────────────
        self.neighbors = NeighborIndex::build(agents.iter().map(Agent::body));
        let requests: Vec<SteerRequest> = agents
            .iter()
            .filter(|a| !a.state.is_queued())
            .filter_map(|a| a.path.next().or(a.target).map(|next| (a.id, a.body(), next)))
            .collect();

        for (id, waypoint) in compute_steering(&self.neighbors, nav, &requests) {
            if let (Some(agent), Some(p)) = (agents.get_mut(id), waypoint) {
                agent.dynamic_waypoint = Some(p);
                stats.steered += 1;
            }
        }

        // ── ③④ Step and push out (ascending AgentId) ─────────────────────
        let reach = nav.path.waypoint_reach;
        for agent in agents.iter_mut() {
            if move_agent(agent, nav, dt_ms, reach) {
                stats.moved += 1;
            }
        }

        trace!(
            "movement at {now}: {} moved, {} steered, {} replanned",
            stats.moved, stats.steered, stats.replanned
        );
        stats
    }
}

/// Avoidance waypoints for every request, in request order.
///
/// Reads only the index snapshot and the navigator, so with the `parallel`
/// feature the queries run on Rayon.
fn compute_steering<P: PathPlanner>(
    index:    &NeighborIndex,
    nav:      &Navigator<P>,
    requests: &[SteerRequest],
) -> Vec<(AgentId, Option<Point>)> {
    let radius = nav.avoidance.detection_radius;
    let steer = |&(id, body, next): &SteerRequest| {
        let nearby = index.within(body.position, radius);
        (id, nav.avoid(&body, &nearby, next))
    };

    #[cfg(not(feature = "parallel"))]
    {
        requests.iter().map(steer).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        requests.par_iter().map(steer).collect()
    }
}

/// Walk `agent` up to `speed × dt` toward its next point, pop what it
/// reached, then resolve against the field.  Returns `true` if it moved.
fn move_agent<P: PathPlanner>(agent: &mut Agent, nav: &Navigator<P>, dt_ms: u64, reach: f32) -> bool {
    let Some(next) = agent.next_point() else {
        return false;
    };
    let before = agent.position;
    let budget = agent.speed.max(0.0) * dt_ms as f32 / 1_000.0;
    agent.position = if distance(before, next) <= budget {
        next
    } else {
        translate(before, normalize(next - before), budget)
    };

    pop_reached(agent, reach);
    agent.position = nav.field.resolve_collision(agent.position, agent.radius, agent.state);
    agent.position != before
}

/// Intermediate waypoints count as reached within `reach`; the final one
/// only on exact arrival, so fans end up precisely on their target.
fn pop_reached(agent: &mut Agent, reach: f32) {
    if agent
        .dynamic_waypoint
        .is_some_and(|p| within(agent.position, p, reach))
    {
        agent.dynamic_waypoint = None;
    }
    while agent.path.len() > 1
        && agent
            .path
            .next()
            .is_some_and(|p| within(agent.position, p, reach))
    {
        agent.path.advance();
    }
    if agent.path.len() == 1 && agent.path.next() == Some(agent.position) {
        agent.path.advance();
    }
}
