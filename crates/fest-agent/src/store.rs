//! `AgentStore` — every fan, addressable by `AgentId`.
//!
//! Slots are never reused: removing a fan leaves a hole, so a stale
//! `AgentId` held by a coordinator resolves to `None` instead of aliasing
//! a newer fan.  Coordinators rely on this to detect fans that left.

use fest_core::{AgentId, FestError, FestResult};
use fest_spatial::Body;

use crate::{Agent, AgentBuilder};

#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    slots: Vec<Option<Agent>>,
    live:  usize,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and insert a fan.  Ids are assigned in ascending order.
    pub fn spawn(&mut self, builder: AgentBuilder) -> AgentId {
        let id = AgentId(self.slots.len() as u32);
        self.slots.push(Some(builder.build(id)));
        self.live += 1;
        id
    }

    /// Take a fan out of the simulation.  `None` if it was already gone.
    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        let removed = self.slots.get_mut(id.index()).and_then(Option::take);
        if removed.is_some() {
            self.live -= 1;
        }
        removed
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    pub fn try_get(&self, id: AgentId) -> FestResult<&Agent> {
        self.get(id).ok_or(FestError::AgentNotFound(id))
    }

    pub fn try_get_mut(&mut self, id: AgentId) -> FestResult<&mut Agent> {
        self.get_mut(id).ok_or(FestError::AgentNotFound(id))
    }

    #[inline]
    pub fn contains(&self, id: AgentId) -> bool {
        self.get(id).is_some()
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    /// Live fans in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> + '_ {
        self.slots.iter_mut().flatten()
    }

    /// Ids of live fans in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.iter().map(|a| a.id)
    }

    /// Snapshot of every live fan's body, for neighbour queries.
    pub fn bodies(&self) -> Vec<Body> {
        self.iter().map(Agent::body).collect()
    }

    /// Number of live fans.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of ids handed out so far, removed fans included.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
