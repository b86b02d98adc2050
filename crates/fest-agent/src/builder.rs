//! Fluent builder for a single fan.
//!
//! # Usage
//!
//! ```rust
//! use fest_agent::{AgentBuilder, AgentStore};
//! use fest_core::{AgentConfig, MovementState, Point};
//!
//! let mut store = AgentStore::new();
//! let id = store.spawn(
//!     AgentBuilder::from_config(&AgentConfig::default(), Point::new(500.0, 760.0))
//!         .hunger(0.8)
//!         .state(MovementState::Moving),
//! );
//! assert_eq!(store.get(id).map(|a| a.hunger), Some(0.8));
//! ```

use fest_core::{AgentConfig, AgentId, MovementState, Point};

use crate::Agent;

/// Fluent builder for [`Agent`].  Ids are assigned by
/// [`AgentStore::spawn`](crate::AgentStore::spawn).
#[derive(Clone, Debug)]
pub struct AgentBuilder {
    position: Point,
    radius:   f32,
    speed:    f32,
    state:    MovementState,
    hunger:   f32,
}

impl AgentBuilder {
    /// A fan at `position` with the default body and speed.
    pub fn new(position: Point) -> Self {
        Self::from_config(&AgentConfig::default(), position)
    }

    pub fn from_config(config: &AgentConfig, position: Point) -> Self {
        Self {
            position,
            radius: config.radius,
            speed:  config.speed,
            state:  MovementState::Idle,
            hunger: 0.0,
        }
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn state(mut self, state: MovementState) -> Self {
        self.state = state;
        self
    }

    /// Clamped to `0.0..=1.0`.
    pub fn hunger(mut self, hunger: f32) -> Self {
        self.hunger = hunger.clamp(0.0, 1.0);
        self
    }

    pub fn build(self, id: AgentId) -> Agent {
        let mut agent = Agent::new(id, self.position, self.radius, self.speed);
        agent.state = self.state;
        agent.hunger = self.hunger;
        agent
    }
}
