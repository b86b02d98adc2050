//! Fluent builder for constructing a [`Sim`].

use log::info;

use fest_agent::AgentStore;
use fest_core::{FestivalConfig, SimClock};
use fest_mobility::MovementEngine;
use fest_queue::{FoodPolicy, SecurityPolicy};
use fest_spatial::{CornerPlanner, Navigator, ObstacleField, PathPlanner};

use crate::{Sim, SimError, SimResult};

pub const DEFAULT_WIDTH: f32 = 1000.0;
pub const DEFAULT_HEIGHT: f32 = 800.0;

/// Fluent builder for [`Sim<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                   |
/// |------------------|-------------------------------------------|
/// | `.size(w, h)`    | `1000 × 800`                              |
/// | `.planner(p)`    | [`CornerPlanner`]                         |
/// | `.field(f)`      | `config.venue` laid out at the given size |
pub struct SimBuilder<P: PathPlanner = CornerPlanner> {
    config:  FestivalConfig,
    width:   f32,
    height:  f32,
    planner: P,
    field:   Option<ObstacleField>,
}

impl SimBuilder<CornerPlanner> {
    pub fn new(config: FestivalConfig) -> Self {
        Self {
            config,
            width:   DEFAULT_WIDTH,
            height:  DEFAULT_HEIGHT,
            planner: CornerPlanner,
            field:   None,
        }
    }
}

impl<P: PathPlanner> SimBuilder<P> {
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Swap the static planner.
    pub fn planner<Q: PathPlanner>(self, planner: Q) -> SimBuilder<Q> {
        SimBuilder {
            config:  self.config,
            width:   self.width,
            height:  self.height,
            planner,
            field:   self.field,
        }
    }

    /// Use a hand-built obstacle field instead of the configured layout.
    pub fn field(mut self, field: ObstacleField) -> Self {
        self.field = Some(field);
        self
    }

    /// Validate the configuration, lay out the venue and return a ready
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;
        let (w, h) = (self.width, self.height);
        if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
            return Err(SimError::Config(format!("venue size {w}x{h} must be positive")));
        }

        let field = self
            .field
            .unwrap_or_else(|| ObstacleField::new(self.config.venue.clone(), w, h));
        let security = SecurityPolicy::coordinator(&field, &self.config);
        let food = FoodPolicy::coordinator(&field, &self.config);
        let navigator = Navigator::with_planner(self.planner, field, &self.config);

        info!(
            "festival ready at {w}x{h}: {} security lines, {} food lines",
            security.lines().len(),
            food.lines().len()
        );

        Ok(Sim {
            clock: SimClock::new(self.config.speed_multiplier),
            config: self.config,
            agents: AgentStore::new(),
            navigator,
            security,
            food,
            movement: MovementEngine::new(),
        })
    }
}
