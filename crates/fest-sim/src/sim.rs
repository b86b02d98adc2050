//! The `Sim` struct and its tick loop.

use log::{info, trace};

use fest_agent::{Agent, AgentBuilder, AgentStore};
use fest_core::{AgentId, FestivalConfig, LineId, MovementState, Point, SimClock, SimTime};
use fest_mobility::{MovementEngine, StepStats};
use fest_queue::{
    food, security, FoodCoordinator, LineGeometry, QueueCompletionPolicy, QueueCoordinator,
    SecurityCoordinator, UpdateStats,
};
use fest_spatial::{CornerPlanner, Navigator, PathPlanner};

use crate::{SimError, SimObserver, SimResult};

/// Counters for one [`Sim::step`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Simulated milliseconds this tick covered.  `0` while paused.
    pub dt_ms:    u64,
    pub security: UpdateStats,
    pub food:     UpdateStats,
    pub movement: StepStats,
}

/// The reference driver.
///
/// `Sim<P>` owns every piece of the core and runs them in the order given in
/// the crate docs.  Everything is public so a renderer or test can read (or
/// poke) state between ticks.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: PathPlanner = CornerPlanner> {
    pub config: FestivalConfig,

    /// Scaled simulation clock.
    pub clock: SimClock,

    pub agents: AgentStore,

    /// Obstacle field, planner and the movement tunables.
    pub navigator: Navigator<P>,

    /// One line per checkpoint booth.
    pub security: SecurityCoordinator,

    /// One line per food stall.
    pub food: FoodCoordinator,

    pub movement: MovementEngine,
}

impl<P: PathPlanner> Sim<P> {
    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance by `real_ms` real milliseconds.
    ///
    /// A paused clock (speed multiplier ≤ 0) returns an empty report and
    /// calls no observer hooks.
    pub fn step<O: SimObserver>(&mut self, real_ms: u64, observer: &mut O) -> TickReport {
        let dt_ms = self.clock.advance(real_ms);
        if dt_ms == 0 {
            return TickReport::default();
        }
        let now = self.clock.now;
        observer.on_tick_start(now);

        let security = self.security.update(now, &mut self.agents, &self.navigator);
        let food = self.food.update(now, &mut self.agents, &self.navigator);
        let movement = self.movement.step(&mut self.agents, &self.navigator, now, dt_ms);

        let report = TickReport { dt_ms, security, food, movement };
        trace!("tick {now}: {report:?}");
        observer.on_tick_end(now, &report);
        observer.on_frame(now, &self.agents);
        report
    }

    /// Run `n` ticks of `real_ms` each.
    pub fn run_steps<O: SimObserver>(&mut self, n: usize, real_ms: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(real_ms, observer);
        }
    }

    // ── Fans ──────────────────────────────────────────────────────────────

    pub fn spawn_agent(&mut self, builder: AgentBuilder) -> AgentId {
        self.agents.spawn(builder)
    }

    /// Spawn an idle fan with the configured body at `position`.
    pub fn spawn_at(&mut self, position: Point) -> AgentId {
        self.spawn_agent(AgentBuilder::from_config(&self.config.agent, position))
    }

    /// Remove a fan from the store and from every line it was in.
    pub fn remove_agent(&mut self, id: AgentId) -> Option<Agent> {
        self.security.remove_from_queue(id);
        self.food.remove_from_queue(id);
        self.agents.remove(id)
    }

    /// Send a fan walking to `target`.  An idle fan becomes `Moving`.
    /// Returns `true` if a new route was planned.
    pub fn send_to(&mut self, id: AgentId, target: Point) -> SimResult<bool> {
        let now = self.clock.now;
        let agent = self.agents.try_get_mut(id)?;
        if agent.state == MovementState::Idle {
            agent.state = MovementState::Moving;
        }
        Ok(agent.set_target(target, &self.navigator, now))
    }

    /// Admit a fan to the shortest security line.  Returns its slot index.
    pub fn join_security(&mut self, id: AgentId) -> SimResult<usize> {
        let now = self.clock.now;
        Ok(self.security.add_to_queue(&mut self.agents, id, &self.navigator, now)?)
    }

    /// Admit a fan to the cheapest food line.  Returns its slot index.
    pub fn join_food(&mut self, id: AgentId) -> SimResult<usize> {
        let now = self.clock.now;
        Ok(self.food.add_to_queue(&mut self.agents, id, &self.navigator, now)?)
    }

    // ── Venue ─────────────────────────────────────────────────────────────

    /// Lay the venue out again at `width × height`.
    ///
    /// Obstacles and line geometry are recomputed, line membership is kept,
    /// and free-roaming fans replan at once.  Queued fans are sent to their
    /// moved slots by the next coordinator update.
    pub fn resize<O: SimObserver>(&mut self, width: f32, height: f32, observer: &mut O) -> SimResult<()> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(SimError::Config(format!("venue size {width}x{height} must be positive")));
        }
        let mut field = self.navigator.field.clone();
        field.rebuild(width, height);
        let security_lines = security::line_geometry(&field, &self.config.security);
        let food_lines = food::line_geometry(&field, &self.config.food);
        check_layout(&self.security, &security_lines)?;
        check_layout(&self.food, &food_lines)?;

        self.navigator.field = field;
        relayout(&mut self.security, security_lines)?;
        relayout(&mut self.food, food_lines)?;

        let now = self.clock.now;
        let mut replanned = 0;
        for agent in self.agents.iter_mut() {
            if !agent.state.is_queued() && agent.replan(&self.navigator, now) {
                replanned += 1;
            }
        }
        info!("resized to {width}x{height}, {replanned} fans replanned");
        observer.on_resize(width, height);
        Ok(())
    }
}

/// The new layout must have one geometry per existing line.
fn check_layout<Q: QueueCompletionPolicy>(
    coordinator: &QueueCoordinator<Q>,
    geometries:  &[LineGeometry],
) -> SimResult<()> {
    if geometries.len() != coordinator.lines().len() {
        return Err(SimError::Config(format!(
            "{} layout has {} lines, coordinator has {}",
            coordinator.policy().name(),
            geometries.len(),
            coordinator.lines().len()
        )));
    }
    Ok(())
}

/// Move every line of `coordinator` onto `geometries`, in order.
fn relayout<Q: QueueCompletionPolicy>(
    coordinator: &mut QueueCoordinator<Q>,
    geometries:  Vec<LineGeometry>,
) -> SimResult<()> {
    check_layout(coordinator, &geometries)?;
    for (i, g) in geometries.into_iter().enumerate() {
        coordinator.set_geometry(LineId(i as u16), g)?;
    }
    Ok(())
}
