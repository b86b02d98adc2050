//! Simulation observer trait for progress reporting and rendering hooks.

use fest_agent::AgentStore;
use fest_core::SimTime;

use crate::TickReport;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — release counter
///
/// ```rust
/// use fest_core::SimTime;
/// use fest_sim::{SimObserver, TickReport};
///
/// #[derive(Default)]
/// struct Releases(usize);
///
/// impl SimObserver for Releases {
///     fn on_tick_end(&mut self, _now: SimTime, report: &TickReport) {
///         self.0 += report.security.released + report.food.released;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once the clock has advanced, before any coordinator runs.
    /// Not called while paused.
    fn on_tick_start(&mut self, _now: SimTime) {}

    /// Called after movement, with the counters of this tick.
    fn on_tick_end(&mut self, _now: SimTime, _report: &TickReport) {}

    /// Called after a tick with read-only access to every fan, for drawing.
    fn on_frame(&mut self, _now: SimTime, _agents: &AgentStore) {}

    /// Called after [`Sim::resize`][crate::Sim::resize] has laid the venue out
    /// again.
    fn on_resize(&mut self, _width: f32, _height: f32) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
