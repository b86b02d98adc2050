//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically non-decreasing millisecond counter, `SimTime`.
//! The driving loop feeds real frame deltas into `SimClock::advance`, which
//! scales them by the user-selected speed multiplier:
//!
//!   sim_delta_ms = round(real_delta_ms * speed_multiplier)
//!
//! Nothing in the core reads a wall clock.  Processing durations and replan
//! throttles are plain comparisons against `SimTime`.

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp in milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// The timestamp `ms` milliseconds before `self`, saturating at zero.
    #[inline]
    pub fn earlier_by(self, ms: u64) -> SimTime {
        SimTime(self.0.saturating_sub(ms))
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Scaled simulation clock.  Cheap to copy; holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current simulation time.
    pub now: SimTime,
    /// Real-to-simulated time ratio.  `1.0` is real time; negative values are
    /// treated as `0.0` (paused).
    pub speed_multiplier: f32,
}

impl SimClock {
    pub fn new(speed_multiplier: f32) -> Self {
        Self {
            now: SimTime::ZERO,
            speed_multiplier,
        }
    }

    /// Advance by `real_ms` real milliseconds and return the simulated delta.
    pub fn advance(&mut self, real_ms: u64) -> u64 {
        let scale = self.speed_multiplier.max(0.0) as f64;
        let delta = (real_ms as f64 * scale).round() as u64;
        self.now = self.now + delta;
        delta
    }

    pub fn set_speed(&mut self, speed_multiplier: f32) {
        self.speed_multiplier = speed_multiplier;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.now.0 / 1_000;
        write!(f, "{} ({}m{:02}s @ {:.1}x)", self.now, secs / 60, secs % 60, self.speed_multiplier)
    }
}
