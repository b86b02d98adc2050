//! Simulation configuration.
//!
//! `FestivalConfig` is an immutable value built once by the application
//! (typically deserialised from JSON/TOML with the `serde` feature) and
//! passed by reference into constructors.  Nothing in the core mutates it.
//!
//! Venue geometry is expressed as fractions of the canvas so a resize only
//! needs a rebuild, not a new config.

use crate::{FestError, FestResult};

// ── Sections ──────────────────────────────────────────────────────────────────

/// Per-fan body and movement knobs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentConfig {
    /// Collision radius of a fan, world units.
    pub radius: f32,
    /// Preferred clearance to peers and food stalls, world units.
    pub personal_space: f32,
    /// Walking speed, world units per simulated second.
    pub speed: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            radius:         3.0,
            personal_space: 8.0,
            speed:          60.0,
        }
    }
}

/// Static path planning knobs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathConfig {
    /// Upper bound on waypoints per planned path, final target included.
    pub max_waypoints: usize,
    /// A waypoint counts as reached inside this distance.
    pub waypoint_reach: f32,
    /// Extra clearance added to obstacle corners beyond radius + buffer.
    pub corner_margin: f32,
    /// Minimum time between replans toward an unchanged target.
    pub replan_interval_ms: u64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            max_waypoints:      5,
            waypoint_reach:     5.0,
            corner_margin:      10.0,
            replan_interval_ms: 2_000,
        }
    }
}

/// Per-tick local steering between moving fans.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvoidanceConfig {
    /// Below this distance to the next point the fan is considered arrived.
    pub arrival_epsilon: f32,
    /// Peers farther than this are ignored.
    pub detection_radius: f32,
    /// Normalised dot product above which a peer counts as "ahead".
    pub forward_dot: f32,
    /// Peers ahead trigger within `forward_multiplier × personal_space`.
    pub forward_multiplier: f32,
    /// Peers in any direction trigger within `near_multiplier × personal_space`.
    pub near_multiplier: f32,
    /// Steering rotation applied to the travel direction, degrees.
    pub angle_deg: f32,
    /// Distance of the projected avoidance waypoint from the fan.
    pub step_distance: f32,
}

impl Default for AvoidanceConfig {
    fn default() -> Self {
        Self {
            arrival_epsilon:    5.0,
            detection_radius:   100.0,
            forward_dot:        0.5,
            forward_multiplier: 3.0,
            near_multiplier:    2.0,
            angle_deg:          30.0,
            step_distance:      20.0,
        }
    }
}

/// Knobs shared by every queue coordinator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueConfig {
    /// A fan is "at" its queue slot or processing point inside this distance.
    pub arrival_threshold: f32,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self { arrival_threshold: 5.0 }
    }
}

/// Security checkpoint lines.  One line per checkpoint in [`VenueLayout`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecurityConfig {
    /// Gap between consecutive fans in line.
    pub spacing: f32,
    pub standard_check_ms: u64,
    pub enhanced_check_ms: u64,
    /// Share of fans selected for an extended check (sent round once more).
    pub enhanced_check_probability: f64,
    /// How far past the checkpoint a cleared fan walks before roaming.
    pub exit_offset: f32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            spacing:                    8.0,
            standard_check_ms:          1_000,
            enhanced_check_ms:          3_000,
            enhanced_check_probability: 0.1,
            exit_offset:                15.0,
        }
    }
}

/// Food stall lines.  One line per stall in [`VenueLayout`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoodConfig {
    pub spacing: f32,
    pub service_ms: u64,
    /// Subtracted from a served fan's hunger (floored at zero).
    pub hunger_reduction: f32,
    /// Distance between the stall counter and the serving point.
    pub service_gap: f32,
    /// Distance-equivalent cost of one extra fan when choosing a stall.
    pub line_load_penalty: f32,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            spacing:           8.0,
            service_ms:        4_000,
            hunger_reduction:  0.6,
            service_gap:       6.0,
            line_load_penalty: 20.0,
        }
    }
}

/// An axis-aligned rectangle in canvas fractions (`0.0..=1.0` on each axis).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectFraction {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectFraction {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Scale to world units for a `width × height` canvas, returned as
    /// `(x, y, w, h)`.
    #[inline]
    pub fn scale(&self, width: f32, height: f32) -> (f32, f32, f32, f32) {
        (self.x * width, self.y * height, self.width * width, self.height * height)
    }

    fn is_valid(&self) -> bool {
        let unit = 0.0..=1.0;
        unit.contains(&self.x)
            && unit.contains(&self.y)
            && self.width > 0.0
            && self.height > 0.0
            && self.x + self.width <= 1.0
            && self.y + self.height <= 1.0
    }
}

/// Proportional venue layout.
///
/// The fence runs the full width at `fence_y`, interrupted wherever a
/// checkpoint crosses it; the checkpoints are the only way through.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VenueLayout {
    pub stages:           Vec<RectFraction>,
    pub bus:              RectFraction,
    pub checkpoints:      Vec<RectFraction>,
    pub fence_y:          f32,
    pub fence_thickness:  f32,
    pub food_stalls:      Vec<RectFraction>,
}

impl Default for VenueLayout {
    fn default() -> Self {
        Self {
            stages: vec![
                RectFraction::new(0.05, 0.03, 0.25, 0.10),
                RectFraction::new(0.70, 0.03, 0.25, 0.10),
            ],
            bus: RectFraction::new(0.35, 0.90, 0.30, 0.08),
            checkpoints: vec![
                RectFraction::new(0.30, 0.76, 0.08, 0.04),
                RectFraction::new(0.62, 0.76, 0.08, 0.04),
            ],
            fence_y:         0.775,
            fence_thickness: 0.01,
            food_stalls: vec![
                RectFraction::new(0.10, 0.45, 0.06, 0.05),
                RectFraction::new(0.47, 0.45, 0.06, 0.05),
                RectFraction::new(0.84, 0.45, 0.06, 0.05),
            ],
        }
    }
}

// ── FestivalConfig ────────────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FestivalConfig {
    /// Master RNG seed.  The same seed always classifies fans identically.
    pub seed: u64,
    /// Initial clock speed multiplier (`1.0` = real time).
    pub speed_multiplier: f32,
    pub agent:     AgentConfig,
    pub path:      PathConfig,
    pub avoidance: AvoidanceConfig,
    pub queue:     QueueConfig,
    pub security:  SecurityConfig,
    pub food:      FoodConfig,
    pub venue:     VenueLayout,
}

impl Default for FestivalConfig {
    fn default() -> Self {
        Self {
            seed:             42,
            speed_multiplier: 1.0,
            agent:            AgentConfig::default(),
            path:             PathConfig::default(),
            avoidance:        AvoidanceConfig::default(),
            queue:            QueueConfig::default(),
            security:         SecurityConfig::default(),
            food:             FoodConfig::default(),
            venue:            VenueLayout::default(),
        }
    }
}

impl FestivalConfig {
    /// Reject values that would make the core misbehave.
    pub fn validate(&self) -> FestResult<()> {
        fn bad(msg: impl Into<String>) -> FestResult<()> {
            Err(FestError::Config(msg.into()))
        }

        if self.agent.radius <= 0.0 {
            return bad("agent.radius must be positive");
        }
        if self.agent.personal_space < 0.0 {
            return bad("agent.personal_space must not be negative");
        }
        if self.agent.speed <= 0.0 {
            return bad("agent.speed must be positive");
        }
        if self.speed_multiplier < 0.0 {
            return bad("speed_multiplier must not be negative");
        }
        if self.path.max_waypoints == 0 {
            return bad("path.max_waypoints must be at least 1");
        }
        if self.queue.arrival_threshold <= 0.0 {
            return bad("queue.arrival_threshold must be positive");
        }
        if !(0.0..=1.0).contains(&self.security.enhanced_check_probability) {
            return bad("security.enhanced_check_probability must be within [0, 1]");
        }
        if self.security.spacing <= 0.0 || self.food.spacing <= 0.0 {
            return bad("queue spacing must be positive");
        }
        if self.venue.checkpoints.is_empty() {
            return bad("venue needs at least one security checkpoint");
        }
        let rects = self
            .venue
            .stages
            .iter()
            .chain(self.venue.checkpoints.iter())
            .chain(self.venue.food_stalls.iter())
            .chain(std::iter::once(&self.venue.bus));
        for rect in rects {
            if !rect.is_valid() {
                return bad(format!("venue rectangle {rect:?} is outside the unit square"));
            }
        }
        if !(0.0..=1.0).contains(&self.venue.fence_y) {
            return bad("venue.fence_y must be within [0, 1]");
        }
        Ok(())
    }
}
