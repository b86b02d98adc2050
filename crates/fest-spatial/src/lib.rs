//! `fest-spatial` — venue obstacles, static path planning, and local avoidance.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`obstacle`]   | `Obstacle`, `ObstacleKind`, rectangle/segment tests          |
//! | [`field`]      | `ObstacleField` — layout, collision queries, push-out        |
//! | [`planner`]    | `PathPlanner` trait, `CornerPlanner`, `PlanParams`           |
//! | [`avoidance`]  | `avoid` — one-shot steering waypoint around a nearby peer    |
//! | [`navigator`]  | `Navigator` — field + planner + knobs handed to callers      |
//!
//! # Null obstacle field
//!
//! The pure query functions take `Option<&ObstacleField>`.  `None` (and an
//! empty field) means nothing blocks movement: plans collapse to the direct
//! target and collision checks return `false`.

pub mod avoidance;
pub mod field;
pub mod navigator;
pub mod obstacle;
pub mod planner;


pub use avoidance::{avoid, Body};
pub use field::ObstacleField;
pub use navigator::Navigator;
pub use obstacle::{Obstacle, ObstacleKind};
pub use planner::{CornerPlanner, PathPlanner, PlanParams};
