//! `fest-core` — foundational types for the festival crowd simulation core.
//!
//! Every other `fest-*` crate depends on this one.  It has no `fest-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`geometry`]    | `Point`, distance / normalize / rotate helpers         |
//! | [`ids`]         | `AgentId`, `LineId`                                    |
//! | [`time`]        | `SimTime` (ms), `SimClock` with speed multiplier       |
//! | [`rng`]         | `SimRng` — seeded RNG for classification sampling      |
//! | [`state`]       | `MovementState` enum and its collision exemptions      |
//! | [`config`]      | `FestivalConfig` and its sections                      |
//! | [`error`]       | `FestError`, `FestResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod rng;
pub mod state;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    AgentConfig, AvoidanceConfig, FestivalConfig, FoodConfig, PathConfig, QueueConfig,
    RectFraction, SecurityConfig, VenueLayout,
};
pub use error::{FestError, FestResult};
pub use geometry::Point;
pub use ids::{AgentId, LineId};
pub use rng::SimRng;
pub use state::MovementState;
pub use time::{SimClock, SimTime};
