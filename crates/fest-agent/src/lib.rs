//! `fest-agent` — fan state and storage for the festival crowd core.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`agent`]     | `Agent`, `SecurityClass`, target setting and replan throttle |
//! | [`path`]      | `WaypointPath` — ordered `(point, planned_at)` waypoints     |
//! | [`store`]     | `AgentStore` — id-indexed slots, tolerant of removal        |
//! | [`builder`]   | `AgentBuilder` (fluent construction)                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on plain data types.     |

pub mod agent;
pub mod builder;
pub mod path;
pub mod store;


pub use agent::{Agent, SecurityClass};
pub use builder::AgentBuilder;
pub use path::{Waypoint, WaypointPath};
pub use store::AgentStore;
