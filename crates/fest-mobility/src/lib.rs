//! `fest-mobility` — moving fans through the venue, one tick at a time.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`neighbors`]  | `NeighborIndex` — R-tree over fan positions                 |
//! | [`engine`]     | `MovementEngine` — replan, steer, step, push out            |
//!
//! # Tick order
//!
//! ```text
//! ① Replan   — fans whose route is older than replan_interval_ms replan
//!              from where they stand (queued fans are left to their line).
//! ② Steer    — free-roaming fans query the neighbour index and take one
//!              avoidance waypoint, or drop the old one
//!              (parallel with the `parallel` feature).
//! ③ Step     — every fan with somewhere to go walks speed × dt toward its
//!              steering point, next waypoint, or target; reached points are
//!              popped.
//! ④ Push out — the new position is resolved against the obstacle field.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs phase ② on Rayon's thread pool.                   |

pub mod engine;
pub mod neighbors;


pub use engine::{MovementEngine, StepStats};
pub use neighbors::NeighborIndex;
