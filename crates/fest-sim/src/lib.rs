//! `fest-sim` — a thin tick driver over the festival crowd core.
//!
//! # Tick order
//!
//! ```text
//! step(real_ms):
//!   ⓪ Clock     — real_ms × speed_multiplier simulated ms; zero means paused
//!                 and nothing else runs.
//!   ① Security  — SecurityCoordinator::update (admit, promote, check, release).
//!   ② Food      — FoodCoordinator::update.
//!   ③ Movement  — MovementEngine::step (replan timer, steering, walk, push out).
//! ```
//!
//! Coordinators run before movement so a fan released this tick already
//! walks toward its exit on the same tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Steering queries run on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust
//! use fest_core::{FestivalConfig, Point};
//! use fest_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(FestivalConfig::default())
//!     .size(1000.0, 800.0)
//!     .build()?;
//! let fan = sim.spawn_at(Point::new(340.0, 760.0));
//! sim.join_security(fan)?;
//! for _ in 0..100 {
//!     sim.step(100, &mut NoopObserver);
//! }
//! # Ok::<(), fest_sim::SimError>(())
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, TickReport};
