//! `fest-queue` — lines of fans waiting for a service point.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                        |
//! |-------------------|-----------------------------------------------------------------|
//! | [`line`]          | `QueueLine`, `LineGeometry` — membership and slot positions     |
//! | [`engine`]        | `QueueStates` + the shared per-line operations                  |
//! | [`policy`]        | `QueueCompletionPolicy` trait, `Completion`, `CompletionAction` |
//! | [`coordinator`]   | `QueueCoordinator<P>` — lines + policy, one `update` per tick    |
//! | [`security`]      | `SecurityPolicy`, checkpoint line layout                        |
//! | [`food`]          | `FoodPolicy`, stall line layout                                 |
//! | [`error`]         | `QueueError`, `QueueResult<T>`                                  |
//!
//! # Lifecycle of a fan
//!
//! ```text
//! add_to_queue ─► approaching ─(arrived)─► queue ─(head at front)─► slot
//!                     ▲                                              │
//!                     └──────────── ReturnToQueue ◄── completion ────┤
//!                                                                    ▼
//!                                                    Release ─► free roaming
//! ```
//!
//! A fan is in at most one of `approaching`, `queue` or the processing slot
//! of at most one line of a coordinator.

pub mod coordinator;
pub mod engine;
pub mod error;
pub mod food;
pub mod line;
pub mod policy;
pub mod security;

#[cfg(test)]
mod tests;

pub use coordinator::{QueueCoordinator, UpdateStats};
pub use engine::QueueStates;
pub use error::{QueueError, QueueResult};
pub use food::{FoodCoordinator, FoodPolicy};
pub use line::{LineGeometry, QueueLine};
pub use policy::{Completion, CompletionAction, QueueCompletionPolicy};
pub use security::{SecurityCoordinator, SecurityPolicy};
