//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `FestError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `fest-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FestError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `fest-*` crates.
pub type FestResult<T> = Result<T, FestError>;
