use fest_core::{AgentId, LineId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("agent {0} is already queued")]
    AlreadyQueued(AgentId),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("unknown queue line {0}")]
    UnknownLine(LineId),

    #[error("coordinator has no lines")]
    NoLines,
}

pub type QueueResult<T> = Result<T, QueueError>;
