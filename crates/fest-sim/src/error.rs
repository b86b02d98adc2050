use fest_core::FestError;
use fest_queue::QueueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] FestError),

    #[error("queue error: {0}")]
    Queue(#[from] QueueError),
}

pub type SimResult<T> = Result<T, SimError>;
