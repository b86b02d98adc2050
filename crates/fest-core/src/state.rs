//! Per-fan movement state and the obstacle exemptions derived from it.

/// What a fan is currently doing, as far as movement and queueing care.
///
/// `InQueue` and `BeingChecked` are the security-line spellings of
/// "waiting" and "processing"; the security checkpoint obstacle is
/// passable in exactly those states (plus approach and after clearance).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementState {
    #[default]
    Idle,
    Moving,
    ApproachingQueue,
    InQueueWaiting,
    InQueueAdvancing,
    Processing,
    ReturningToQueue,
    Leaving,
    BeingChecked,
    PassedSecurity,
    InQueue,
}

impl MovementState {
    /// Security-kind obstacles do not block fans in these states.
    #[inline]
    pub fn passes_security(self) -> bool {
        matches!(
            self,
            MovementState::InQueue
                | MovementState::BeingChecked
                | MovementState::ApproachingQueue
                | MovementState::PassedSecurity
        )
    }

    /// Food stalls are padded by the personal-space buffer for fans in these
    /// states, keeping walkers off the serving counter.
    #[inline]
    pub fn pads_food_stalls(self) -> bool {
        matches!(self, MovementState::ApproachingQueue | MovementState::Moving)
    }

    /// Fans standing in (or at the head of) a line.  Lines are packed tighter
    /// than personal space, so these fans never steer around their peers.
    #[inline]
    pub fn is_queued(self) -> bool {
        matches!(
            self,
            MovementState::InQueue
                | MovementState::InQueueWaiting
                | MovementState::InQueueAdvancing
                | MovementState::Processing
                | MovementState::BeingChecked
        )
    }
}
