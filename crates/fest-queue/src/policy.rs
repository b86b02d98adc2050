//! The `QueueCompletionPolicy` trait — what makes a security line different
//! from a food stall.

use fest_agent::Agent;
use fest_core::geometry::distance;
use fest_core::{LineId, MovementState, Point, SimTime};

use crate::{QueueError, QueueLine, QueueResult, QueueStates};

/// What to do with a fan whose service finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompletionAction {
    /// Leave the line and roam freely.
    Release,
    /// Walk to the back of the same line and queue again.
    ReturnToQueue,
}

/// Result of a completion check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub completed: bool,
    /// Meaningless while `completed` is `false`.
    pub action:    CompletionAction,
}

impl Completion {
    pub const PENDING: Completion = Completion {
        completed: false,
        action:    CompletionAction::Release,
    };

    pub const fn release() -> Self {
        Self { completed: true, action: CompletionAction::Release }
    }

    pub const fn return_to_queue() -> Self {
        Self { completed: true, action: CompletionAction::ReturnToQueue }
    }
}

/// Pluggable per-coordinator behaviour.
///
/// # Required methods
///
/// Only [`check_processing_complete`][Self::check_processing_complete] is
/// required.  The others default to the plain behaviour: generic queue
/// states, nearest line, start time stamped on the fan (if not already set),
/// release to idle.
///
/// # Example
///
/// ```rust
/// use fest_agent::Agent;
/// use fest_core::SimTime;
/// use fest_queue::{Completion, QueueCompletionPolicy};
///
/// /// Everyone is served in exactly two seconds.
/// struct Fixed;
///
/// impl QueueCompletionPolicy for Fixed {
///     fn check_processing_complete(&self, _agent: &Agent, now: SimTime, started: SimTime) -> Completion {
///         if now.since(started) >= 2_000 { Completion::release() } else { Completion::PENDING }
///     }
/// }
/// ```
pub trait QueueCompletionPolicy {
    /// Short name used in log lines.
    fn name(&self) -> &'static str {
        "queue"
    }

    fn states(&self) -> QueueStates {
        QueueStates::GENERIC
    }

    /// Pick the line a newly admitted fan joins.  Default: the line whose
    /// front is nearest, first on ties.
    fn choose_line(&mut self, lines: &[QueueLine], agent: &Agent) -> QueueResult<LineId> {
        nearest_line(lines, agent.position, |_| 0.0)
    }

    /// Called once per successful `add_to_queue`, before the fan is placed.
    fn on_admit(&mut self, _agent: &mut Agent) {}

    /// Called when the fan leaves the head of the queue for the service
    /// point.  A start time already on the fan is kept: its dwell at the
    /// head counts toward service.
    fn on_start_processing(&mut self, agent: &mut Agent, now: SimTime) {
        agent.wait_start.get_or_insert(now);
    }

    /// Has the fan standing at the service point since `started` finished?
    fn check_processing_complete(&self, agent: &Agent, now: SimTime, started: SimTime) -> Completion;

    /// Apply the coordinator-specific effect of a release.  Returns a point
    /// to walk to, or `None` to stop where it stands.
    fn on_release(&mut self, agent: &mut Agent, _line: &QueueLine) -> Option<Point> {
        agent.state = MovementState::Idle;
        None
    }

    /// Called before a fan is sent to the back of its line again.
    fn on_return(&mut self, _agent: &mut Agent) {}
}

/// The line minimising `distance(position, front) + extra(line)`, first on
/// ties.
pub fn nearest_line<'a>(
    lines:    impl IntoIterator<Item = &'a QueueLine>,
    position: Point,
    extra:    impl Fn(&QueueLine) -> f32,
) -> QueueResult<LineId> {
    lines
        .into_iter()
        .map(|l| (l.id, distance(position, l.geometry.front) + extra(l)))
        .reduce(|best, next| if next.1 < best.1 { next } else { best })
        .map(|(id, _)| id)
        .ok_or(QueueError::NoLines)
}
