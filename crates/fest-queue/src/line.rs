//! One physical line in front of a service point.

use std::collections::VecDeque;

use fest_core::geometry::translate;
use fest_core::{AgentId, LineId, Point};

/// Where a line sits in the venue.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineGeometry {
    /// Slot 0, the head of the line.
    pub front:            Point,
    /// Unit vector from the head toward the back.
    pub direction:        Point,
    /// Gap between consecutive slots.
    pub spacing:          f32,
    /// Where the fan being served stands.
    pub processing_point: Point,
    /// Where a released fan walks first, if anywhere.
    pub exit:             Option<Point>,
}

impl LineGeometry {
    /// Position of slot `index`: `front + direction × spacing × index`.
    #[inline]
    pub fn slot(&self, index: usize) -> Point {
        translate(self.front, self.direction, self.spacing * index as f32)
    }
}

/// Membership of one line.
///
/// `queue` is front-to-back and holds fans standing in line; `approaching`
/// holds fans still walking to the back.  `processing` is a back-reference
/// to the fan being served.  It is checked against the `AgentStore` every
/// tick and cleared if that fan is gone.
#[derive(Clone, Debug)]
pub struct QueueLine {
    pub id:          LineId,
    pub geometry:    LineGeometry,
    pub queue:       VecDeque<AgentId>,
    pub approaching: Vec<AgentId>,
    pub processing:  Option<AgentId>,
}

impl QueueLine {
    pub fn new(id: LineId, geometry: LineGeometry) -> Self {
        Self {
            id,
            geometry,
            queue:       VecDeque::new(),
            approaching: Vec::new(),
            processing:  None,
        }
    }

    /// Fans in line plus fans walking to it.  The load-balancing measure.
    #[inline]
    pub fn count(&self) -> usize {
        self.queue.len() + self.approaching.len()
    }

    /// Everyone the line is responsible for, slot occupant included.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.count() + usize::from(self.processing.is_some())
    }

    /// The next free slot index: fans already in line plus fans heading
    /// there.  Nothing is reserved ahead of time.
    #[inline]
    pub fn back_index(&self) -> usize {
        self.count()
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.processing == Some(id) || self.queue.contains(&id) || self.approaching.contains(&id)
    }

    /// Drop `id` from wherever it is in this line.  Returns `true` if it was
    /// present.
    pub fn remove(&mut self, id: AgentId) -> bool {
        let before = self.occupancy();
        self.queue.retain(|&a| a != id);
        self.approaching.retain(|&a| a != id);
        if self.processing == Some(id) {
            self.processing = None;
        }
        self.occupancy() != before
    }

    /// Members in service order: slot occupant, queue, then approaching.
    pub fn members(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.processing
            .into_iter()
            .chain(self.queue.iter().copied())
            .chain(self.approaching.iter().copied())
    }
}
