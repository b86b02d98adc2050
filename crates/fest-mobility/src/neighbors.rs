//! Spatial index over fan positions for the avoidance radius query.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use fest_core::Point;
use fest_spatial::Body;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct BodyEntry {
    point: [f32; 2],
    body:  Body,
}

impl RTreeObject for BodyEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for BodyEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── NeighborIndex ─────────────────────────────────────────────────────────────

/// Immutable snapshot of fan bodies, rebuilt once per tick.
pub struct NeighborIndex {
    tree: RTree<BodyEntry>,
}

impl NeighborIndex {
    /// Bulk-load `bodies`.  O(N log N).
    pub fn build(bodies: impl IntoIterator<Item = Body>) -> Self {
        let entries: Vec<BodyEntry> = bodies
            .into_iter()
            .map(|body| BodyEntry {
                point: [body.position.x, body.position.y],
                body,
            })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn empty() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bodies within `radius` of `center`, in ascending id order
    /// so "first conflict wins" does not depend on tree layout.
    pub fn within(&self, center: Point, radius: f32) -> Vec<Body> {
        let mut found: Vec<Body> = self
            .tree
            .locate_within_distance([center.x, center.y], radius * radius)
            .map(|e| e.body)
            .collect();
        found.sort_unstable_by_key(|b| b.id);
        found
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for NeighborIndex {
    fn default() -> Self {
        Self::empty()
    }
}
