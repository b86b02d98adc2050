//! The `ObstacleField` — every rectangle in the venue plus the collision
//! queries fans use against them.
//!
//! # Exemptions
//!
//! | Kind        | Blocks                                                    |
//! |-------------|-----------------------------------------------------------|
//! | `Bus`       | nobody                                                    |
//! | `Security`  | everyone except fans in a security state                  |
//! | `FoodStall` | everyone; grown by personal space for walkers/approachers |
//! | `Stage`     | everyone                                                  |
//! | `Boundary`  | everyone                                                  |

use log::info;

use fest_core::geometry::distance;
use fest_core::{MovementState, Point, VenueLayout};

use crate::{Obstacle, ObstacleKind};

#[derive(Clone, Debug, Default)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    layout:    Option<VenueLayout>,
    width:     f32,
    height:    f32,
}

impl ObstacleField {
    /// Lay out `layout` on a `width × height` venue.
    pub fn new(layout: VenueLayout, width: f32, height: f32) -> Self {
        let mut field = Self {
            obstacles: Vec::new(),
            layout: Some(layout),
            width,
            height,
        };
        field.rebuild(width, height);
        field
    }

    /// A field with no obstacles at all.  Nothing ever collides.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A field holding exactly `obstacles`, with no layout behind it.
    /// `rebuild` on such a field only updates the size.
    pub fn from_obstacles(obstacles: Vec<Obstacle>, width: f32, height: f32) -> Self {
        let mut field = Self::empty();
        field.obstacles = obstacles;
        field.width = width;
        field.height = height;
        field
    }

    // ── Layout ────────────────────────────────────────────────────────────

    /// Regenerate every obstacle proportionally for a new venue size.
    ///
    /// The previous list is replaced wholesale, including any stalls set
    /// through [`set_food_stalls`](Self::set_food_stalls).
    pub fn rebuild(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;

        let Some(layout) = &self.layout else {
            return;
        };
        let mut obstacles = Vec::with_capacity(
            layout.stages.len() + layout.checkpoints.len() * 2 + layout.food_stalls.len() + 2,
        );

        for stage in &layout.stages {
            obstacles.push(Obstacle::from_fraction(ObstacleKind::Stage, stage, width, height));
        }
        obstacles.push(Obstacle::from_fraction(ObstacleKind::Bus, &layout.bus, width, height));

        let mut checkpoints: Vec<Obstacle> = layout
            .checkpoints
            .iter()
            .map(|c| Obstacle::from_fraction(ObstacleKind::Security, c, width, height))
            .collect();
        checkpoints.sort_by(|a, b| a.x.total_cmp(&b.x));

        // Fence segments fill the gaps between checkpoints.
        if !checkpoints.is_empty() {
            let thickness = layout.fence_thickness * height;
            let fence_top = layout.fence_y * height - thickness * 0.5;
            let mut cursor = 0.0_f32;
            for cp in &checkpoints {
                if cp.x > cursor {
                    obstacles.push(Obstacle::new(
                        ObstacleKind::Boundary, cursor, fence_top, cp.x - cursor, thickness,
                    ));
                }
                cursor = cursor.max(cp.right());
            }
            if width > cursor {
                obstacles.push(Obstacle::new(
                    ObstacleKind::Boundary, cursor, fence_top, width - cursor, thickness,
                ));
            }
        }
        obstacles.extend(checkpoints);

        for stall in &layout.food_stalls {
            obstacles.push(Obstacle::from_fraction(ObstacleKind::FoodStall, stall, width, height));
        }

        info!(
            "venue rebuilt at {width}x{height}: {} obstacles",
            obstacles.len()
        );
        self.obstacles = obstacles;
    }

    /// Replace only the food stalls, keeping every other obstacle.
    ///
    /// The given rectangles are stored as `FoodStall` whatever kind they
    /// carried.
    pub fn set_food_stalls(&mut self, stalls: impl IntoIterator<Item = Obstacle>) {
        self.obstacles.retain(|o| o.kind != ObstacleKind::FoodStall);
        self.obstacles.extend(stalls.into_iter().map(|mut s| {
            s.kind = ObstacleKind::FoodStall;
            s
        }));
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn of_kind(&self, kind: ObstacleKind) -> impl Iterator<Item = &Obstacle> + '_ {
        self.obstacles.iter().filter(move |o| o.kind == kind)
    }

    /// Security booths and fence segments, for the renderer.
    pub fn security_boundaries(&self) -> Vec<Obstacle> {
        self.obstacles
            .iter()
            .filter(|o| matches!(o.kind, ObstacleKind::Security | ObstacleKind::Boundary))
            .copied()
            .collect()
    }

    // ── Collision queries ─────────────────────────────────────────────────

    /// Would a circle at `point` overlap anything that blocks a fan in
    /// `state`?
    ///
    /// `personal_space_buffer` grows food stalls, and only for fans that are
    /// walking or approaching a line.
    pub fn check_collision(
        &self,
        point:                 Point,
        radius:                f32,
        state:                 MovementState,
        personal_space_buffer: f32,
    ) -> bool {
        self.obstacles.iter().any(|o| {
            if !blocks_state(o.kind, state) {
                return false;
            }
            let buffer = if o.kind == ObstacleKind::FoodStall && state.pads_food_stalls() {
                personal_space_buffer
            } else {
                0.0
            };
            o.overlaps_circle(point, radius, buffer)
        })
    }

    /// Push a circle out of every blocking obstacle it overlaps.
    ///
    /// Each obstacle is visited once, in field order, so the result is
    /// bounded even when obstacles touch.  A centre exactly on (or inside)
    /// the rectangle has no contact normal; it is pushed `radius` along +x.
    pub fn resolve_collision(&self, position: Point, radius: f32, state: MovementState) -> Point {
        let mut p = position;
        for o in &self.obstacles {
            if !blocks_state(o.kind, state) {
                continue;
            }
            let nearest = o.closest_point(p);
            let d = distance(p, nearest);
            if d >= radius {
                continue;
            }
            if d == 0.0 {
                p = Point::new(p.x + radius, p.y);
            } else {
                let normal = (p - nearest) * (1.0 / d);
                p = p + normal * (radius - d);
            }
        }
        p
    }

    /// `false` if `point` lies inside a stage, fence or (buffer-grown) food
    /// stall.  Checkpoints and the bus zone are never considered.
    pub fn is_valid_position(&self, point: Point, buffer: f32) -> bool {
        !self.obstacles.iter().any(|o| match o.kind {
            ObstacleKind::FoodStall => o.contains(point, buffer),
            ObstacleKind::Stage | ObstacleKind::Boundary => o.contains(point, 0.0),
            ObstacleKind::Security | ObstacleKind::Bus => false,
        })
    }
}

/// Whether obstacles of `kind` stop a fan in `state`.
#[inline]
fn blocks_state(kind: ObstacleKind, state: MovementState) -> bool {
    match kind {
        ObstacleKind::Bus      => false,
        ObstacleKind::Security => !state.passes_security(),
        _                      => true,
    }
}
