//! Unit tests for fest-queue.
//!
//! Movement is out of scope here: `teleport` drops every fan on its target,
//! standing in for the movement engine between coordinator ticks.

#[cfg(test)]
mod helpers {
    use std::collections::HashSet;

    use fest_agent::{AgentBuilder, AgentStore};
    use fest_core::{AgentId, FestivalConfig, Point, SimTime};
    use fest_spatial::{CornerPlanner, Navigator, ObstacleField};

    use crate::{LineGeometry, QueueCompletionPolicy, QueueCoordinator, UpdateStats};

    pub fn config() -> FestivalConfig {
        FestivalConfig::default()
    }

    pub fn open_nav() -> Navigator {
        Navigator::with_planner(CornerPlanner, ObstacleField::empty(), &config())
    }

    /// A line at `x` whose head is at y = 100 and grows toward +y.
    pub fn geometry(x: f32) -> LineGeometry {
        LineGeometry {
            front:            Point::new(x, 100.0),
            direction:        Point::new(0.0, 1.0),
            spacing:          8.0,
            processing_point: Point::new(x, 90.0),
            exit:             Some(Point::new(x, 60.0)),
        }
    }

    pub fn spawn(store: &mut AgentStore, x: f32, y: f32) -> AgentId {
        store.spawn(AgentBuilder::new(Point::new(x, y)))
    }

    /// Put every fan that has a target on it.
    pub fn teleport(store: &mut AgentStore) {
        for a in store.iter_mut() {
            if let Some(t) = a.target {
                a.position = t;
                a.path.clear();
            }
        }
    }

    /// No fan is tracked twice by the coordinator.
    pub fn assert_exclusive<P: QueueCompletionPolicy>(coord: &QueueCoordinator<P>) {
        let all = coord.all_agents();
        let unique: HashSet<AgentId> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len(), "duplicate membership: {all:?}");
        assert_eq!(all.len(), coord.total_count());
    }

    /// Tick every 100 ms, teleporting between ticks, until the coordinator
    /// is empty or `max_ticks` pass.  Returns summed stats and the end time.
    pub fn drain<P: QueueCompletionPolicy>(
        coord:     &mut QueueCoordinator<P>,
        store:     &mut AgentStore,
        nav:       &Navigator,
        mut now:   SimTime,
        max_ticks: usize,
    ) -> (UpdateStats, SimTime) {
        let mut total = UpdateStats::default();
        for _ in 0..max_ticks {
            now = now + 100;
            let s = coord.update(now, store, nav);
            total.pruned += s.pruned;
            total.promoted += s.promoted;
            total.started += s.started;
            total.released += s.released;
            total.returned += s.returned;
            assert_exclusive(coord);
            if coord.total_count() == 0 {
                break;
            }
            teleport(store);
        }
        (total, now)
    }
}

// ── QueueLine ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod line {
    use fest_core::{AgentId, LineId, Point};

    use super::helpers::geometry;
    use crate::QueueLine;

    #[test]
    fn slots_step_back_from_front() {
        let g = geometry(10.0);
        assert_eq!(g.slot(0), Point::new(10.0, 100.0));
        assert_eq!(g.slot(3), Point::new(10.0, 124.0));
    }

    #[test]
    fn membership_and_removal() {
        let mut line = QueueLine::new(LineId(0), geometry(0.0));
        line.processing = Some(AgentId(1));
        line.queue.push_back(AgentId(2));
        line.approaching.push(AgentId(3));
        assert_eq!(line.count(), 2);
        assert_eq!(line.occupancy(), 3);
        assert_eq!(line.members().collect::<Vec<_>>(), vec![AgentId(1), AgentId(2), AgentId(3)]);

        assert!(line.remove(AgentId(1)));
        assert_eq!(line.processing, None);
        assert!(!line.remove(AgentId(1)));
        assert!(line.contains(AgentId(3)));
    }
}

// ── Engine operations ─────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use fest_agent::AgentStore;
    use fest_core::{LineId, MovementState, Point, SimTime};

    use super::helpers::{geometry, open_nav, spawn};
    use crate::engine::{
        check_processing_transition, process_entering, process_front_of_queue,
        update_queue_positions,
    };
    use crate::{QueueLine, QueueStates};

    const T: f32 = 5.0;

    #[test]
    fn entering_promotes_only_arrived() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let here = spawn(&mut store, 0.0, 100.0);
        let away = spawn(&mut store, 0.0, 300.0);
        store.get_mut(here).unwrap().set_target(Point::new(0.0, 103.0), &nav, SimTime(0));
        store.get_mut(away).unwrap().set_target(Point::new(0.0, 108.0), &nav, SimTime(0));

        let mut line = QueueLine::new(LineId(0), geometry(0.0));
        line.approaching = vec![here, away];
        let promoted = process_entering(&mut line, &mut store, &QueueStates::GENERIC, T);

        assert_eq!(promoted, 1);
        assert_eq!(line.queue, [here]);
        assert_eq!(line.approaching, vec![away]);
        assert_eq!(store.get(here).unwrap().state, MovementState::InQueueWaiting);
    }

    #[test]
    fn front_is_noop_while_slot_busy() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let busy = spawn(&mut store, 0.0, 90.0);
        let head = spawn(&mut store, 0.0, 100.0);
        let mut line = QueueLine::new(LineId(0), geometry(0.0));
        line.processing = Some(busy);
        line.queue.push_back(head);

        let occupant = process_front_of_queue(
            &mut line, &mut store, &QueueStates::GENERIC, &nav, SimTime(5), T, |_, _| {},
        );
        assert_eq!(occupant, Some(busy));
        assert_eq!(line.queue, [head]);
    }

    #[test]
    fn front_waits_for_head_to_arrive() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let head = spawn(&mut store, 0.0, 130.0);
        let mut line = QueueLine::new(LineId(0), geometry(0.0));
        line.queue.push_back(head);

        let occupant = process_front_of_queue(
            &mut line, &mut store, &QueueStates::GENERIC, &nav, SimTime(5), T, |_, _| {},
        );
        assert_eq!(occupant, None);
        assert_eq!(line.queue.len(), 1);
    }

    #[test]
    fn front_moves_arrived_head_into_slot() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let head = spawn(&mut store, 0.0, 101.0);
        let next = spawn(&mut store, 0.0, 108.0);
        let mut line = QueueLine::new(LineId(0), geometry(0.0));
        line.queue.extend([head, next]);

        let occupant = process_front_of_queue(
            &mut line, &mut store, &QueueStates::GENERIC, &nav, SimTime(70), T,
            |agent, now| agent.wait_start = Some(now),
        );
        assert_eq!(occupant, Some(head));
        assert_eq!(line.processing, Some(head));
        assert_eq!(line.queue, [next]);

        let a = store.get(head).unwrap();
        assert_eq!(a.state, MovementState::InQueueAdvancing);
        assert_eq!(a.target, Some(Point::new(0.0, 90.0)));
        assert_eq!(a.wait_start, Some(SimTime(70)));
    }

    #[test]
    fn transition_needs_advancing_and_arrival() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let id = spawn(&mut store, 0.0, 92.0);
        let a = store.get_mut(id).unwrap();
        a.set_target(Point::new(0.0, 90.0), &nav, SimTime(0));
        a.queue_position = Some(0);

        a.state = MovementState::InQueueWaiting;
        assert!(!check_processing_transition(a, &QueueStates::GENERIC, T));

        a.state = MovementState::InQueueAdvancing;
        assert!(check_processing_transition(a, &QueueStates::GENERIC, T));
        assert_eq!(a.state, MovementState::Processing);
        assert_eq!(a.queue_position, None);
        assert!(a.path.is_empty());
        assert_eq!(a.dynamic_waypoint, None);
    }

    #[test]
    fn security_spelling_of_transition() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let id = spawn(&mut store, 0.0, 90.0);
        let a = store.get_mut(id).unwrap();
        a.set_target(Point::new(0.0, 90.0), &nav, SimTime(0));
        a.state = MovementState::InQueue;
        assert!(check_processing_transition(a, &QueueStates::SECURITY, T));
        assert_eq!(a.state, MovementState::BeingChecked);
    }

    #[test]
    fn positions_follow_queue_then_approaching() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let settled = spawn(&mut store, 0.0, 101.0);
        let behind = spawn(&mut store, 0.0, 150.0);
        let walking = spawn(&mut store, 50.0, 300.0);
        store.get_mut(walking).unwrap().state = MovementState::ApproachingQueue;

        let mut line = QueueLine::new(LineId(0), geometry(0.0));
        line.queue.extend([settled, behind]);
        line.approaching.push(walking);

        update_queue_positions(&line, &mut store, &QueueStates::GENERIC, &nav, false, SimTime(0), T);

        let s = store.get(settled).unwrap();
        assert_eq!(s.state, MovementState::InQueueWaiting);
        assert_eq!(s.target, None);
        assert_eq!(s.queue_position, Some(0));

        let b = store.get(behind).unwrap();
        assert_eq!(b.state, MovementState::InQueueAdvancing);
        assert_eq!(b.target, Some(Point::new(0.0, 108.0)));
        assert_eq!(b.queue_position, Some(1));

        let w = store.get(walking).unwrap();
        assert_eq!(w.state, MovementState::ApproachingQueue);
        assert_eq!(w.target, Some(Point::new(0.0, 116.0)));
        assert_eq!(w.queue_position, Some(2));
    }
}

// ── Coordinator ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod coordinator {
    use fest_agent::AgentStore;
    use fest_core::{AgentId, LineId, MovementState, SecurityConfig, SimTime};

    use super::helpers::{config, drain, geometry, open_nav, spawn, teleport};
    use crate::{QueueCoordinator, QueueError, SecurityPolicy};

    fn security(lines: usize, probability: f64) -> QueueCoordinator<SecurityPolicy> {
        let cfg = config();
        let sec = SecurityConfig {
            enhanced_check_probability: probability,
            ..cfg.security.clone()
        };
        QueueCoordinator::new(
            SecurityPolicy::new(&sec, 7),
            (0..lines).map(|i| geometry(i as f32 * 100.0)),
            &cfg.queue,
        )
    }

    #[test]
    fn no_double_admission() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let id = spawn(&mut store, 0.0, 300.0);
        let mut coord = security(2, 0.0);

        assert_eq!(coord.add_to_queue(&mut store, id, &nav, SimTime(0)), Ok(0));
        assert_eq!(
            coord.add_to_queue(&mut store, id, &nav, SimTime(1)),
            Err(QueueError::AlreadyQueued(id))
        );
        assert_eq!(coord.total_count(), 1);
        assert_eq!(store.get(id).unwrap().state, MovementState::ApproachingQueue);
    }

    #[test]
    fn admission_errors() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = security(1, 0.0);
        assert_eq!(
            coord.add_to_queue(&mut store, AgentId(9), &nav, SimTime(0)),
            Err(QueueError::AgentNotFound(AgentId(9)))
        );

        let id = spawn(&mut store, 0.0, 0.0);
        let mut empty = security(0, 0.0);
        assert_eq!(empty.add_to_queue(&mut store, id, &nav, SimTime(0)), Err(QueueError::NoLines));
        assert_eq!(
            coord.set_geometry(LineId(4), geometry(0.0)),
            Err(QueueError::UnknownLine(LineId(4)))
        );
    }

    #[test]
    fn security_balances_lines() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = security(3, 0.0);
        for i in 0..10 {
            // Everyone starts nearest line 0.
            let id = spawn(&mut store, 0.0, 300.0 + i as f32);
            coord.add_to_queue(&mut store, id, &nav, SimTime(0)).unwrap();
            let counts: Vec<usize> = coord.lines().iter().map(|l| l.count()).collect();
            let spread = counts.iter().max().unwrap() - counts.iter().min().unwrap();
            assert!(spread <= 1, "{counts:?}");
        }
    }

    #[test]
    fn security_ties_go_to_nearest_line() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = security(2, 0.0);
        let id = spawn(&mut store, 95.0, 300.0);
        coord.add_to_queue(&mut store, id, &nav, SimTime(0)).unwrap();
        assert_eq!(coord.line_of(id), Some(LineId(1)));
    }

    #[test]
    fn approaching_slots_are_not_reserved() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = security(1, 0.0);
        let a = spawn(&mut store, 0.0, 300.0);
        let b = spawn(&mut store, 0.0, 310.0);
        assert_eq!(coord.add_to_queue(&mut store, a, &nav, SimTime(0)), Ok(0));
        assert_eq!(coord.add_to_queue(&mut store, b, &nav, SimTime(0)), Ok(1));

        // `a` leaves before arriving: `b` moves up to slot 0.
        coord.remove_from_queue(a);
        coord.update(SimTime(100), &mut store, &nav);
        assert_eq!(store.get(b).unwrap().queue_position, Some(0));
    }

    #[test]
    fn full_flow_is_exclusive_and_releases_everyone() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = security(2, 0.3);
        let ids: Vec<AgentId> = (0..12).map(|i| spawn(&mut store, i as f32 * 10.0, 400.0)).collect();
        for &id in &ids {
            coord.add_to_queue(&mut store, id, &nav, SimTime(0)).unwrap();
        }

        let (stats, _) = drain(&mut coord, &mut store, &nav, SimTime(0), 2_000);
        assert_eq!(coord.total_count(), 0);
        assert_eq!(stats.released, ids.len());
        for id in ids {
            let a = store.get(id).unwrap();
            assert_eq!(a.state, MovementState::PassedSecurity);
            assert_eq!(a.queue_position, None);
        }
    }

    #[test]
    fn extended_check_returns_exactly_once() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = security(1, 1.0);
        let id = spawn(&mut store, 0.0, 300.0);
        coord.add_to_queue(&mut store, id, &nav, SimTime(0)).unwrap();
        assert_eq!(store.get(id).unwrap().security, fest_agent::SecurityClass::ExtendedOnce);

        let (stats, _) = drain(&mut coord, &mut store, &nav, SimTime(0), 500);
        assert_eq!(stats.returned, 1);
        assert_eq!(stats.released, 1);

        teleport(&mut store);
        let a = store.get(id).unwrap();
        assert_eq!(a.security, fest_agent::SecurityClass::Cleared);
        assert_eq!(a.state, MovementState::PassedSecurity);
        assert_eq!(a.position, coord.lines()[0].geometry.exit.unwrap());
    }

    #[test]
    fn dangling_slot_is_cleared_and_line_moves_on() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = security(1, 0.0);
        let gone = spawn(&mut store, 0.0, 90.0);
        let next = spawn(&mut store, 0.0, 100.0);
        {
            let line = coord.line_mut(LineId(0)).unwrap();
            line.processing = Some(gone);
            line.queue.push_back(next);
        }
        store.remove(gone);

        let stats = coord.update(SimTime(100), &mut store, &nav);
        assert_eq!(stats.pruned, 1);
        assert_eq!(stats.started, 1);
        assert_eq!(coord.lines()[0].processing, Some(next));
        assert!(!coord.contains(gone));
    }

    #[test]
    fn admission_clears_stale_start_time() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = security(1, 0.0);
        let id = spawn(&mut store, 0.0, 300.0);
        store.get_mut(id).unwrap().wait_start = Some(SimTime(5));
        coord.add_to_queue(&mut store, id, &nav, SimTime(9_000)).unwrap();
        assert_eq!(store.get(id).unwrap().wait_start, None);
    }

    #[test]
    fn remove_forgets_fan() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = security(2, 0.0);
        let id = spawn(&mut store, 0.0, 300.0);
        coord.add_to_queue(&mut store, id, &nav, SimTime(0)).unwrap();
        assert!(coord.remove_from_queue(id));
        assert!(!coord.remove_from_queue(id));
        assert_eq!(coord.total_count(), 0);
        assert!(coord.all_agents().is_empty());
    }
}

// ── Food ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod food {
    use fest_agent::{AgentBuilder, AgentStore};
    use fest_core::{LineId, MovementState, Point, SimTime};
    use fest_spatial::ObstacleField;

    use super::helpers::{config, drain, geometry, open_nav, spawn};
    use crate::{FoodPolicy, QueueCoordinator};

    fn food(lines: usize) -> QueueCoordinator<FoodPolicy> {
        let cfg = config();
        QueueCoordinator::new(
            FoodPolicy::new(&cfg.food),
            (0..lines).map(|i| geometry(i as f32 * 100.0)),
            &cfg.queue,
        )
    }

    #[test]
    fn served_fan_is_released_within_one_update() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = food(1);
        let now = SimTime(10_000);
        let id = store.spawn(
            AgentBuilder::new(Point::new(0.0, 90.0))
                .state(MovementState::Processing)
                .hunger(0.8),
        );
        store.get_mut(id).unwrap().wait_start = Some(now.earlier_by(config().food.service_ms + 1));
        coord.line_mut(LineId(0)).unwrap().processing = Some(id);

        let stats = coord.update(now, &mut store, &nav);
        assert_eq!(stats.released, 1);
        let a = store.get(id).unwrap();
        assert_eq!(a.state, MovementState::Idle);
        assert!(a.hunger < 0.8);
        assert!((a.hunger - 0.2).abs() < 1e-5);
        assert_eq!(a.target, None);
        assert_eq!(coord.total_count(), 0);
    }

    #[test]
    fn overdue_head_is_released_within_one_update() {
        let cfg = config();
        let field = ObstacleField::new(cfg.venue.clone(), 1000.0, 800.0);
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = FoodPolicy::coordinator(&field, &cfg);
        let now = SimTime(100_000);

        let front = coord.lines()[0].geometry.slot(0);
        let id = store.spawn(
            AgentBuilder::new(front)
                .state(MovementState::InQueueWaiting)
                .hunger(0.8),
        );
        store.get_mut(id).unwrap().wait_start = Some(now.earlier_by(cfg.food.service_ms + 1));
        coord.line_mut(LineId(0)).unwrap().queue.push_back(id);

        let stats = coord.update(now, &mut store, &nav);
        assert_eq!(stats.started, 1);
        assert_eq!(stats.released, 1);
        let a = store.get(id).unwrap();
        assert_eq!(a.state, MovementState::Idle);
        assert!(a.hunger < 0.8);
        assert_eq!(a.wait_start, None);
        assert_eq!(coord.lines()[0].processing, None);
        assert_eq!(coord.total_count(), 0);
    }

    #[test]
    fn fresh_head_is_timed_from_stepping_up() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = food(1);
        let id = store.spawn(AgentBuilder::new(Point::new(0.0, 100.0)).state(MovementState::InQueueWaiting));
        coord.line_mut(LineId(0)).unwrap().queue.push_back(id);

        let stats = coord.update(SimTime(500), &mut store, &nav);
        assert_eq!(stats.started, 1);
        assert_eq!(stats.released, 0);
        assert_eq!(store.get(id).unwrap().wait_start, Some(SimTime(500)));
    }

    #[test]
    fn service_not_done_before_its_time() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = food(1);
        let now = SimTime(10_000);
        let id = store.spawn(AgentBuilder::new(Point::new(0.0, 90.0)).state(MovementState::Processing));
        store.get_mut(id).unwrap().wait_start = Some(now.earlier_by(10));
        coord.line_mut(LineId(0)).unwrap().processing = Some(id);

        assert_eq!(coord.update(now, &mut store, &nav).released, 0);
        assert_eq!(coord.lines()[0].processing, Some(id));
    }

    #[test]
    fn hunger_floors_at_zero() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = food(1);
        let id = store.spawn(AgentBuilder::new(Point::new(0.0, 300.0)).hunger(0.1));
        coord.add_to_queue(&mut store, id, &nav, SimTime(0)).unwrap();
        drain(&mut coord, &mut store, &nav, SimTime(0), 200);
        assert_eq!(store.get(id).unwrap().hunger, 0.0);
        assert_eq!(store.get(id).unwrap().state, MovementState::Idle);
    }

    #[test]
    fn busy_stall_loses_to_a_free_one() {
        let nav = open_nav();
        let mut store = AgentStore::new();
        let mut coord = food(2);
        // Two fans already at stall 0.
        for _ in 0..2 {
            let id = spawn(&mut store, 0.0, 110.0);
            coord.add_to_queue(&mut store, id, &nav, SimTime(0)).unwrap();
        }
        // 45 from stall 0 (+40 load), 55 from stall 1.
        let id = spawn(&mut store, 45.0, 100.0);
        coord.add_to_queue(&mut store, id, &nav, SimTime(0)).unwrap();
        assert_eq!(coord.line_of(id), Some(LineId(1)));
    }
}

// ── Policy defaults ───────────────────────────────────────────────────────────

#[cfg(test)]
mod policy {
    use fest_agent::{Agent, AgentStore};
    use fest_core::SimTime;

    use super::helpers::spawn;
    use crate::{Completion, QueueCompletionPolicy};

    struct Instant;

    impl QueueCompletionPolicy for Instant {
        fn check_processing_complete(&self, _agent: &Agent, _now: SimTime, _started: SimTime) -> Completion {
            Completion::release()
        }
    }

    #[test]
    fn start_hook_stamps_only_missing_time() {
        let mut store = AgentStore::new();
        let id = spawn(&mut store, 0.0, 0.0);
        let agent = store.get_mut(id).unwrap();

        Instant.on_start_processing(agent, SimTime(40));
        assert_eq!(agent.wait_start, Some(SimTime(40)));

        Instant.on_start_processing(agent, SimTime(90));
        assert_eq!(agent.wait_start, Some(SimTime(40)));
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use fest_core::FestivalConfig;
    use fest_spatial::{ObstacleField, ObstacleKind};

    use crate::{food, security};

    fn field() -> ObstacleField {
        ObstacleField::new(FestivalConfig::default().venue, 1000.0, 800.0)
    }

    #[test]
    fn security_lines_sit_on_checkpoints() {
        let cfg = FestivalConfig::default();
        let field = field();
        let lines = security::line_geometry(&field, &cfg.security);
        let booths: Vec<_> = field.of_kind(ObstacleKind::Security).collect();
        assert_eq!(lines.len(), booths.len());
        for (g, booth) in lines.iter().zip(booths) {
            assert_eq!(g.processing_point, booth.center());
            assert!(g.front.y > booth.bottom());
            let exit = g.exit.unwrap();
            assert!(exit.y < booth.y);
            assert!(field.is_valid_position(exit, 0.0));
        }
    }

    #[test]
    fn food_lines_sit_below_stalls() {
        let cfg = FestivalConfig::default();
        let field = field();
        let lines = food::line_geometry(&field, &cfg.food);
        assert_eq!(lines.len(), 3);
        for g in &lines {
            assert!(field.is_valid_position(g.processing_point, 0.0));
            assert!(g.front.y > g.processing_point.y);
            assert_eq!(g.exit, None);
        }
    }

    #[test]
    fn coordinators_from_field() {
        let cfg = FestivalConfig::default();
        let field = field();
        assert_eq!(security::SecurityPolicy::coordinator(&field, &cfg).lines().len(), 2);
        assert_eq!(food::FoodPolicy::coordinator(&field, &cfg).lines().len(), 3);
    }
}
