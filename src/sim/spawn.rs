//! Timed spawning of items, obstacles and stars
//!
//! Cadence is measured against a clock sampled once per tick, so spawn rate
//! does not depend on frame rate.

use glam::Vec2;
use rand::Rng;

use super::state::{GameItem, GameState, ItemKind};
use crate::difficulty_multiplier;

/// Last spawn time for one entity kind
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnTimer {
    last_ms: Option<f64>,
}

impl SpawnTimer {
    /// Fires when more than `interval_ms` has passed since the last spawn.
    /// A timer that never fired is always due.
    pub fn due(&mut self, now_ms: f64, interval_ms: f64) -> bool {
        let due = match self.last_ms {
            Some(last) => now_ms - last > interval_ms,
            None => true,
        };
        if due {
            self.last_ms = Some(now_ms);
        }
        due
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnClock {
    pub item: SpawnTimer,
    pub obstacle: SpawnTimer,
    pub star: SpawnTimer,
}

/// Spawn whatever is due at `now_ms`
pub fn spawn_due(state: &mut GameState, now_ms: f64) {
    let t = &state.tuning;
    let (item_ms, obstacle_ms, star_ms) =
        (t.item.interval_ms, t.obstacle.interval_ms, t.star.interval_ms);

    if state.spawn.item.due(now_ms, item_ms) {
        spawn(state, ItemKind::Item);
    }
    if state.spawn.obstacle.due(now_ms, obstacle_ms) {
        spawn(state, ItemKind::Obstacle);
    }
    if state.spawn.star.due(now_ms, star_ms) {
        spawn(state, ItemKind::Star);
    }
}

/// Create one entity at the right edge, speed scaled by current difficulty
pub fn spawn(state: &mut GameState, kind: ItemKind) {
    let multiplier = difficulty_multiplier(state.run.score);
    let (params, y) = match kind {
        ItemKind::Item => (
            state.tuning.item,
            state.rng.random_range(state.tuning.item_band()),
        ),
        ItemKind::Obstacle => {
            let params = state.tuning.obstacle;
            (params, state.tuning.ground_y() - params.height)
        }
        ItemKind::Star => (
            state.tuning.star,
            state.rng.random_range(state.tuning.star_band()),
        ),
    };

    let item = GameItem {
        id: state.next_entity_id(),
        kind,
        pos: Vec2::new(state.tuning.canvas_width, y),
        size: Vec2::new(params.width, params.height),
        speed: params.base_speed * multiplier,
        color: kind.color(),
    };
    log::debug!("Spawned {:?} #{} at y={:.0}", kind, item.id, y);
    state.collection_mut(kind).push(item);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_first_call_fires() {
        let mut timer = SpawnTimer::default();
        assert!(timer.due(10.0, 2000.0));
        assert!(!timer.due(1500.0, 2000.0));
        // Strictly greater than the interval
        assert!(!timer.due(2010.0, 2000.0));
        assert!(timer.due(2011.0, 2000.0));
    }

    #[test]
    fn test_spawn_due_cadence() {
        let mut state = GameState::new(7);
        spawn_due(&mut state, 0.0);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.stars.len(), 1);

        spawn_due(&mut state, 2500.0);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.obstacles.len(), 1);

        spawn_due(&mut state, 5001.0);
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.stars.len(), 2);
    }

    #[test]
    fn test_spawn_geometry() {
        let mut state = GameState::new(42);
        for _ in 0..50 {
            spawn(&mut state, ItemKind::Item);
            spawn(&mut state, ItemKind::Star);
        }
        spawn(&mut state, ItemKind::Obstacle);

        assert!(state.items.iter().all(|i| i.pos.y >= 50.0 && i.pos.y < 300.0));
        assert!(state.stars.iter().all(|s| s.pos.y >= 50.0 && s.pos.y < 250.0));
        let obstacle = &state.obstacles[0];
        assert_eq!(obstacle.pos.y, state.tuning.ground_y() - 40.0);
        assert_eq!(obstacle.pos.x, state.tuning.canvas_width);
        assert_eq!(obstacle.speed, 4.0);
    }

    #[test]
    fn test_short_canvas_spawns_inside_band() {
        // Built directly, bypassing Tuning::from_json validation
        let tuning = crate::Tuning {
            canvas_height: 200.0,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(8, tuning);
        spawn(&mut state, ItemKind::Item);
        spawn(&mut state, ItemKind::Star);
        assert!((50.0..51.0).contains(&state.items[0].pos.y));
        assert!((50.0..51.0).contains(&state.stars[0].pos.y));
    }

    #[test]
    fn test_speed_scales_with_score() {
        let mut state = GameState::new(3);
        state.run.score = 250;
        spawn(&mut state, ItemKind::Item);
        assert!((state.items[0].speed - 3.0 * 1.2).abs() < 1e-4);

        state.run.score = 5000;
        spawn(&mut state, ItemKind::Obstacle);
        assert_eq!(state.obstacles[0].speed, 8.0);
    }

    #[test]
    fn test_ids_unique_in_spawn_order() {
        let mut state = GameState::new(9);
        spawn(&mut state, ItemKind::Item);
        spawn(&mut state, ItemKind::Item);
        assert!(state.items[0].id < state.items[1].id);
    }
}
