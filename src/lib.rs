//! Heritage Run - the "Collecte de l'heritage" canvas mini-game
//!
//! Core modules:
//! - `sim`: Simulation (player physics, spawning, collisions, scoring)
//! - `renderer`: 2D canvas drawing of the game state
//! - `progress`: Page-wide score/discovery progress with local persistence
//! - `content`: Quiz, timeline, pioneers, achievements and bonus facts
//! - `notify`: Transient toast notifications
//! - `platform`: Browser/native platform abstraction
//! - `session`: One page session wiring input, game, progress and toasts
//! - `tuning`: Data-driven game balance

pub mod content;
pub mod notify;
pub mod platform;
pub mod progress;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use notify::{Notification, NotificationKind, Notifications};
pub use progress::{ProgressSink, ProgressSnapshot, ProgressStore};
pub use session::Session;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 700.0;
    pub const CANVAS_HEIGHT: f32 = 450.0;
    /// Height of the ground band at the bottom of the canvas
    pub const GROUND_HEIGHT: f32 = 30.0;
    pub const GROUND_Y: f32 = CANVAS_HEIGHT - GROUND_HEIGHT;

    /// Player physics (per tick)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_STRENGTH: f32 = -12.0;
    pub const PLAYER_SPEED: f32 = 6.0;
    pub const PLAYER_SIZE: f32 = 35.0;
    pub const PLAYER_START_X: f32 = 50.0;
    /// Knockback when hitting an obstacle
    pub const KNOCKBACK: f32 = 15.0;

    pub const INITIAL_HEALTH: u8 = 3;

    /// Spawn cadence in milliseconds
    pub const ITEM_INTERVAL_MS: f64 = 2000.0;
    pub const OBSTACLE_INTERVAL_MS: f64 = 3000.0;
    pub const STAR_INTERVAL_MS: f64 = 5000.0;

    /// Scoring
    pub const ITEM_POINTS: u64 = 20;
    pub const STAR_POINTS: u64 = 50;
    /// Combo window in ticks (3 seconds at 60 Hz)
    pub const COMBO_WINDOW_TICKS: u32 = 180;
    /// Every this many combo steps a milestone is announced
    pub const COMBO_MILESTONE: u32 = 5;

    /// Floating text lifetime in ticks
    pub const FLOATING_TEXT_LIFE: u32 = 60;
    /// Notification lifetime in milliseconds
    pub const NOTIFICATION_MS: f64 = 3000.0;

    /// Points per level
    pub const POINTS_PER_LEVEL: u64 = 100;
    /// Difficulty speed multiplier cap
    pub const MAX_DIFFICULTY: f32 = 2.0;
}

/// Level tier for a score: `floor(score / 100) + 1`
#[inline]
pub fn level_for_score(score: u64) -> u32 {
    (score / consts::POINTS_PER_LEVEL) as u32 + 1
}

/// Spawn speed multiplier for a score, capped at [`consts::MAX_DIFFICULTY`]
#[inline]
pub fn difficulty_multiplier(score: u64) -> f32 {
    let level = level_for_score(score);
    (1.0 + (level - 1) as f32 * 0.1).min(consts::MAX_DIFFICULTY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_for_score() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(99), 1);
        assert_eq!(level_for_score(100), 2);
        assert_eq!(level_for_score(5000), 51);
    }

    #[test]
    fn test_difficulty_capped() {
        assert!((difficulty_multiplier(0) - 1.0).abs() < 1e-6);
        assert!((difficulty_multiplier(250) - 1.2).abs() < 1e-5);
        assert_eq!(difficulty_multiplier(5000), 2.0);
    }

    proptest! {
        #[test]
        fn difficulty_monotonic_and_capped(a in 0u64..1_000_000, b in 0u64..1_000_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(difficulty_multiplier(lo) <= difficulty_multiplier(hi));
            prop_assert!(difficulty_multiplier(hi) <= consts::MAX_DIFFICULTY);
            prop_assert!(difficulty_multiplier(lo) >= 1.0);
        }
    }
}
