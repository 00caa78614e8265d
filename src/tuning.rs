//! Data-driven game balance
//!
//! Defaults come from [`crate::consts`]; a JSON document can override any
//! subset of fields.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Top of the band where items and stars may appear
const SPAWN_TOP: f32 = 50.0;
/// Items stay at least this far above the canvas bottom
const ITEM_BOTTOM_MARGIN: f32 = 150.0;
/// Stars stay at least this far above the canvas bottom
const STAR_BOTTOM_MARGIN: f32 = 200.0;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Spawn parameters for one entity kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnTuning {
    /// Milliseconds between spawns
    pub interval_ms: f64,
    /// Base leftward speed in pixels per tick (scaled by difficulty)
    pub base_speed: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub ground_height: f32,

    pub gravity: f32,
    pub jump_strength: f32,
    pub player_speed: f32,
    pub player_size: f32,
    pub player_start_x: f32,
    pub knockback: f32,
    pub initial_health: u8,

    pub item: SpawnTuning,
    pub obstacle: SpawnTuning,
    pub star: SpawnTuning,

    pub item_points: u64,
    pub star_points: u64,
    pub combo_window_ticks: u32,
    pub floating_text_life: u32,
    pub notification_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ground_height: GROUND_HEIGHT,

            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            player_speed: PLAYER_SPEED,
            player_size: PLAYER_SIZE,
            player_start_x: PLAYER_START_X,
            knockback: KNOCKBACK,
            initial_health: INITIAL_HEALTH,

            item: SpawnTuning {
                interval_ms: ITEM_INTERVAL_MS,
                base_speed: 3.0,
                width: 25.0,
                height: 25.0,
            },
            obstacle: SpawnTuning {
                interval_ms: OBSTACLE_INTERVAL_MS,
                base_speed: 4.0,
                width: 30.0,
                height: 40.0,
            },
            star: SpawnTuning {
                interval_ms: STAR_INTERVAL_MS,
                base_speed: 3.5,
                width: 20.0,
                height: 20.0,
            },

            item_points: ITEM_POINTS,
            star_points: STAR_POINTS,
            combo_window_ticks: COMBO_WINDOW_TICKS,
            floating_text_life: FLOATING_TEXT_LIFE,
            notification_ms: NOTIFICATION_MS,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON; missing fields keep their defaults.
    /// The merged result must pass [`Tuning::validate`].
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject geometry the simulation cannot honor
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: String| -> Result<(), TuningError> { Err(TuningError::Invalid(msg)) };

        if !(1..=INITIAL_HEALTH).contains(&self.initial_health) {
            return invalid(format!(
                "initial_health must be 1..={}, got {}",
                INITIAL_HEALTH, self.initial_health
            ));
        }
        if self.player_size <= 0.0 || self.canvas_width <= self.player_size {
            return invalid(format!(
                "canvas_width {} must exceed a positive player_size {}",
                self.canvas_width, self.player_size
            ));
        }
        if self.ground_height < 0.0 || self.ground_y() <= self.player_size {
            return invalid(format!(
                "ground at y={} leaves no room for the player",
                self.ground_y()
            ));
        }
        let min_height = SPAWN_TOP + STAR_BOTTOM_MARGIN;
        if self.canvas_height <= min_height {
            return invalid(format!(
                "canvas_height must exceed {}, got {}",
                min_height, self.canvas_height
            ));
        }
        for (name, params) in [
            ("item", &self.item),
            ("obstacle", &self.obstacle),
            ("star", &self.star),
        ] {
            if params.width <= 0.0 || params.height <= 0.0 || params.base_speed <= 0.0 {
                return invalid(format!("{} size and speed must be positive", name));
            }
            if params.interval_ms < 0.0 {
                return invalid(format!("{} interval_ms must not be negative", name));
            }
        }
        Ok(())
    }

    /// Y coordinate of the top of the ground band
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.canvas_height - self.ground_height
    }

    /// Rightmost x the player may occupy
    #[inline]
    pub fn player_max_x(&self) -> f32 {
        (self.canvas_width - self.player_size).max(0.0)
    }

    /// Vertical band for item spawns; never empty
    pub fn item_band(&self) -> Range<f32> {
        spawn_band(self.canvas_height - ITEM_BOTTOM_MARGIN)
    }

    /// Vertical band for star spawns; never empty
    pub fn star_band(&self) -> Range<f32> {
        spawn_band(self.canvas_height - STAR_BOTTOM_MARGIN)
    }
}

fn spawn_band(bottom: f32) -> Range<f32> {
    SPAWN_TOP..bottom.max(SPAWN_TOP + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.ground_y(), GROUND_Y);
        assert_eq!(t.player_max_x(), CANVAS_WIDTH - PLAYER_SIZE);
        assert_eq!(t.initial_health, 3);
    }

    #[test]
    fn test_partial_override() {
        let t = Tuning::from_json(r#"{ "gravity": 0.8, "star_points": 75 }"#).unwrap();
        assert_eq!(t.gravity, 0.8);
        assert_eq!(t.star_points, 75);
        assert_eq!(t.item_points, ITEM_POINTS);
        assert_eq!(t.obstacle.interval_ms, OBSTACLE_INTERVAL_MS);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            Tuning::from_json("{ gravity: "),
            Err(TuningError::Json(_))
        ));
    }

    #[test]
    fn test_short_canvas_rejected() {
        for height in [200.0, 250.0] {
            let json = format!(r#"{{ "canvas_height": {} }}"#, height);
            assert!(matches!(
                Tuning::from_json(&json),
                Err(TuningError::Invalid(_))
            ));
        }
        let t = Tuning::from_json(r#"{ "canvas_height": 260 }"#).unwrap();
        assert_eq!(t.star_band(), 50.0..60.0);
        assert_eq!(t.item_band(), 50.0..110.0);
    }

    #[test]
    fn test_health_out_of_range_rejected() {
        for health in [0, 4, 5, 255] {
            let json = format!(r#"{{ "initial_health": {} }}"#, health);
            assert!(matches!(
                Tuning::from_json(&json),
                Err(TuningError::Invalid(_))
            ));
        }
        assert_eq!(
            Tuning::from_json(r#"{ "initial_health": 1 }"#)
                .unwrap()
                .initial_health,
            1
        );
    }

    #[test]
    fn test_degenerate_sizes_rejected() {
        for json in [
            r#"{ "player_size": 0 }"#,
            r#"{ "canvas_width": 30 }"#,
            r#"{ "ground_height": 430 }"#,
            r#"{ "item": { "interval_ms": 2000, "base_speed": 3, "width": 0, "height": 25 } }"#,
            r#"{ "star": { "interval_ms": -1, "base_speed": 3, "width": 20, "height": 20 } }"#,
        ] {
            assert!(Tuning::from_json(json).is_err(), "{json}");
        }
    }

    #[test]
    fn test_bands_never_empty() {
        let t = Tuning {
            canvas_height: 120.0,
            ..Tuning::default()
        };
        assert!(!t.item_band().is_empty());
        assert!(!t.star_band().is_empty());
        assert_eq!(Tuning::default().item_band(), 50.0..300.0);
        assert_eq!(Tuning::default().star_band(), 50.0..250.0);
    }
}
