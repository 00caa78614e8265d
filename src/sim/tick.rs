//! Per-frame simulation tick
//!
//! Core game loop that advances the mini-game by one display frame.

use rand::Rng;

use super::spawn::spawn_due;
use super::state::{GameEvent, GameItem, GameState, ItemKind, palette};
use crate::consts::COMBO_MILESTONE;
use crate::content::facts::BONUS_FACTS;
use crate::progress::ProgressSink;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Arrow keys currently held
    pub left: bool,
    pub right: bool,
    /// One-shot commands (Space, Enter, R, Escape)
    pub jump: bool,
    pub start: bool,
    pub restart: bool,
    pub pause: bool,
    /// Clock sample for spawn cadence (milliseconds)
    pub now_ms: f64,
}

/// Points for collecting an item at the given combo:
/// `floor(base * (1 + 0.1 * combo))`, or `base` with no combo
pub fn combo_points(base: u64, combo: u32) -> u64 {
    if combo == 0 {
        base
    } else {
        base * (10 + combo as u64) / 10
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, progress: &mut dyn ProgressSink) {
    apply_commands(state, input);

    if !state.run.is_active() {
        return;
    }

    move_player(state, input);

    spawn_due(state, input.now_ms);

    advance_items(state, progress);
    advance_obstacles(state);
    advance_stars(state, progress);

    // Combo window
    if state.combo_timer > 0 {
        state.combo_timer -= 1;
        if state.combo_timer == 0 {
            state.combo = 0;
        }
    }

    for text in &mut state.floating_texts {
        text.life = text.life.saturating_sub(1);
    }
    state.floating_texts.retain(|t| t.life > 0);

    state.particles.retain_mut(|p| p.advance());
}

fn apply_commands(state: &mut GameState, input: &TickInput) {
    if input.restart && (state.run.running || state.run.game_over) {
        state.reset();
        state.emit(GameEvent::Reset);
        log::info!("Game reset");
    }

    if input.start && !state.run.running && !state.run.game_over {
        state.run.running = true;
        state.emit(GameEvent::Started);
        log::info!("Game started");
    }

    if input.pause && state.run.running {
        state.run.paused = !state.run.paused;
        state.emit(GameEvent::PauseToggled {
            paused: state.run.paused,
        });
    }

    if input.jump && state.run.running && !state.player.jumping {
        state.player.vel_y = state.tuning.jump_strength;
        state.player.jumping = true;
    }
}

fn move_player(state: &mut GameState, input: &TickInput) {
    let max_x = state.tuning.player_max_x();
    let ground_top = state.player.ground_top(&state.tuning);
    let player = &mut state.player;

    if input.left && player.pos.x > 0.0 {
        player.pos.x -= player.speed;
    }
    if input.right && player.pos.x < max_x {
        player.pos.x += player.speed;
    }
    player.pos.x = player.pos.x.clamp(0.0, max_x);

    player.vel_y += state.tuning.gravity;
    player.pos.y += player.vel_y;

    if player.pos.y >= ground_top {
        player.pos.y = ground_top;
        player.vel_y = 0.0;
        player.jumping = false;
    }
}

/// Move a collection left, dropping entities that left the screen and
/// returning those that hit the player (each removed exactly once)
fn advance_collection(state: &mut GameState, kind: ItemKind) -> Vec<GameItem> {
    let player = state.player.rect();
    let collide = !state.run.game_over;
    let mut hits = Vec::new();

    state.collection_mut(kind).retain_mut(|item| {
        item.pos.x -= item.speed;
        if collide && player.overlaps(&item.rect()) {
            hits.push(item.clone());
            return false;
        }
        !item.is_off_screen()
    });

    hits
}

fn advance_items(state: &mut GameState, progress: &mut dyn ProgressSink) {
    for item in advance_collection(state, ItemKind::Item) {
        let combo = state.combo;
        let points = combo_points(state.tuning.item_points, combo);
        if combo > 0 && combo % COMBO_MILESTONE == 0 {
            state.emit(GameEvent::ComboMilestone { combo });
        }

        state.run.score += points;
        state.combo += 1;
        state.combo_timer = state.tuning.combo_window_ticks;
        state.push_floating_text(item.pos, format!("+{}", points), palette::PINK);
        state.burst(item.center(), item.color);

        progress.on_score_update(points);
        progress.on_discovery();

        state.emit(GameEvent::ItemCollected {
            points,
            combo: state.combo,
        });
    }
}

fn advance_obstacles(state: &mut GameState) {
    for obstacle in advance_collection(state, ItemKind::Obstacle) {
        if state.run.game_over {
            break;
        }

        state.health = state.health.saturating_sub(1);
        state.combo = 0;
        state.combo_timer = 0;
        state.player.pos.x = (state.player.pos.x - state.tuning.knockback).max(0.0);
        state.push_floating_text(obstacle.pos, "-10".to_string(), palette::DAMAGE);
        state.emit(GameEvent::ObstacleHit {
            health: state.health,
        });

        if state.health == 0 {
            state.run.game_over = true;
            state.run.running = false;
            state.emit(GameEvent::GameOver {
                score: state.run.score,
            });
            log::info!("Game over with score {}", state.run.score);
        }
    }
}

fn advance_stars(state: &mut GameState, progress: &mut dyn ProgressSink) {
    for star in advance_collection(state, ItemKind::Star) {
        let points = state.tuning.star_points;
        state.run.score += points;
        progress.on_score_update(points);
        progress.on_discovery();

        state.push_floating_text(star.pos, format!("+{}", points), palette::GOLD);
        state.burst(star.center(), star.color);

        let fact = BONUS_FACTS[state.rng.random_range(0..BONUS_FACTS.len())];
        state.emit(GameEvent::StarCollected { points, fact });
    }
}
