//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::spawn::SpawnClock;
use crate::tuning::Tuning;

/// RGBA color; channels 0-255, alpha 0-1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    /// Opaque color from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string (`#rrggbb` when opaque, `rgba(...)` otherwise)
    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

pub mod palette {
    use super::Color;

    pub const PINK: Color = Color::hex(0xff6ec7);
    pub const PURPLE: Color = Color::hex(0xb388ff);
    pub const GOLD: Color = Color::hex(0xffd700);
    pub const DAMAGE: Color = Color::hex(0xff3366);
}

/// The three kinds of scrolling entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Pink collectible (a contribution to collect)
    Item,
    /// Purple barrier on the ground
    Obstacle,
    /// Golden bonus star
    Star,
}

impl ItemKind {
    pub fn color(self) -> Color {
        match self {
            ItemKind::Item => palette::PINK,
            ItemKind::Obstacle => palette::PURPLE,
            ItemKind::Star => palette::GOLD,
        }
    }
}

/// The player-controlled designer
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed (pixels per tick)
    pub speed: f32,
    pub vel_y: f32,
    pub jumping: bool,
    pub color: Color,
}

impl Player {
    /// Player standing on the ground at the start position
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                tuning.player_start_x,
                tuning.ground_y() - tuning.player_size,
            ),
            size: Vec2::splat(tuning.player_size),
            speed: tuning.player_speed,
            vel_y: 0.0,
            jumping: false,
            color: palette::PINK,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Y of the top edge when standing on the ground
    pub fn ground_top(&self, tuning: &Tuning) -> f32 {
        tuning.ground_y() - self.size.y
    }
}

/// A scrolling collectible, obstacle or star
#[derive(Debug, Clone)]
pub struct GameItem {
    pub id: u32,
    pub kind: ItemKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward speed (pixels per tick)
    pub speed: f32,
    pub color: Color,
}

impl GameItem {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Fully past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Score feedback label that rises and fades
#[derive(Debug, Clone)]
pub struct FloatingText {
    pub pos: Vec2,
    pub text: String,
    pub color: Color,
    /// Remaining ticks
    pub life: u32,
}

/// Spark thrown out when something is collected (visual only)
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining ticks
    pub life: u32,
    pub max_life: u32,
    pub color: Color,
    /// Radius in pixels
    pub size: f32,
}

/// Downward pull on particles per tick
pub const PARTICLE_GRAVITY: f32 = 0.2;
/// Sparks per collection burst
pub const PARTICLE_BURST: usize = 10;
/// Maximum live particles
pub const MAX_PARTICLES: usize = 256;

impl Particle {
    /// Opacity from remaining life, 1 when fresh and 0 when spent
    pub fn alpha(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            (self.life as f32 / self.max_life as f32).min(1.0)
        }
    }

    /// Move one tick and age; false once the particle has burned out
    pub fn advance(&mut self) -> bool {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }
}

/// Run flags and in-game score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunState {
    pub running: bool,
    pub paused: bool,
    pub game_over: bool,
    pub score: u64,
}

impl RunState {
    /// Physics and spawning only advance in this state
    pub fn is_active(&self) -> bool {
        self.running && !self.paused && !self.game_over
    }
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Started,
    Reset,
    PauseToggled { paused: bool },
    ItemCollected { points: u64, combo: u32 },
    /// Announced when collecting at a combo that is a multiple of five
    ComboMilestone { combo: u32 },
    ObstacleHit { health: u8 },
    GameOver { score: u64 },
    StarCollected { points: u64, fact: &'static str },
}

/// Complete mini-game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub run: RunState,
    pub health: u8,
    pub combo: u32,
    /// Ticks left before the combo lapses
    pub combo_timer: u32,
    pub player: Player,
    pub items: Vec<GameItem>,
    pub obstacles: Vec<GameItem>,
    pub stars: Vec<GameItem>,
    pub floating_texts: Vec<FloatingText>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub spawn: SpawnClock,
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            run: RunState::default(),
            health: tuning.initial_health,
            combo: 0,
            combo_timer: 0,
            player: Player::new(&tuning),
            items: Vec::new(),
            obstacles: Vec::new(),
            stars: Vec::new(),
            floating_texts: Vec::new(),
            particles: Vec::new(),
            spawn: SpawnClock::default(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Back to the title screen: run flags, health, combo, entities and
    /// player position all return to their initial values
    pub fn reset(&mut self) {
        self.run = RunState::default();
        self.health = self.tuning.initial_health;
        self.combo = 0;
        self.combo_timer = 0;
        self.player = Player::new(&self.tuning);
        self.items.clear();
        self.obstacles.clear();
        self.stars.clear();
        self.floating_texts.clear();
        self.particles.clear();
        self.spawn = SpawnClock::default();
    }

    pub fn collection(&self, kind: ItemKind) -> &[GameItem] {
        match kind {
            ItemKind::Item => &self.items,
            ItemKind::Obstacle => &self.obstacles,
            ItemKind::Star => &self.stars,
        }
    }

    pub(crate) fn collection_mut(&mut self, kind: ItemKind) -> &mut Vec<GameItem> {
        match kind {
            ItemKind::Item => &mut self.items,
            ItemKind::Obstacle => &mut self.obstacles,
            ItemKind::Star => &mut self.stars,
        }
    }

    pub fn push_floating_text(&mut self, pos: Vec2, text: String, color: Color) {
        self.floating_texts.push(FloatingText {
            pos,
            text,
            color,
            life: self.tuning.floating_text_life,
        });
    }

    /// Throw a burst of sparks from `origin`, dropping the oldest past the cap
    pub fn burst(&mut self, origin: Vec2, color: Color) {
        for _ in 0..PARTICLE_BURST {
            if self.particles.len() >= MAX_PARTICLES {
                self.particles.remove(0);
            }
            let vel = Vec2::new(
                self.rng.random_range(-2.5..2.5),
                self.rng.random_range(-4.5..0.5),
            );
            let max_life = self.rng.random_range(30..50);
            let size = self.rng.random_range(2.0..5.0);
            self.particles.push(Particle {
                pos: origin,
                vel,
                life: max_life,
                max_life,
                color,
                size,
            });
        }
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Level derived from the in-game score
    pub fn level(&self) -> u32 {
        crate::level_for_score(self.run.score)
    }
}
