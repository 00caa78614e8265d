//! Mini-game simulation module
//!
//! All gameplay logic lives here:
//! - One tick per display frame
//! - Spawn cadence from a sampled clock, never host timers
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod controls;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use controls::{Controls, Key};
pub use spawn::{SpawnClock, SpawnTimer, spawn, spawn_due};
pub use state::{
    Color, FloatingText, GameEvent, GameItem, GameState, ItemKind, Particle, Player, RunState,
    palette,
};
pub use tick::{TickInput, combo_points, tick};
