//! Colors for scene elements

use crate::sim::Color;

pub const SKY_TOP: Color = Color::hex(0x1a0a2e);
pub const SKY_BOTTOM: Color = Color::hex(0x0f0520);
pub const GROUND: Color = Color::hex(0x2d1b4e);
pub const GRID: Color = Color::hex(0xff6ec7).with_alpha(0.1);
pub const GRID_SPACING: f32 = 30.0;
pub const OUTLINE: Color = Color::hex(0x000000);
pub const WHITE: Color = Color::hex(0xffffff);
/// Dimmed backdrop behind overlays
pub const SHADE: Color = Color::hex(0x000000).with_alpha(0.8);
