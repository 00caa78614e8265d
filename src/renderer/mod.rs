//! Canvas 2D rendering module
//!
//! [`render`] turns a [`GameState`] into draw calls on a [`Surface`]. It only
//! reads the state; the browser backend lives in [`canvas`] and tests record
//! frames into a [`DisplayList`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod colors;
pub mod display_list;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use display_list::{DisplayList, DrawCommand};

use glam::Vec2;

use crate::sim::{Color, GameItem, GameState, Rect, palette};

/// Retro pixel font used for all in-game text
pub const PIXEL_FONT: &str = "\"Press Start 2P\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Minimal 2D drawing target
pub trait Surface {
    /// Fill `rect` with a top-to-bottom linear gradient
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color);
    fn fill_rect(&mut self, rect: Rect, fill: Color);
    fn stroke_rect(&mut self, rect: Rect, stroke: Color, line_width: f32);
    fn line(&mut self, from: Vec2, to: Vec2, stroke: Color, line_width: f32);
    /// Filled circle without outline
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Color);
    /// Filled circle with a stroked outline
    fn circle(&mut self, center: Vec2, radius: f32, fill: Color, outline: Color, line_width: f32);
    /// Closed filled polygon with a stroked outline
    fn polygon(&mut self, points: &[Vec2], fill: Color, outline: Color, line_width: f32);
    fn text(&mut self, text: &str, pos: Vec2, font: &str, fill: Color, align: TextAlign);
}

fn font(px: u32) -> String {
    format!("{}px {}", px, PIXEL_FONT)
}

/// Draw one full frame
pub fn render(state: &GameState, surface: &mut dyn Surface) {
    draw_background(state, surface);
    draw_player(state, surface);

    for item in &state.items {
        draw_item(item, surface);
    }
    for obstacle in &state.obstacles {
        let rect = obstacle.rect();
        surface.fill_rect(rect, obstacle.color);
        surface.stroke_rect(rect, colors::OUTLINE, 2.0);
    }
    for star in &state.stars {
        let points = shapes::star_points(star.center(), star.size * 0.5);
        surface.polygon(&points, star.color, colors::OUTLINE, 2.0);
    }

    draw_particles(state, surface);
    draw_hud(state, surface);
    draw_floating_texts(state, surface);
    draw_overlay(state, surface);
}

fn draw_background(state: &GameState, surface: &mut dyn Surface) {
    let t = &state.tuning;
    let (width, height) = (t.canvas_width, t.canvas_height);

    surface.fill_vertical_gradient(
        Rect::from_xywh(0.0, 0.0, width, height),
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
    );

    let mut x = 0.0;
    while x < width {
        surface.line(Vec2::new(x, 0.0), Vec2::new(x, height), colors::GRID, 1.0);
        x += colors::GRID_SPACING;
    }

    let ground_y = t.ground_y();
    surface.fill_rect(
        Rect::from_xywh(0.0, ground_y, width, t.ground_height),
        colors::GROUND,
    );
    surface.line(
        Vec2::new(0.0, ground_y),
        Vec2::new(width, ground_y),
        palette::PINK,
        3.0,
    );
}

fn draw_player(state: &GameState, surface: &mut dyn Surface) {
    let player = &state.player;
    let rect = player.rect();
    surface.fill_rect(rect, player.color);
    surface.stroke_rect(rect, colors::OUTLINE, 3.0);

    for offset in [Vec2::new(8.0, 8.0), Vec2::new(20.0, 8.0)] {
        surface.fill_rect(Rect::new(player.pos + offset, Vec2::splat(8.0)), colors::WHITE);
    }
}

fn draw_item(item: &GameItem, surface: &mut dyn Surface) {
    surface.circle(item.center(), item.size.x * 0.5, item.color, colors::OUTLINE, 2.0);
    surface.text(
        shapes::VENUS,
        item.pos + Vec2::new(7.0, 18.0),
        "16px Arial",
        colors::WHITE,
        TextAlign::Left,
    );
}

/// Sparks fade out as their life runs down
fn draw_particles(state: &GameState, surface: &mut dyn Surface) {
    for p in &state.particles {
        surface.fill_circle(p.pos, p.size, p.color.with_alpha(p.alpha()));
    }
}

fn draw_hud(state: &GameState, surface: &mut dyn Surface) {
    surface.text(
        &format!("GAME: {}", state.run.score),
        Vec2::new(20.0, 30.0),
        &font(14),
        palette::GOLD,
        TextAlign::Left,
    );
    surface.text(
        &shapes::health_text(state.health, state.tuning.initial_health),
        Vec2::new(20.0, 50.0),
        &font(12),
        palette::DAMAGE,
        TextAlign::Left,
    );
    if state.combo > 0 {
        surface.text(
            &format!("COMBO x{}!", state.combo),
            Vec2::new(state.tuning.canvas_width - 150.0, 30.0),
            &font(12),
            palette::PINK,
            TextAlign::Left,
        );
    }
}

fn draw_floating_texts(state: &GameState, surface: &mut dyn Surface) {
    let font = font(16);
    for ft in &state.floating_texts {
        let (alpha, rise) = shapes::fade(ft.life, state.tuning.floating_text_life);
        surface.text(
            &ft.text,
            ft.pos - Vec2::new(0.0, rise),
            &font,
            ft.color.with_alpha(alpha),
            TextAlign::Left,
        );
    }
}

fn draw_overlay(state: &GameState, surface: &mut dyn Surface) {
    let run = &state.run;
    let (width, height) = (state.tuning.canvas_width, state.tuning.canvas_height);
    let mid = Vec2::new(width / 2.0, height / 2.0);

    let (title, lines): (&str, Vec<String>) = if run.game_over {
        (
            "GAME OVER",
            vec![
                format!("SCORE: {}", run.score),
                "APPUYEZ SUR R POUR RECOMMENCER".to_string(),
            ],
        )
    } else if !run.running {
        (
            "PRESS ENTER TO START",
            vec!["Use ARROWS to move, SPACE to jump".to_string()],
        )
    } else if run.paused {
        ("PAUSED", vec!["Press ESC to resume".to_string()])
    } else {
        return;
    };

    surface.fill_rect(Rect::from_xywh(0.0, 0.0, width, height), colors::SHADE);
    surface.text(
        title,
        mid - Vec2::new(0.0, 40.0),
        &font(20),
        palette::PINK,
        TextAlign::Center,
    );
    let body = font(14);
    for (i, line) in lines.iter().enumerate() {
        surface.text(
            line,
            mid + Vec2::new(0.0, 30.0 * i as f32),
            &body,
            palette::GOLD,
            TextAlign::Center,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FloatingText, ItemKind, Particle, spawn};

    fn rendered(state: &GameState) -> DisplayList {
        let mut list = DisplayList::default();
        render(state, &mut list);
        list
    }

    #[test]
    fn test_idle_frame_shows_start_prompt() {
        let state = GameState::new(1);
        let list = rendered(&state);

        assert!(list.has_text("PRESS ENTER TO START"));
        assert!(list.has_text("GAME: 0"));
        assert!(list.has_text("❤️❤️❤️"));
        assert!(!list.has_text("PAUSED"));
        assert!(matches!(
            list.commands()[0],
            DrawCommand::Gradient { .. }
        ));
    }

    #[test]
    fn test_grid_lines() {
        let list = rendered(&GameState::new(1));
        let grid = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { stroke, .. } if *stroke == colors::GRID))
            .count();
        // x = 0, 30, ..., 690
        assert_eq!(grid, 24);
    }

    #[test]
    fn test_running_frame_has_no_overlay() {
        let mut state = GameState::new(1);
        state.run.running = true;
        let list = rendered(&state);
        assert!(!list.has_text("PRESS ENTER TO START"));
        assert!(!list
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::FillRect { fill, .. } if *fill == colors::SHADE)));
    }

    #[test]
    fn test_entities_and_combo() {
        let mut state = GameState::new(5);
        state.run.running = true;
        state.combo = 3;
        spawn(&mut state, ItemKind::Item);
        spawn(&mut state, ItemKind::Obstacle);
        spawn(&mut state, ItemKind::Star);

        let list = rendered(&state);
        let circles = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        let stars = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { points, .. } if points.len() == 5))
            .count();
        assert_eq!(circles, 1);
        assert_eq!(stars, 1);
        assert!(list.has_text(shapes::VENUS));
        assert!(list.has_text("COMBO x3!"));
    }

    #[test]
    fn test_pause_and_game_over_overlays() {
        let mut state = GameState::new(1);
        state.run.running = true;
        state.run.paused = true;
        assert!(rendered(&state).has_text("PAUSED"));

        state.run = crate::sim::RunState {
            running: false,
            paused: false,
            game_over: true,
            score: 340,
        };
        state.health = 0;
        let list = rendered(&state);
        assert!(list.has_text("GAME OVER"));
        assert!(list.has_text("SCORE: 340"));
        assert!(list.has_text("APPUYEZ SUR R POUR RECOMMENCER"));
        assert!(list.has_text("💔💔💔"));
        assert!(!list.has_text("PRESS ENTER TO START"));
    }

    #[test]
    fn test_floating_text_fades_and_rises() {
        let mut state = GameState::new(1);
        state.floating_texts.push(FloatingText {
            pos: Vec2::new(100.0, 200.0),
            text: "+20".into(),
            color: palette::PINK,
            life: 30,
        });
        let list = rendered(&state);
        let found = list.commands().iter().find_map(|c| match c {
            DrawCommand::Text { text, pos, fill, .. } if text == "+20" => Some((*pos, *fill)),
            _ => None,
        });
        let (pos, fill) = found.unwrap();
        assert_eq!(pos, Vec2::new(100.0, 170.0));
        assert!((fill.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_particles_drawn_faded() {
        let mut state = GameState::new(1);
        state.run.running = true;
        state.particles.push(Particle {
            pos: Vec2::new(40.0, 60.0),
            vel: Vec2::ZERO,
            life: 10,
            max_life: 40,
            color: palette::GOLD,
            size: 3.0,
        });
        let list = rendered(&state);
        let dots: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle {
                    center,
                    radius,
                    fill,
                } => Some((*center, *radius, *fill)),
                _ => None,
            })
            .collect();
        assert_eq!(dots.len(), 1);
        let (center, radius, fill) = dots[0];
        assert_eq!(center, Vec2::new(40.0, 60.0));
        assert_eq!(radius, 3.0);
        assert_eq!((fill.r, fill.g, fill.b), (0xff, 0xd7, 0x00));
        assert!((fill.a - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut state = GameState::new(9);
        state.run.running = true;
        spawn(&mut state, ItemKind::Item);
        let before = format!("{:?}", state.items);
        rendered(&state);
        assert_eq!(before, format!("{:?}", state.items));
    }
}
