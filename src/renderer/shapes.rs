//! Geometry and glyph helpers for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

/// Female sign drawn on collectibles
pub const VENUS: &str = "♀";

pub const HEART: &str = "❤️";
pub const BROKEN_HEART: &str = "💔";

/// Vertices of a five-point star inscribed in the ellipse `radii` around
/// `center`, visiting every second point so the outline self-intersects
pub fn star_points(center: Vec2, radii: Vec2) -> Vec<Vec2> {
    (0..5)
        .map(|i| {
            let angle = i as f32 * 4.0 * PI / 5.0 - PI / 2.0;
            center + Vec2::new(angle.cos() * radii.x, angle.sin() * radii.y)
        })
        .collect()
}

/// One heart per remaining life followed by a broken heart per lost one
pub fn health_text(health: u8, max_health: u8) -> String {
    let health = health.min(max_health);
    let mut text = HEART.repeat(health as usize);
    text.push_str(&BROKEN_HEART.repeat((max_health - health) as usize));
    text
}

/// Opacity and upward offset of a floating label with `life` ticks left
pub fn fade(life: u32, max_life: u32) -> (f32, f32) {
    if max_life == 0 {
        return (0.0, 0.0);
    }
    let life = life.min(max_life);
    (life as f32 / max_life as f32, (max_life - life) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_first_point_is_top() {
        let points = star_points(Vec2::new(10.0, 10.0), Vec2::splat(10.0));
        assert_eq!(points.len(), 5);
        assert!((points[0].x - 10.0).abs() < 1e-4);
        assert!((points[0].y - 0.0).abs() < 1e-4);
        for p in &points {
            assert!((p.distance(Vec2::splat(10.0)) - 10.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_health_text() {
        assert_eq!(health_text(3, 3), "❤️❤️❤️");
        assert_eq!(health_text(1, 3), "❤️💔💔");
        assert_eq!(health_text(0, 3), "💔💔💔");
    }

    #[test]
    fn test_fade() {
        assert_eq!(fade(60, 60), (1.0, 0.0));
        assert_eq!(fade(15, 60), (0.25, 45.0));
        assert_eq!(fade(0, 60), (0.0, 60.0));
    }
}
