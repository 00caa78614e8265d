//! Recording surface
//!
//! Captures draw calls as data so frames can be inspected without a browser.

use glam::Vec2;

use super::{Surface, TextAlign};
use crate::sim::{Color, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Gradient {
        rect: Rect,
        top: Color,
        bottom: Color,
    },
    FillRect {
        rect: Rect,
        fill: Color,
    },
    StrokeRect {
        rect: Rect,
        stroke: Color,
        line_width: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Color,
        line_width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        fill: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
        outline: Color,
    },
    Polygon {
        points: Vec<Vec2>,
        fill: Color,
        outline: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        font: String,
        fill: Color,
        align: TextAlign,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text drawn this frame, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }
}

impl Surface for DisplayList {
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color) {
        self.commands.push(DrawCommand::Gradient { rect, top, bottom });
    }

    fn fill_rect(&mut self, rect: Rect, fill: Color) {
        self.commands.push(DrawCommand::FillRect { rect, fill });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke,
            line_width,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Color, line_width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke,
            line_width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            fill,
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: Color, outline: Color, _line_width: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            outline,
        });
    }

    fn polygon(&mut self, points: &[Vec2], fill: Color, outline: Color, _line_width: f32) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill,
            outline,
        });
    }

    fn text(&mut self, text: &str, pos: Vec2, font: &str, fill: Color, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font: font.to_string(),
            fill,
            align,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list = DisplayList::default();
        list.fill_rect(Rect::from_xywh(0.0, 0.0, 1.0, 1.0), Color::hex(0xffffff));
        list.text("hi", Vec2::ZERO, "12px Arial", Color::hex(0), TextAlign::Left);

        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::FillRect { .. }));
        assert!(list.has_text("hi"));
        assert!(!list.has_text("h"));

        list.clear();
        assert!(list.is_empty());
    }
}
