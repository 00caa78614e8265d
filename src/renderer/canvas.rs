//! `CanvasRenderingContext2d` backend

use std::f64::consts::PI;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Surface, TextAlign};
use crate::sim::{Color, Rect};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas has no 2D context
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    fn stroke_path(&self, stroke: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&stroke.css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }
}

impl Surface for CanvasSurface {
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color) {
        let gradient = self.ctx.create_linear_gradient(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.pos.x as f64,
            rect.bottom() as f64,
        );
        // Only fails on malformed color strings
        let _ = gradient.add_color_stop(0.0, &top.css());
        let _ = gradient.add_color_stop(1.0, &bottom.css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_rect(&mut self, rect: Rect, fill: Color) {
        self.ctx.set_fill_style_str(&fill.css());
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&stroke.css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Color, line_width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.stroke_path(stroke, line_width);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Color) {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, PI * 2.0)
            .ok();
        self.ctx.set_fill_style_str(&fill.css());
        self.ctx.fill();
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: Color, outline: Color, line_width: f32) {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, PI * 2.0)
            .ok();
        self.ctx.set_fill_style_str(&fill.css());
        self.ctx.fill();
        self.stroke_path(outline, line_width);
    }

    fn polygon(&mut self, points: &[Vec2], fill: Color, outline: Color, line_width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(&fill.css());
        self.ctx.fill();
        self.stroke_path(outline, line_width);
    }

    fn text(&mut self, text: &str, pos: Vec2, font: &str, fill: Color, align: TextAlign) {
        self.ctx.set_font(font);
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        self.ctx.set_fill_style_str(&fill.css());
        self.ctx.fill_text(text, pos.x as f64, pos.y as f64).ok();
    }
}
