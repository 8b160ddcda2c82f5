//! [`Surface`] implementation on top of an [`egui::Painter`].

use glam::Vec2;
use knot_core::{
    color::Rgb,
    render::{Font, Surface},
};

/// Draws scene frames into a painter whose canvas starts at `origin`.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        to_screen(self.origin, p)
    }
}

fn to_screen(origin: egui::Pos2, p: Vec2) -> egui::Pos2 {
    origin + egui::vec2(p.x, p.y)
}

fn to_color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.0, c.1, c.2)
}

fn to_font_id(font: Font, size: f32) -> egui::FontId {
    match font {
        Font::Monospace => egui::FontId::monospace(size),
        Font::Proportional => egui::FontId::proportional(size),
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Rgb) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, to_color32(color));
    }

    fn circle_filled(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    fn line_segment(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(width, to_color32(color)),
        );
    }

    fn rect_stroke(&mut self, min: Vec2, max: Vec2, width: f32, color: Rgb) {
        let rect = egui::Rect::from_min_max(self.to_screen(min), self.to_screen(max));
        self.painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(width, to_color32(color)),
            egui::StrokeKind::Inside,
        );
    }

    fn text(&mut self, pos: Vec2, text: &str, font: Font, size: f32, color: Rgb) {
        self.painter.text(
            self.to_screen(pos),
            egui::Align2::LEFT_TOP,
            text,
            to_font_id(font, size),
            to_color32(color),
        );
    }

    fn present(&mut self) {
        // Keep frames coming even without input so the points keep moving.
        self.painter.ctx().request_repaint();
    }
}
