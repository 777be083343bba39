// TextPainter over an egui::Painter

use crate::render::types::{Rgba, TextPainter};
use eframe::egui::{self, Align2, Color32, FontId, Rect};

/// Point size of text drawn at scale 1.0
const BASE_FONT_SIZE: f32 = 64.0;

pub struct EguiPainter {
    painter: egui::Painter,
    viewport: Rect,
    color: Color32,
}

impl EguiPainter {
    pub fn new(painter: egui::Painter) -> Self {
        let viewport = painter.clip_rect();
        Self {
            painter,
            viewport,
            color: Color32::WHITE,
        }
    }
}

fn to_color32(color: Rgba) -> Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a),
    )
}

impl TextPainter for EguiPainter {
    fn draw_text(&mut self, x: f32, y: f32, scale: f32, text: &str) {
        let pos = self.viewport.min + egui::vec2(x, y);
        self.painter.text(
            pos,
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(BASE_FONT_SIZE * scale),
            self.color,
        );
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = to_color32(color);
    }

    fn framebuffer_size(&self) -> (f32, f32) {
        (self.viewport.width(), self.viewport.height())
    }

    fn set_fullscreen_viewport(&mut self) {
        let screen = self.painter.ctx().screen_rect();
        self.painter.set_clip_rect(screen);
        self.viewport = screen;
    }
}
