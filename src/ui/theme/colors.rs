//! Overlay palette

use crate::render::Rgba;
use eframe::egui;

pub const TEXT_HEADER: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
pub const TEXT_SELECTED: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
pub const TEXT_MUTED: Rgba = Rgba::new(0.6, 0.6, 0.9, 1.0);
pub const TEXT_NOTIFY: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.9);

pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(16, 16, 24);

/// Dark visuals plus the phosphor icon font
pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_DARK;
    ctx.set_visuals(visuals);
}
