// Render operations - the egui-backed painter

pub mod egui_painter;

pub use egui_painter::EguiPainter;
