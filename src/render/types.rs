//! Drawing contract consumed by the menu renderer

/// Straight (non-premultiplied) color, components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Text drawing primitive provided by the video layer
pub trait TextPainter {
    /// Draw `text` with its baseline at `(x, y)`; `scale` 1.0 is the full font size
    fn draw_text(&mut self, x: f32, y: f32, scale: f32, text: &str);
    fn set_color(&mut self, color: Rgba);
    /// (width, height) of the drawable area
    fn framebuffer_size(&self) -> (f32, f32);
    fn set_fullscreen_viewport(&mut self);
}

/// Horizontal position of the menu title
pub const HEADER_X: f32 = 60.0;
/// Baseline of the title below the header offset
pub const HEADER_BASELINE: f32 = 60.0;
/// Horizontal position of menu rows
pub const ROW_X: f32 = 100.0;
pub const TEXT_SCALE: f32 = 0.5;

/// A child row that survived clipping
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout<'a> {
    pub index: usize,
    pub y: f32,
    pub label: &'a str,
    pub selected: bool,
}
