// Per-frame painting of the visible menu and pending notifications

use crate::config::OverlayConfig;
use crate::host::NotificationQueue;
use crate::menu::Entry;
use crate::render::pure::layout_rows;
use crate::render::types::{TextPainter, HEADER_BASELINE, HEADER_X, ROW_X, TEXT_SCALE};
use crate::ui::theme;
use egui_phosphor::regular as icons;

const NOTIFY_MARGIN: f32 = 20.0;
const NOTIFY_LINE: f32 = 32.0;
const NOTIFY_SCALE: f32 = 0.4;

/// Advance the scroll tween of `menu` by `dt` and paint its title and visible rows
pub fn render_menu_list<P>(menu: &mut Entry, painter: &mut P, dt: f32, config: &OverlayConfig)
where
    P: TextPainter + ?Sized,
{
    painter.set_fullscreen_viewport();
    let (_, height) = painter.framebuffer_size();

    menu.advance_scroll(dt);

    painter.set_color(theme::TEXT_HEADER);
    painter.draw_text(
        HEADER_X,
        config.header_offset + HEADER_BASELINE,
        TEXT_SCALE,
        &menu.label,
    );

    for row in layout_rows(menu, height, config.row_height, config.header_offset) {
        painter.set_color(if row.selected {
            theme::TEXT_SELECTED
        } else {
            theme::TEXT_MUTED
        });
        painter.draw_text(ROW_X, row.y, TEXT_SCALE, row.label);
    }
}

/// Stack pending notifications upwards from the bottom-left corner, newest lowest
pub fn render_notifications<P>(queue: &NotificationQueue, painter: &mut P)
where
    P: TextPainter + ?Sized,
{
    if queue.is_empty() {
        return;
    }
    let (_, height) = painter.framebuffer_size();
    painter.set_color(theme::TEXT_NOTIFY);

    let oldest_first: Vec<_> = queue.iter().collect();
    for (line, note) in oldest_first.iter().rev().enumerate() {
        let y = height - NOTIFY_MARGIN - NOTIFY_LINE * line as f32;
        painter.draw_text(
            NOTIFY_MARGIN,
            y,
            NOTIFY_SCALE,
            &format!("{} {}", icons::INFO, note.message),
        );
    }
}
