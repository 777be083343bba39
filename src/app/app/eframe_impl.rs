//! eframe::App implementation for the overlay

use super::OverlayApp;
use crate::app::keyboard::keyboard_state;
use crate::render::{render_menu_list, render_notifications, EguiPainter, TextPainter};
use crate::ui::theme;
use eframe::egui;

const HIDDEN_HINT: &str = "Press Start or F1 to open the menu";

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for device hotplug events
        self.poll_device_events();

        let held = self.poll_pads() | ctx.input(keyboard_state);
        let input = self.tracker.update(held);

        self.handle_frame(&input);

        self.host.notifications.tick();

        let dt = self.config.frame_timing.step(ctx.input(|i| i.stable_dt));
        let visible = self.host.overlay_visible();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::BG_DARK))
            .show(ctx, |ui| {
                let mut painter = EguiPainter::new(ui.painter().clone());
                if visible {
                    render_menu_list(self.stack.current_mut(), &mut painter, dt, &self.config);
                } else {
                    painter.set_fullscreen_viewport();
                    painter.set_color(theme::TEXT_MUTED);
                    painter.draw_text(60.0, 80.0, 0.4, HIDDEN_HINT);
                }
                render_notifications(&self.host.notifications, &mut painter);
            });

        if self.host.quit_requested() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Pads are polled, not event driven
        ctx.request_repaint();
    }
}
