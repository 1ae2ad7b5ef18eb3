use eframe::egui::{self, Pos2, ViewportCommand, WindowLevel};

/// The window operations the widget needs, so handlers can be exercised
/// without a live viewport.
pub trait ViewportCtx {
    fn send_viewport_cmd(&self, cmd: ViewportCommand);
    fn request_repaint(&self);
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

pub fn window_level(topmost: bool) -> WindowLevel {
    if topmost {
        WindowLevel::AlwaysOnTop
    } else {
        WindowLevel::Normal
    }
}

/// Apply the always-on-top flag to the window.
pub fn apply_topmost<C: ViewportCtx + ?Sized>(ctx: &C, topmost: bool) {
    tracing::debug!(topmost, "applying window level");
    ctx.send_viewport_cmd(ViewportCommand::WindowLevel(window_level(topmost)));
}

/// Move the window's outer origin to `pos`.
pub fn move_window<C: ViewportCtx + ?Sized>(ctx: &C, pos: Pos2) {
    ctx.send_viewport_cmd(ViewportCommand::OuterPosition(pos));
    ctx.request_repaint();
}
