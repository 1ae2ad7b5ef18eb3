use eframe::egui::{self, Color32, RichText, Stroke, Vec2};

pub const BACKGROUND: Color32 = Color32::from_rgb(211, 211, 211);
pub const FOREGROUND: Color32 = Color32::BLACK;
pub const BORDER_WIDTH: f32 = 1.0;
pub const PADDING: f32 = 5.0;
pub const FONT_SIZE: f32 = 16.0;

/// Grey panel with a thin solid border around the label.
pub fn widget_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(BACKGROUND)
        .stroke(Stroke::new(BORDER_WIDTH, FOREGROUND))
        .inner_margin(PADDING + BORDER_WIDTH)
}

pub fn label_text(text: &str) -> RichText {
    RichText::new(text).size(FONT_SIZE).color(FOREGROUND)
}

/// Space taken by border and padding on both sides.
pub fn chrome_size() -> Vec2 {
    Vec2::splat(2.0 * (PADDING + BORDER_WIDTH))
}

/// Window size that fits a label of `label_size`.
pub fn fitted_size(label_size: Vec2) -> Vec2 {
    (label_size + chrome_size()).ceil()
}
