pub mod theme;

use crate::countdown::{countdown_text, DisplayMode};
use crate::gesture::{DragGesture, Release};
use crate::refresh::RefreshTimer;
use crate::settings::Settings;
use crate::visibility::{apply_topmost, move_window, ViewportCtx};
use chrono::{Local, NaiveDateTime};
use eframe::egui::{self, pos2, Event, PointerButton, Pos2, Vec2, ViewportCommand};
use std::time::Instant;

/// Where the window opens, relative to the screen origin.
pub const DEFAULT_POSITION: Pos2 = pos2(100.0, 100.0);
/// Initial size before the window is fitted to the label.
pub const INITIAL_SIZE: [f32; 2] = [260.0, 36.0];

/// All mutable widget state. Everything runs on the UI thread.
pub struct LifeTrackerApp {
    target: Option<NaiveDateTime>,
    mode: DisplayMode,
    label: String,
    topmost: bool,
    gesture: DragGesture,
    refresh: RefreshTimer,
    window_pos: Pos2,
    fitted_size: Option<Vec2>,
}

impl LifeTrackerApp {
    /// The label stays empty until the first refresh runs.
    pub fn new(settings: &Settings) -> Self {
        Self {
            target: settings.target(),
            mode: DisplayMode::default(),
            label: String::new(),
            topmost: true,
            gesture: DragGesture::default(),
            refresh: RefreshTimer::default(),
            window_pos: DEFAULT_POSITION,
            fitted_size: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_topmost(&self) -> bool {
        self.topmost
    }

    pub fn window_pos(&self) -> Pos2 {
        self.window_pos
    }

    pub fn set_window_pos(&mut self, pos: Pos2) {
        self.window_pos = pos;
    }

    pub fn refresh_timer(&self) -> &RefreshTimer {
        &self.refresh
    }

    /// Recompute the label and schedule the next refresh, replacing any
    /// refresh that was still pending.
    pub fn update_display(&mut self, now: NaiveDateTime, instant: Instant) {
        self.label = countdown_text(self.target, now, self.mode);
        self.refresh.schedule(instant);
    }

    pub fn handle_press(&mut self, pos: Pos2) {
        self.gesture.press(pos);
    }

    /// Keep the grabbed point under the pointer while the button is held.
    pub fn handle_motion<C: ViewportCtx + ?Sized>(&mut self, ctx: &C, pos: Pos2) {
        if let Some(delta) = self.gesture.motion(pos) {
            self.window_pos += delta;
            move_window(ctx, self.window_pos);
        }
    }

    /// A release without motion toggles the display mode and refreshes the
    /// label right away.
    pub fn handle_release(&mut self, now: NaiveDateTime, instant: Instant) -> Release {
        let outcome = self.gesture.release();
        if outcome == Release::Tap {
            self.mode = self.mode.toggle();
            tracing::debug!(mode = ?self.mode, "display mode toggled");
            self.update_display(now, instant);
        }
        outcome
    }

    pub fn toggle_topmost<C: ViewportCtx + ?Sized>(&mut self, ctx: &C) {
        self.topmost = !self.topmost;
        apply_topmost(ctx, self.topmost);
    }

    /// One UI frame: sync the window origin, apply input, refresh the label
    /// when due, draw, and ask for a repaint when the next refresh is due.
    pub fn run_frame(&mut self, ctx: &egui::Context, now: NaiveDateTime, instant: Instant) {
        if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
            self.window_pos = rect.min;
        }
        self.process_input(ctx, now, instant);
        if self.refresh.is_due(instant) {
            self.update_display(now, instant);
        }
        self.draw(ctx);
        ctx.request_repaint_after(self.refresh.remaining(instant));
    }

    fn process_input(&mut self, ctx: &egui::Context, now: NaiveDateTime, instant: Instant) {
        let events = ctx.input(|i| i.events.clone());
        // Only the latest motion between button events matters; the window
        // position is absolute.
        let mut motion: Option<Pos2> = None;
        for event in events {
            match event {
                Event::PointerMoved(pos) => motion = Some(pos),
                Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    ..
                } => {
                    if let Some(p) = motion.take() {
                        self.handle_motion(ctx, p);
                    }
                    match (button, pressed) {
                        (PointerButton::Primary, true) => self.handle_press(pos),
                        (PointerButton::Primary, false) => {
                            self.handle_release(now, instant);
                        }
                        (PointerButton::Secondary, true) => self.toggle_topmost(ctx),
                        _ => {}
                    }
                }
                _ => {}
            }
        }
        if let Some(p) = motion {
            self.handle_motion(ctx, p);
        }
    }

    fn draw(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(theme::widget_frame())
            .show(ctx, |ui| {
                let response = ui.add(
                    egui::Label::new(theme::label_text(&self.label))
                        .wrap(false)
                        .selectable(false),
                );
                let desired = theme::fitted_size(response.rect.size());
                if self
                    .fitted_size
                    .map_or(true, |s| (s - desired).length() > 0.5)
                {
                    self.fitted_size = Some(desired);
                    ctx.send_viewport_cmd(ViewportCommand::InnerSize(desired));
                }
            });
    }
}

impl eframe::App for LifeTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx, Local::now().naive_local(), Instant::now());
    }
}

/// Window options: borderless, always on top, at the default offset.
pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(crate::APP_NAME)
            .with_decorations(false)
            .with_always_on_top()
            .with_resizable(false)
            .with_taskbar(false)
            .with_position(DEFAULT_POSITION)
            .with_inner_size(INITIAL_SIZE),
        ..Default::default()
    }
}
