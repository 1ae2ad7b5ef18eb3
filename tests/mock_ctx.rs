use eframe::egui;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockCtx {
    pub commands: Arc<Mutex<Vec<egui::ViewportCommand>>>,
    pub repaints: Arc<Mutex<usize>>,
}

impl MockCtx {
    pub fn take_commands(&self) -> Vec<egui::ViewportCommand> {
        std::mem::take(&mut *self.commands.lock().unwrap())
    }
}

// Implement the trait from the main crate so tests can drive window handling.
impl lifetracker::visibility::ViewportCtx for MockCtx {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        self.commands.lock().unwrap().push(cmd);
    }

    fn request_repaint(&self) {
        *self.repaints.lock().unwrap() += 1;
    }
}
